//! Inspection API endpoints

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppResult,
    models::inspection::{CreateInspection, Inspection, InspectionDetails, UpdateInspection},
};

/// List all inspections with booking and facility, newest first
#[utoipa::path(
    get,
    path = "/inspections",
    tag = "inspections",
    responses(
        (status = 200, description = "Inspection list", body = Vec<InspectionDetails>)
    )
)]
pub async fn list_inspections(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<InspectionDetails>>> {
    let inspections = state.services.inspections.list().await?;
    Ok(Json(inspections))
}

/// Get inspection by ID
#[utoipa::path(
    get,
    path = "/inspections/{id}",
    tag = "inspections",
    params(("id" = i32, Path, description = "Inspection ID")),
    responses(
        (status = 200, description = "Inspection details", body = InspectionDetails),
        (status = 404, description = "Inspection not found")
    )
)]
pub async fn get_inspection(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<InspectionDetails>> {
    let inspection = state.services.inspections.get_by_id(id).await?;
    Ok(Json(inspection))
}

/// List inspections recorded for one booking
#[utoipa::path(
    get,
    path = "/inspections/booking/{bookingId}",
    tag = "inspections",
    params(("bookingId" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Inspections for the booking", body = Vec<InspectionDetails>)
    )
)]
pub async fn list_inspections_by_booking(
    State(state): State<crate::AppState>,
    Path(booking_id): Path<i32>,
) -> AppResult<Json<Vec<InspectionDetails>>> {
    let inspections = state
        .services
        .inspections
        .list_by_booking(booking_id)
        .await?;
    Ok(Json(inspections))
}

/// Record an inspection. The referenced booking is set to Completed as a
/// second write.
#[utoipa::path(
    post,
    path = "/inspections",
    tag = "inspections",
    request_body = CreateInspection,
    responses(
        (status = 201, description = "Inspection created", body = Inspection)
    )
)]
pub async fn create_inspection(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateInspection>,
) -> AppResult<impl IntoResponse> {
    let inspection = state.services.inspections.create(&data).await?;
    let location = format!("/api/inspections/{}", inspection.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(inspection),
    ))
}

/// Update an inspection. Never re-touches the booking status.
#[utoipa::path(
    put,
    path = "/inspections/{id}",
    tag = "inspections",
    params(("id" = i32, Path, description = "Inspection ID")),
    request_body = UpdateInspection,
    responses(
        (status = 200, description = "Inspection updated", body = Inspection),
        (status = 404, description = "Inspection not found")
    )
)]
pub async fn update_inspection(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateInspection>,
) -> AppResult<Json<Inspection>> {
    let inspection = state.services.inspections.update(id, &data).await?;
    Ok(Json(inspection))
}

/// Delete an inspection only
#[utoipa::path(
    delete,
    path = "/inspections/{id}",
    tag = "inspections",
    params(("id" = i32, Path, description = "Inspection ID")),
    responses(
        (status = 204, description = "Inspection deleted"),
        (status = 404, description = "Inspection not found")
    )
)]
pub async fn delete_inspection(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.inspections.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
