//! Facility API endpoints

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppResult,
    models::facility::{CreateFacility, Facility, UpdateFacility},
};

/// List all facilities
#[utoipa::path(
    get,
    path = "/facilities",
    tag = "facilities",
    responses(
        (status = 200, description = "Facility list", body = Vec<Facility>)
    )
)]
pub async fn list_facilities(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Facility>>> {
    let facilities = state.services.facilities.list().await?;
    Ok(Json(facilities))
}

/// Get facility by ID
#[utoipa::path(
    get,
    path = "/facilities/{id}",
    tag = "facilities",
    params(("id" = i32, Path, description = "Facility ID")),
    responses(
        (status = 200, description = "Facility details", body = Facility),
        (status = 404, description = "Facility not found")
    )
)]
pub async fn get_facility(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Facility>> {
    let facility = state.services.facilities.get_by_id(id).await?;
    Ok(Json(facility))
}

/// Create a facility
#[utoipa::path(
    post,
    path = "/facilities",
    tag = "facilities",
    request_body = CreateFacility,
    responses(
        (status = 201, description = "Facility created", body = Facility)
    )
)]
pub async fn create_facility(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateFacility>,
) -> AppResult<impl IntoResponse> {
    let facility = state.services.facilities.create(&data).await?;
    let location = format!("/api/facilities/{}", facility.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(facility),
    ))
}

/// Update a facility
#[utoipa::path(
    put,
    path = "/facilities/{id}",
    tag = "facilities",
    params(("id" = i32, Path, description = "Facility ID")),
    request_body = UpdateFacility,
    responses(
        (status = 200, description = "Facility updated", body = Facility),
        (status = 404, description = "Facility not found")
    )
)]
pub async fn update_facility(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateFacility>,
) -> AppResult<Json<Facility>> {
    let facility = state.services.facilities.update(id, &data).await?;
    Ok(Json(facility))
}

/// Delete a facility (cascades to its bookings and their inspections)
#[utoipa::path(
    delete,
    path = "/facilities/{id}",
    tag = "facilities",
    params(("id" = i32, Path, description = "Facility ID")),
    responses(
        (status = 204, description = "Facility deleted"),
        (status = 404, description = "Facility not found")
    )
)]
pub async fn delete_facility(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.facilities.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
