//! Booking API endpoints

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    error::AppResult,
    models::booking::{Booking, BookingDetails, CreateBooking},
};

/// Query parameters for the status-update endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateQuery {
    pub status: String,
    pub admin_notes: Option<String>,
}

/// List all bookings with their facility, newest request first
#[utoipa::path(
    get,
    path = "/bookings",
    tag = "bookings",
    responses(
        (status = 200, description = "Booking list", body = Vec<BookingDetails>)
    )
)]
pub async fn list_bookings(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<BookingDetails>>> {
    let bookings = state.services.bookings.list().await?;
    Ok(Json(bookings))
}

/// Get booking by ID
#[utoipa::path(
    get,
    path = "/bookings/{id}",
    tag = "bookings",
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking details", body = BookingDetails),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn get_booking(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<BookingDetails>> {
    let booking = state.services.bookings.get_by_id(id).await?;
    Ok(Json(booking))
}

/// List bookings matching a status string
#[utoipa::path(
    get,
    path = "/bookings/status/{status}",
    tag = "bookings",
    params(("status" = String, Path, description = "Exact status string to match")),
    responses(
        (status = 200, description = "Filtered booking list", body = Vec<BookingDetails>)
    )
)]
pub async fn list_bookings_by_status(
    State(state): State<crate::AppState>,
    Path(status): Path<String>,
) -> AppResult<Json<Vec<BookingDetails>>> {
    let bookings = state.services.bookings.list_by_status(&status).await?;
    Ok(Json(bookings))
}

/// Submit a booking request. The stored status is always Pending.
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    request_body = CreateBooking,
    responses(
        (status = 201, description = "Booking created", body = Booking)
    )
)]
pub async fn create_booking(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateBooking>,
) -> AppResult<impl IntoResponse> {
    let booking = state.services.bookings.create(&data).await?;
    let location = format!("/api/bookings/{}", booking.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(booking),
    ))
}

/// Update a booking's status and admin notes (approve/reject)
#[utoipa::path(
    put,
    path = "/bookings/{id}/status",
    tag = "bookings",
    params(
        ("id" = i32, Path, description = "Booking ID"),
        ("status" = String, Query, description = "New status"),
        ("adminNotes" = Option<String>, Query, description = "Admin notes, replaces any existing notes")
    ),
    responses(
        (status = 200, description = "Booking updated", body = Booking),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn update_booking_status(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Query(query): Query<StatusUpdateQuery>,
) -> AppResult<Json<Booking>> {
    let booking = state
        .services
        .bookings
        .set_status(id, &query.status, query.admin_notes.as_deref())
        .await?;
    Ok(Json(booking))
}

/// Delete a booking (cascades to its inspections)
#[utoipa::path(
    delete,
    path = "/bookings/{id}",
    tag = "bookings",
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 204, description = "Booking deleted"),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn delete_booking(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.bookings.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
