//! Statistics endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;

/// A labelled count
#[derive(Debug, Serialize, ToSchema)]
pub struct StatEntry {
    pub label: String,
    pub value: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FacilityStats {
    pub total: i64,
    pub by_type: Vec<StatEntry>,
    pub by_status: Vec<StatEntry>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingStats {
    pub total: i64,
    pub pending: i64,
    pub approved: i64,
    pub rejected: i64,
    pub completed: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InspectionStats {
    pub total: i64,
    pub damages_found: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    pub facilities: FacilityStats,
    pub bookings: BookingStats,
    pub inspections: InspectionStats,
}

/// Reporting summary: the counts the admin dashboard displays
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Reporting summary", body = StatsResponse)
    )
)]
pub async fn get_stats(State(state): State<crate::AppState>) -> AppResult<Json<StatsResponse>> {
    let stats = state.services.stats.overview().await?;
    Ok(Json(stats))
}
