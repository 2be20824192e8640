//! Inspection model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::booking::BookingDetails;

/// Post-event inspection record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Inspection {
    pub id: i32,
    pub booking_id: i32,
    pub inspector_name: String,
    pub inspector_contact: String,
    pub inspection_date: DateTime<Utc>,
    pub condition_before: String,
    pub condition_after: String,
    pub damages_found: bool,
    pub damage_description: Option<String>,
    /// File paths or URLs of damage photos
    pub damage_photos: Option<String>,
    pub inspection_notes: String,
}

/// Inspection with its booking (and transitively the facility) joined
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InspectionDetails {
    pub id: i32,
    pub booking_id: i32,
    pub booking: BookingDetails,
    pub inspector_name: String,
    pub inspector_contact: String,
    pub inspection_date: DateTime<Utc>,
    pub condition_before: String,
    pub condition_after: String,
    pub damages_found: bool,
    pub damage_description: Option<String>,
    pub damage_photos: Option<String>,
    pub inspection_notes: String,
}

/// Create inspection request
#[derive(Debug, Deserialize, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateInspection {
    pub booking_id: i32,
    pub inspector_name: String,
    pub inspector_contact: String,
    pub condition_before: String,
    pub condition_after: String,
    pub damages_found: bool,
    pub damage_description: Option<String>,
    pub damage_photos: Option<String>,
    pub inspection_notes: String,
}

/// Update inspection request. The parent booking and inspection_date are
/// immutable; updating never re-touches the booking status.
#[derive(Debug, Deserialize, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateInspection {
    pub inspector_name: String,
    pub inspector_contact: String,
    pub condition_before: String,
    pub condition_after: String,
    pub damages_found: bool,
    pub damage_description: Option<String>,
    pub damage_photos: Option<String>,
    pub inspection_notes: String,
}
