//! Facility model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A bookable municipal asset
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub id: i32,
    pub name: String,
    /// Building, Park or Facility
    #[serde(rename = "type")]
    pub facility_type: String,
    pub location: String,
    pub description: String,
    pub capacity: i32,
    /// Free-text amenity list
    pub amenities: String,
    /// Available, Under Maintenance or Booked
    pub status: String,
    pub created_date: DateTime<Utc>,
}

/// Create facility request
#[derive(Debug, Deserialize, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateFacility {
    pub name: String,
    #[serde(rename = "type")]
    pub facility_type: String,
    pub location: String,
    pub description: String,
    pub capacity: i32,
    pub amenities: String,
    /// Defaults to Available when unset
    pub status: Option<String>,
}

/// Update facility request. Replaces every mutable field; id and
/// created_date are immutable.
#[derive(Debug, Deserialize, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateFacility {
    pub name: String,
    #[serde(rename = "type")]
    pub facility_type: String,
    pub location: String,
    pub description: String,
    pub capacity: i32,
    pub amenities: String,
    pub status: Option<String>,
}

/// Default status for facilities created or updated without one
pub const DEFAULT_FACILITY_STATUS: &str = "Available";
