//! Booking model and lifecycle states

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::facility::Facility;

/// Booking lifecycle states.
///
/// Stored as text: the status-update endpoint accepts whatever string an
/// admin client sends and writes it verbatim. This enum is the reference
/// machine used for the forced initial state, inspection-driven
/// completion, and transition logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum BookingStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 4] = [
        BookingStatus::Pending,
        BookingStatus::Approved,
        BookingStatus::Rejected,
        BookingStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Approved => "Approved",
            BookingStatus::Rejected => "Rejected",
            BookingStatus::Completed => "Completed",
        }
    }

    /// Parse a stored status string; `None` for anything off the machine
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(BookingStatus::Pending),
            "Approved" => Some(BookingStatus::Approved),
            "Rejected" => Some(BookingStatus::Rejected),
            "Completed" => Some(BookingStatus::Completed),
            _ => None,
        }
    }

    /// Whether the machine allows moving from `self` to `next`.
    /// Approved bookings complete only through inspection creation;
    /// Rejected and Completed are terminal.
    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (BookingStatus::Pending, BookingStatus::Approved)
                | (BookingStatus::Pending, BookingStatus::Rejected)
                | (BookingStatus::Approved, BookingStatus::Completed)
        )
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Booking record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i32,
    pub facility_id: i32,
    pub requester_name: String,
    pub requester_email: String,
    pub requester_phone: String,
    pub booking_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub purpose: String,
    pub expected_attendees: i32,
    pub status: String,
    pub request_date: DateTime<Utc>,
    pub admin_notes: Option<String>,
}

/// Booking with its facility joined for display
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetails {
    pub id: i32,
    pub facility_id: i32,
    pub facility: Facility,
    pub requester_name: String,
    pub requester_email: String,
    pub requester_phone: String,
    pub booking_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub purpose: String,
    pub expected_attendees: i32,
    pub status: String,
    pub request_date: DateTime<Utc>,
    pub admin_notes: Option<String>,
}

/// Create booking request (public submission)
#[derive(Debug, Deserialize, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateBooking {
    pub facility_id: i32,
    pub requester_name: String,
    pub requester_email: String,
    pub requester_phone: String,
    pub booking_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub purpose: String,
    pub expected_attendees: i32,
    /// Ignored: every new booking starts Pending
    pub status: Option<String>,
    pub admin_notes: Option<String>,
}
