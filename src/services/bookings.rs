//! Booking workflow service
//!
//! Owns the booking lifecycle: `Pending → {Approved, Rejected}`, with
//! `Approved → Completed` driven by inspection creation (see the
//! inspections service). Status writes are not rejected when they fall
//! outside that machine; they are logged and applied as requested, which
//! is the contract the admin front end was built against.

use chrono::Utc;

use crate::{
    error::AppResult,
    models::booking::{Booking, BookingDetails, BookingStatus, CreateBooking},
    repository::Repository,
};

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
}

impl BookingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a booking from a public submission. The stored status is
    /// always Pending and the request date is always the server clock,
    /// whatever the submission carried.
    pub async fn create(&self, data: &CreateBooking) -> AppResult<Booking> {
        if let Some(requested) = data.status.as_deref() {
            if requested != BookingStatus::Pending.as_str() {
                tracing::debug!(requested, "ignoring client-supplied status on booking creation");
            }
        }
        self.repository
            .bookings
            .create(data, BookingStatus::Pending.as_str(), Utc::now())
            .await
    }

    /// List all bookings with their facility, newest request first
    pub async fn list(&self) -> AppResult<Vec<BookingDetails>> {
        self.repository.bookings.list().await
    }

    /// List bookings whose status matches exactly
    pub async fn list_by_status(&self, status: &str) -> AppResult<Vec<BookingDetails>> {
        self.repository.bookings.list_by_status(status).await
    }

    /// Get one booking with its facility
    pub async fn get_by_id(&self, id: i32) -> AppResult<BookingDetails> {
        self.repository.bookings.get_details(id).await
    }

    /// Overwrite a booking's status and admin notes.
    ///
    /// Writes that fall outside the lifecycle machine (unknown strings,
    /// transitions out of a terminal state) are logged but still applied.
    pub async fn set_status(
        &self,
        id: i32,
        status: &str,
        admin_notes: Option<&str>,
    ) -> AppResult<Booking> {
        let current = self.repository.bookings.get_by_id(id).await?;

        let on_machine = matches!(
            (
                BookingStatus::parse(&current.status),
                BookingStatus::parse(status),
            ),
            (Some(from), Some(to)) if from.can_transition_to(to)
        );
        if !on_machine {
            tracing::warn!(
                booking_id = id,
                from = %current.status,
                to = %status,
                "booking status written outside the lifecycle"
            );
        }

        self.repository.bookings.set_status(id, status, admin_notes).await
    }

    /// Delete a booking and, by cascade, its inspections
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.bookings.delete(id).await
    }
}
