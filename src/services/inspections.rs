//! Inspection recorder service

use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    models::{
        booking::BookingStatus,
        inspection::{CreateInspection, Inspection, InspectionDetails, UpdateInspection},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct InspectionsService {
    repository: Repository,
}

impl InspectionsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Record a post-event inspection and close out the parent booking.
    ///
    /// Two writes, in order: insert the inspection, then set the booking
    /// to Completed. They are not atomic: if the second write fails the
    /// inspection stays in place with the booking unadvanced. The
    /// completion is unconditional on the booking's prior status.
    pub async fn create(&self, data: &CreateInspection) -> AppResult<Inspection> {
        let inspection = self.repository.inspections.create(data, Utc::now()).await?;

        match self.repository.bookings.get_by_id(data.booking_id).await {
            Ok(booking) => {
                if BookingStatus::parse(&booking.status) != Some(BookingStatus::Approved) {
                    tracing::warn!(
                        booking_id = booking.id,
                        status = %booking.status,
                        "completing a booking that was never approved"
                    );
                }
                self.repository
                    .bookings
                    .update_status(booking.id, BookingStatus::Completed.as_str())
                    .await?;
            }
            Err(AppError::NotFound(_)) => {}
            Err(e) => return Err(e),
        }

        Ok(inspection)
    }

    /// List all inspections with booking and facility, newest first
    pub async fn list(&self) -> AppResult<Vec<InspectionDetails>> {
        self.repository.inspections.list().await
    }

    /// List inspections recorded for one booking
    pub async fn list_by_booking(&self, booking_id: i32) -> AppResult<Vec<InspectionDetails>> {
        self.repository.inspections.list_by_booking(booking_id).await
    }

    /// Get one inspection with booking and facility
    pub async fn get_by_id(&self, id: i32) -> AppResult<InspectionDetails> {
        self.repository.inspections.get_details(id).await
    }

    /// Replace an inspection's fields. Never re-touches the booking status.
    pub async fn update(&self, id: i32, data: &UpdateInspection) -> AppResult<Inspection> {
        self.repository.inspections.update(id, data).await
    }

    /// Delete an inspection only
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.inspections.delete(id).await
    }
}
