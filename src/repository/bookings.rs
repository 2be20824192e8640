//! Bookings repository for database operations

use chrono::{DateTime, Utc};
use sqlx::{postgres::PgRow, Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult},
    models::{
        booking::{Booking, BookingDetails, CreateBooking},
        facility::Facility,
    },
};

const DETAILS_SELECT: &str = r#"
    SELECT b.id, b.facility_id, b.requester_name, b.requester_email, b.requester_phone,
           b.booking_date, b.start_time, b.end_time, b.purpose, b.expected_attendees,
           b.status, b.request_date, b.admin_notes,
           f.name AS facility_name, f.facility_type, f.location AS facility_location,
           f.description AS facility_description, f.capacity AS facility_capacity,
           f.amenities AS facility_amenities, f.status AS facility_status,
           f.created_date AS facility_created_date
    FROM bookings b
    JOIN facilities f ON b.facility_id = f.id
"#;

#[derive(Clone)]
pub struct BookingsRepository {
    pool: Pool<Postgres>,
}

impl BookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    fn details_from_row(row: &PgRow) -> BookingDetails {
        let facility = Facility {
            id: row.get("facility_id"),
            name: row.get("facility_name"),
            facility_type: row.get("facility_type"),
            location: row.get("facility_location"),
            description: row.get("facility_description"),
            capacity: row.get("facility_capacity"),
            amenities: row.get("facility_amenities"),
            status: row.get("facility_status"),
            created_date: row.get("facility_created_date"),
        };

        BookingDetails {
            id: row.get("id"),
            facility_id: row.get("facility_id"),
            facility,
            requester_name: row.get("requester_name"),
            requester_email: row.get("requester_email"),
            requester_phone: row.get("requester_phone"),
            booking_date: row.get("booking_date"),
            start_time: row.get("start_time"),
            end_time: row.get("end_time"),
            purpose: row.get("purpose"),
            expected_attendees: row.get("expected_attendees"),
            status: row.get("status"),
            request_date: row.get("request_date"),
            admin_notes: row.get("admin_notes"),
        }
    }

    /// List all bookings with their facility, newest request first
    pub async fn list(&self) -> AppResult<Vec<BookingDetails>> {
        let query = format!("{} ORDER BY b.request_date DESC", DETAILS_SELECT);
        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;
        Ok(rows.iter().map(Self::details_from_row).collect())
    }

    /// List bookings matching a status string exactly, newest request first
    pub async fn list_by_status(&self, status: &str) -> AppResult<Vec<BookingDetails>> {
        let query = format!(
            "{} WHERE b.status = $1 ORDER BY b.request_date DESC",
            DETAILS_SELECT
        );
        let rows = sqlx::query(&query)
            .bind(status)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(Self::details_from_row).collect())
    }

    /// Get one booking with its facility
    pub async fn get_details(&self, id: i32) -> AppResult<BookingDetails> {
        let query = format!("{} WHERE b.id = $1", DETAILS_SELECT);
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))?;
        Ok(Self::details_from_row(&row))
    }

    /// Get a bare booking row
    pub async fn get_by_id(&self, id: i32) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))
    }

    /// Insert a booking. Status and request date are decided by the
    /// caller, never taken from the submission.
    pub async fn create(
        &self,
        data: &CreateBooking,
        status: &str,
        request_date: DateTime<Utc>,
    ) -> AppResult<Booking> {
        let row = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (facility_id, requester_name, requester_email, requester_phone,
                                  booking_date, start_time, end_time, purpose, expected_attendees,
                                  status, request_date, admin_notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(data.facility_id)
        .bind(&data.requester_name)
        .bind(&data.requester_email)
        .bind(&data.requester_phone)
        .bind(data.booking_date)
        .bind(data.start_time)
        .bind(data.end_time)
        .bind(&data.purpose)
        .bind(data.expected_attendees)
        .bind(status)
        .bind(request_date)
        .bind(&data.admin_notes)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Overwrite status and admin notes (the admin transition path)
    pub async fn set_status(
        &self,
        id: i32,
        status: &str,
        admin_notes: Option<&str>,
    ) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $1, admin_notes = $2 WHERE id = $3 RETURNING *",
        )
        .bind(status)
        .bind(admin_notes)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))
    }

    /// Overwrite status only, leaving admin notes untouched (the
    /// inspection-completion path)
    pub async fn update_status(&self, id: i32, status: &str) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $1 WHERE id = $2 RETURNING *",
        )
        .bind(status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))
    }

    /// Delete a booking. Dependent inspections go with it via the cascade.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Booking {} not found", id)));
        }
        Ok(())
    }
}
