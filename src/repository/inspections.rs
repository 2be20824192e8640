//! Inspections repository for database operations

use chrono::{DateTime, Utc};
use sqlx::{postgres::PgRow, Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult},
    models::{
        booking::BookingDetails,
        facility::Facility,
        inspection::{CreateInspection, Inspection, InspectionDetails, UpdateInspection},
    },
};

const DETAILS_SELECT: &str = r#"
    SELECT i.id, i.booking_id, i.inspector_name, i.inspector_contact, i.inspection_date,
           i.condition_before, i.condition_after, i.damages_found, i.damage_description,
           i.damage_photos, i.inspection_notes,
           b.facility_id, b.requester_name, b.requester_email, b.requester_phone,
           b.booking_date, b.start_time, b.end_time, b.purpose, b.expected_attendees,
           b.status AS booking_status, b.request_date, b.admin_notes,
           f.name AS facility_name, f.facility_type, f.location AS facility_location,
           f.description AS facility_description, f.capacity AS facility_capacity,
           f.amenities AS facility_amenities, f.status AS facility_status,
           f.created_date AS facility_created_date
    FROM inspections i
    JOIN bookings b ON i.booking_id = b.id
    JOIN facilities f ON b.facility_id = f.id
"#;

#[derive(Clone)]
pub struct InspectionsRepository {
    pool: Pool<Postgres>,
}

impl InspectionsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    fn details_from_row(row: &PgRow) -> InspectionDetails {
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

        let booking = BookingDetails {
            id: row.get("booking_id"),
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
            status: row.get("booking_status"),
            request_date: row.get("request_date"),
            admin_notes: row.get("admin_notes"),
        };

        InspectionDetails {
            id: row.get("id"),
            booking_id: row.get("booking_id"),
            booking,
            inspector_name: row.get("inspector_name"),
            inspector_contact: row.get("inspector_contact"),
            inspection_date: row.get("inspection_date"),
            condition_before: row.get("condition_before"),
            condition_after: row.get("condition_after"),
            damages_found: row.get("damages_found"),
            damage_description: row.get("damage_description"),
            damage_photos: row.get("damage_photos"),
            inspection_notes: row.get("inspection_notes"),
        }
    }

    /// List all inspections with booking and facility, newest first
    pub async fn list(&self) -> AppResult<Vec<InspectionDetails>> {
        let query = format!("{} ORDER BY i.inspection_date DESC", DETAILS_SELECT);
        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;
        Ok(rows.iter().map(Self::details_from_row).collect())
    }

    /// List inspections for one booking
    pub async fn list_by_booking(&self, booking_id: i32) -> AppResult<Vec<InspectionDetails>> {
        let query = format!("{} WHERE i.booking_id = $1 ORDER BY i.id", DETAILS_SELECT);
        let rows = sqlx::query(&query)
            .bind(booking_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(Self::details_from_row).collect())
    }

    /// Get one inspection with booking and facility
    pub async fn get_details(&self, id: i32) -> AppResult<InspectionDetails> {
        let query = format!("{} WHERE i.id = $1", DETAILS_SELECT);
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Inspection {} not found", id)))?;
        Ok(Self::details_from_row(&row))
    }

    /// Insert an inspection. The inspection date is decided by the caller.
    pub async fn create(
        &self,
        data: &CreateInspection,
        inspection_date: DateTime<Utc>,
    ) -> AppResult<Inspection> {
        let row = sqlx::query_as::<_, Inspection>(
            r#"
            INSERT INTO inspections (booking_id, inspector_name, inspector_contact, inspection_date,
                                     condition_before, condition_after, damages_found,
                                     damage_description, damage_photos, inspection_notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(data.booking_id)
        .bind(&data.inspector_name)
        .bind(&data.inspector_contact)
        .bind(inspection_date)
        .bind(&data.condition_before)
        .bind(&data.condition_after)
        .bind(data.damages_found)
        .bind(&data.damage_description)
        .bind(&data.damage_photos)
        .bind(&data.inspection_notes)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Replace an inspection's mutable fields
    pub async fn update(&self, id: i32, data: &UpdateInspection) -> AppResult<Inspection> {
        sqlx::query_as::<_, Inspection>(
            r#"
            UPDATE inspections
            SET inspector_name = $1, inspector_contact = $2, condition_before = $3,
                condition_after = $4, damages_found = $5, damage_description = $6,
                damage_photos = $7, inspection_notes = $8
            WHERE id = $9
            RETURNING *
            "#,
        )
        .bind(&data.inspector_name)
        .bind(&data.inspector_contact)
        .bind(&data.condition_before)
        .bind(&data.condition_after)
        .bind(data.damages_found)
        .bind(&data.damage_description)
        .bind(&data.damage_photos)
        .bind(&data.inspection_notes)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Inspection {} not found", id)))
    }

    /// Delete an inspection. The parent booking is left as is.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM inspections WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Inspection {} not found", id)));
        }
        Ok(())
    }
}
