//! Facilities repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::facility::{CreateFacility, Facility, UpdateFacility, DEFAULT_FACILITY_STATUS},
};

#[derive(Clone)]
pub struct FacilitiesRepository {
    pool: Pool<Postgres>,
}

impl FacilitiesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all facilities
    pub async fn list(&self) -> AppResult<Vec<Facility>> {
        let rows = sqlx::query_as::<_, Facility>("SELECT * FROM facilities ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get facility by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Facility> {
        sqlx::query_as::<_, Facility>("SELECT * FROM facilities WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Facility {} not found", id)))
    }

    /// Create a facility
    pub async fn create(&self, data: &CreateFacility) -> AppResult<Facility> {
        let row = sqlx::query_as::<_, Facility>(
            r#"
            INSERT INTO facilities (name, facility_type, location, description, capacity, amenities, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.facility_type)
        .bind(&data.location)
        .bind(&data.description)
        .bind(data.capacity)
        .bind(&data.amenities)
        .bind(data.status.as_deref().unwrap_or(DEFAULT_FACILITY_STATUS))
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Replace a facility's mutable fields
    pub async fn update(&self, id: i32, data: &UpdateFacility) -> AppResult<Facility> {
        sqlx::query_as::<_, Facility>(
            r#"
            UPDATE facilities
            SET name = $1, facility_type = $2, location = $3, description = $4,
                capacity = $5, amenities = $6, status = $7
            WHERE id = $8
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.facility_type)
        .bind(&data.location)
        .bind(&data.description)
        .bind(data.capacity)
        .bind(&data.amenities)
        .bind(data.status.as_deref().unwrap_or(DEFAULT_FACILITY_STATUS))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Facility {} not found", id)))
    }

    /// Delete a facility. Dependent bookings (and their inspections) go
    /// with it via the cascade.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM facilities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Facility {} not found", id)));
        }
        Ok(())
    }
}
