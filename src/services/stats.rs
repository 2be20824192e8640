//! Statistics service

use sqlx::Row;

use crate::{
    api::stats::{BookingStats, FacilityStats, InspectionStats, StatEntry, StatsResponse},
    error::AppResult,
    models::booking::BookingStatus,
    repository::Repository,
};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    async fn count_bookings_with_status(&self, status: BookingStatus) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE status = $1")
            .bind(status.as_str())
            .fetch_one(&self.repository.pool)
            .await?;
        Ok(count)
    }

    /// Counts backing the reporting dashboard: facilities by type and
    /// status, bookings per lifecycle state, inspections and damage
    /// reports.
    pub async fn overview(&self) -> AppResult<StatsResponse> {
        let pool = &self.repository.pool;

        let total_facilities: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM facilities")
            .fetch_one(pool)
            .await?;

        let facilities_by_type = sqlx::query(
            r#"
            SELECT facility_type AS label, COUNT(*) AS value
            FROM facilities GROUP BY facility_type ORDER BY value DESC
            "#,
        )
        .fetch_all(pool)
        .await?
        .into_iter()
        .map(|row| StatEntry {
            label: row.get("label"),
            value: row.get("value"),
        })
        .collect();

        let facilities_by_status = sqlx::query(
            r#"
            SELECT status AS label, COUNT(*) AS value
            FROM facilities GROUP BY status ORDER BY value DESC
            "#,
        )
        .fetch_all(pool)
        .await?
        .into_iter()
        .map(|row| StatEntry {
            label: row.get("label"),
            value: row.get("value"),
        })
        .collect();

        let total_bookings: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookings")
            .fetch_one(pool)
            .await?;

        let pending = self.count_bookings_with_status(BookingStatus::Pending).await?;
        let approved = self.count_bookings_with_status(BookingStatus::Approved).await?;
        let rejected = self.count_bookings_with_status(BookingStatus::Rejected).await?;
        let completed = self.count_bookings_with_status(BookingStatus::Completed).await?;

        let total_inspections: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM inspections")
            .fetch_one(pool)
            .await?;

        let damage_reports: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM inspections WHERE damages_found")
                .fetch_one(pool)
                .await?;

        Ok(StatsResponse {
            facilities: FacilityStats {
                total: total_facilities,
                by_type: facilities_by_type,
                by_status: facilities_by_status,
            },
            bookings: BookingStats {
                total: total_bookings,
                pending,
                approved,
                rejected,
                completed,
            },
            inspections: InspectionStats {
                total: total_inspections,
                damages_found: damage_reports,
            },
        })
    }
}
