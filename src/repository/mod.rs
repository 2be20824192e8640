//! Repository layer for database operations

pub mod admins;
pub mod bookings;
pub mod facilities;
pub mod inspections;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub facilities: facilities::FacilitiesRepository,
    pub bookings: bookings::BookingsRepository,
    pub inspections: inspections::InspectionsRepository,
    pub admins: admins::AdminsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            facilities: facilities::FacilitiesRepository::new(pool.clone()),
            bookings: bookings::BookingsRepository::new(pool.clone()),
            inspections: inspections::InspectionsRepository::new(pool.clone()),
            admins: admins::AdminsRepository::new(pool.clone()),
            pool,
        }
    }
}
