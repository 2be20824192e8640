//! Business logic services

pub mod auth;
pub mod bookings;
pub mod facilities;
pub mod inspections;
pub mod stats;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub facilities: facilities::FacilitiesService,
    pub bookings: bookings::BookingsService,
    pub inspections: inspections::InspectionsService,
    pub auth: auth::AuthService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            facilities: facilities::FacilitiesService::new(repository.clone()),
            bookings: bookings::BookingsService::new(repository.clone()),
            inspections: inspections::InspectionsService::new(repository.clone()),
            auth: auth::AuthService::new(repository.clone()),
            stats: stats::StatsService::new(repository),
        }
    }
}
