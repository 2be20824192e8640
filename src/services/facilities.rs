//! Facility registry service

use crate::{
    error::AppResult,
    models::facility::{CreateFacility, Facility, UpdateFacility},
    repository::Repository,
};

#[derive(Clone)]
pub struct FacilitiesService {
    repository: Repository,
}

impl FacilitiesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all facilities
    pub async fn list(&self) -> AppResult<Vec<Facility>> {
        self.repository.facilities.list().await
    }

    /// Get facility by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Facility> {
        self.repository.facilities.get_by_id(id).await
    }

    /// Create a facility
    pub async fn create(&self, data: &CreateFacility) -> AppResult<Facility> {
        self.repository.facilities.create(data).await
    }

    /// Replace a facility's mutable fields
    pub async fn update(&self, id: i32, data: &UpdateFacility) -> AppResult<Facility> {
        self.repository.facilities.update(id, data).await
    }

    /// Delete a facility and, by cascade, its bookings and their inspections
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.facilities.delete(id).await
    }
}
