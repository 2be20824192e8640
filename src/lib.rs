//! Civicbook Municipal Facility Booking System
//!
//! A Rust implementation of the Civicbook booking server, providing a REST
//! JSON API for managing municipal facilities, public booking requests,
//! post-event inspections, and admin accounts.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
