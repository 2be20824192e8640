//! Data models for Civicbook

pub mod admin;
pub mod booking;
pub mod facility;
pub mod inspection;

// Re-export commonly used types
pub use admin::Admin;
pub use booking::{Booking, BookingDetails, BookingStatus};
pub use facility::Facility;
pub use inspection::{Inspection, InspectionDetails};
