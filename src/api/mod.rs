//! API handlers for Civicbook REST endpoints
//!
//! Authorization is the front end's concern: admin screens hide behind a
//! login, but the endpoints themselves take no credential. The login
//! response is the only proof of authentication the client holds.

pub mod auth;
pub mod bookings;
pub mod facilities;
pub mod health;
pub mod inspections;
pub mod openapi;
pub mod stats;
