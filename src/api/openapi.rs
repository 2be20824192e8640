//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, bookings, facilities, health, inspections, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Civicbook API",
        version = "1.0.0",
        description = "Municipal Facility Booking System REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "Civicbook Team", email = "contact@civicbook.org")
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::health_check,
        // Auth
        auth::register,
        auth::login,
        // Facilities
        facilities::list_facilities,
        facilities::get_facility,
        facilities::create_facility,
        facilities::update_facility,
        facilities::delete_facility,
        // Bookings
        bookings::list_bookings,
        bookings::get_booking,
        bookings::list_bookings_by_status,
        bookings::create_booking,
        bookings::update_booking_status,
        bookings::delete_booking,
        // Inspections
        inspections::list_inspections,
        inspections::get_inspection,
        inspections::list_inspections_by_booking,
        inspections::create_inspection,
        inspections::update_inspection,
        inspections::delete_inspection,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Auth
            crate::models::admin::RegisterRequest,
            crate::models::admin::RegisterResponse,
            crate::models::admin::LoginRequest,
            crate::models::admin::LoginResponse,
            // Facilities
            crate::models::facility::Facility,
            crate::models::facility::CreateFacility,
            crate::models::facility::UpdateFacility,
            // Bookings
            crate::models::booking::Booking,
            crate::models::booking::BookingDetails,
            crate::models::booking::BookingStatus,
            crate::models::booking::CreateBooking,
            // Inspections
            crate::models::inspection::Inspection,
            crate::models::inspection::InspectionDetails,
            crate::models::inspection::CreateInspection,
            crate::models::inspection::UpdateInspection,
            // Stats
            stats::StatsResponse,
            stats::FacilityStats,
            stats::BookingStats,
            stats::InspectionStats,
            stats::StatEntry,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Admin authentication"),
        (name = "facilities", description = "Facility management"),
        (name = "bookings", description = "Booking requests and approval workflow"),
        (name = "inspections", description = "Post-event inspections"),
        (name = "stats", description = "Reporting summary")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
