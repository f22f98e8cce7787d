//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{bookings, entries, health, message, requests};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cata API",
        version = "1.0.0",
        description = "Inventory and booking catalogue"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        health::health_check,
        health::readiness_check,
        message::get_message,
        entries::list_entries,
        bookings::list_bookings,
        bookings::create_booking,
        requests::list_requests,
        requests::create_request,
    ),
    components(
        schemas(
            crate::models::Entry,
            crate::models::Booking,
            crate::models::CreateBooking,
            crate::models::MaterialRequest,
            crate::models::CreateRequest,
            health::HealthResponse,
            health::ReadyResponse,
            message::MessageResponse,
            crate::models::CatalogueCounts,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "message", description = "Greeting set from the console"),
        (name = "entries", description = "Catalogue entries"),
        (name = "bookings", description = "Bookings of entries"),
        (name = "requests", description = "Material requests")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
