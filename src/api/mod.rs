//! JSON web service sharing the console's record store

pub mod bookings;
pub mod entries;
pub mod health;
pub mod message;
pub mod openapi;
pub mod requests;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .route("/message", get(message::get_message))
        .route("/entries", get(entries::list_entries))
        .route("/bookings", get(bookings::list_bookings).post(bookings::create_booking))
        .route("/requests", get(requests::list_requests).post(requests::create_request))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
