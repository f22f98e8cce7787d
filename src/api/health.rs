//! Liveness and readiness of the catalogue service

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, models::CatalogueCounts};

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Readiness also reports what the catalogue holds
#[derive(Serialize, ToSchema)]
pub struct ReadyResponse {
    pub status: String,
    pub version: String,
    pub counts: CatalogueCounts,
}

/// Answer without touching the database
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Process is up", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Count committed records; fails when the database does not answer
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Database reachable", body = ReadyResponse),
        (status = 500, description = "Database unavailable", body = crate::error::ErrorResponse)
    )
)]
pub async fn readiness_check(State(state): State<crate::AppState>) -> AppResult<Json<ReadyResponse>> {
    let counts = state.repository.counts().await?;
    Ok(Json(ReadyResponse {
        status: "ready".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        counts,
    }))
}
