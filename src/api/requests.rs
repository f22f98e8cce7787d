//! Material request endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::{CreateRequest, MaterialRequest},
};

/// List all material requests
#[utoipa::path(
    get,
    path = "/requests",
    tag = "requests",
    responses(
        (status = 200, description = "Material requests", body = Vec<MaterialRequest>)
    )
)]
pub async fn list_requests(State(state): State<crate::AppState>) -> AppResult<Json<Vec<MaterialRequest>>> {
    let mut session = state.repository.session();
    let requests = state.services.requests.list(&mut session).await?;
    Ok(Json(requests))
}

/// Ask for material the catalogue does not have yet
#[utoipa::path(
    post,
    path = "/requests",
    tag = "requests",
    request_body = CreateRequest,
    responses(
        (status = 201, description = "Request recorded", body = MaterialRequest),
        (status = 409, description = "Material already requested")
    )
)]
pub async fn create_request(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateRequest>,
) -> AppResult<(StatusCode, Json<MaterialRequest>)> {
    let mut session = state.repository.session();
    let request = state.services.requests.create(&mut session, &data).await?;
    session.commit().await?;
    Ok((StatusCode::CREATED, Json(request)))
}
