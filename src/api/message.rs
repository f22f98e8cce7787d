//! Greeting published from the console

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Current value of `message`, as last set with `set message ...`
#[utoipa::path(
    get,
    path = "/message",
    tag = "message",
    responses(
        (status = 200, description = "Current greeting", body = MessageResponse),
        (status = 404, description = "No greeting set", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_message(State(state): State<crate::AppState>) -> AppResult<Json<MessageResponse>> {
    let message = state
        .bulletin
        .message()
        .await
        .ok_or_else(|| AppError::NotFound("No message set".to_string()))?;
    Ok(Json(MessageResponse { message }))
}
