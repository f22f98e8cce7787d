//! Entry listing endpoint

use axum::{extract::State, Json};

use crate::{error::AppResult, models::Entry};

/// List all entries sorted by name
#[utoipa::path(
    get,
    path = "/entries",
    tag = "entries",
    responses(
        (status = 200, description = "Catalogue entries", body = Vec<Entry>)
    )
)]
pub async fn list_entries(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Entry>>> {
    let mut session = state.repository.session();
    let entries = state.services.entries.list(&mut session).await?;
    Ok(Json(entries))
}
