//! Booking endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::{Booking, CreateBooking},
};

/// List all bookings
#[utoipa::path(
    get,
    path = "/bookings",
    tag = "bookings",
    responses(
        (status = 200, description = "Bookings grouped by material", body = Vec<Booking>)
    )
)]
pub async fn list_bookings(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Booking>>> {
    let mut session = state.repository.session();
    let bookings = state.services.bookings.list(&mut session).await?;
    Ok(Json(bookings))
}

/// Book one unit of an entry
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    request_body = CreateBooking,
    responses(
        (status = 201, description = "Booking created", body = Booking),
        (status = 404, description = "No entry with that name"),
        (status = 422, description = "Entry fully booked")
    )
)]
pub async fn create_booking(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateBooking>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    let mut session = state.repository.session();
    let booking = state.services.bookings.create(&mut session, &data).await?;
    session.commit().await?;
    Ok((StatusCode::CREATED, Json(booking)))
}
