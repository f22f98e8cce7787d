//! Booking service

use validator::Validate;

use crate::{
    config::CatalogueConfig,
    error::{AppError, AppResult},
    models::booking::{Booking, BookingUpdate, CreateBooking},
    repository::Session,
};

#[derive(Clone, Debug)]
pub struct BookingsService {
    config: CatalogueConfig,
}

impl BookingsService {
    pub fn new(config: CatalogueConfig) -> Self {
        Self { config }
    }

    pub async fn list(&self, session: &mut Session) -> AppResult<Vec<Booking>> {
        session.bookings_list().await
    }

    pub async fn search(&self, session: &mut Session, pattern: &str) -> AppResult<Vec<Booking>> {
        session.bookings_search(pattern).await
    }

    pub async fn get(&self, session: &mut Session, id: i64) -> AppResult<Booking> {
        session.bookings_get_by_id(id).await
    }

    /// Book one unit of an existing entry
    pub async fn create(&self, session: &mut Session, data: &CreateBooking) -> AppResult<Booking> {
        data.validate()?;

        let entry = session
            .entries_get_by_name(&data.booked_material)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Entry '{}' not found", data.booked_material)))?;

        if self.config.enforce_capacity && entry.free() == 0 {
            return Err(AppError::BusinessRule(format!(
                "No units of '{}' left ({} of {} booked)",
                entry.name, entry.booked, entry.available
            )));
        }

        let booking = session.bookings_create(data).await?;
        session.entries_increment_booked(&entry.name).await?;
        tracing::info!("Staged booking {} of '{}' by {}", booking.id, entry.name, booking.booked_by);
        Ok(booking)
    }

    pub async fn update(&self, session: &mut Session, id: i64, update: &BookingUpdate) -> AppResult<Booking> {
        session.bookings_update(id, update).await
    }

    /// Remove a booking, giving the unit back if its entry still exists.
    /// Returns whether a booked count was decremented.
    pub async fn remove(&self, session: &mut Session, booking: &Booking) -> AppResult<bool> {
        session.bookings_delete(booking.id).await?;
        let released = session.entries_decrement_booked(&booking.booked_material).await?;
        if !released {
            tracing::debug!(
                "Booking {} referenced '{}' which no longer holds bookings",
                booking.id,
                booking.booked_material
            );
        }
        Ok(released)
    }
}
