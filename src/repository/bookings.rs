//! Booking queries on the staged session

use super::Session;
use crate::{
    error::{AppError, AppResult},
    models::booking::{Booking, BookingUpdate, CreateBooking},
};

impl Session {
    /// List all bookings grouped by booked material
    pub async fn bookings_list(&mut self) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings ORDER BY booked_material, id",
        )
        .fetch_all(self.conn().await?)
        .await?;
        Ok(rows)
    }

    /// Bookings whose material name contains `pattern`
    pub async fn bookings_search(&mut self, pattern: &str) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE instr(booked_material, ?1) > 0 ORDER BY booked_material, id",
        )
        .bind(pattern)
        .fetch_all(self.conn().await?)
        .await?;
        Ok(rows)
    }

    /// Get booking by ID
    pub async fn bookings_get_by_id(&mut self, id: i64) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = ?1")
            .bind(id)
            .fetch_optional(self.conn().await?)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))
    }

    /// Insert a booking row. Booked counts are left to the caller.
    pub async fn bookings_create(&mut self, data: &CreateBooking) -> AppResult<Booking> {
        let row = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (booked_material, booked_by, book_info)
            VALUES (?1, ?2, ?3)
            RETURNING *
            "#,
        )
        .bind(&data.booked_material)
        .bind(&data.booked_by)
        .bind(&data.book_info)
        .fetch_one(self.conn().await?)
        .await?;
        self.stage();
        Ok(row)
    }

    /// Change a single attribute of a booking
    pub async fn bookings_update(&mut self, id: i64, update: &BookingUpdate) -> AppResult<Booking> {
        let (sql, value) = match update {
            BookingUpdate::BookedBy(value) => (
                "UPDATE bookings SET booked_by = ?1 WHERE id = ?2 RETURNING *",
                value,
            ),
            BookingUpdate::BookInfo(value) => (
                "UPDATE bookings SET book_info = ?1 WHERE id = ?2 RETURNING *",
                value,
            ),
        };

        let row = sqlx::query_as::<_, Booking>(sql)
            .bind(value)
            .bind(id)
            .fetch_optional(self.conn().await?)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))?;
        self.stage();
        Ok(row)
    }

    /// Delete booking by ID
    pub async fn bookings_delete(&mut self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = ?1")
            .bind(id)
            .execute(self.conn().await?)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Booking {} not found", id)));
        }
        self.stage();
        Ok(())
    }

    /// Delete every booking of the named material. Returns how many were removed.
    pub async fn bookings_delete_by_material(&mut self, material: &str) -> AppResult<u64> {
        let removed = sqlx::query("DELETE FROM bookings WHERE booked_material = ?1")
            .bind(material)
            .execute(self.conn().await?)
            .await?
            .rows_affected();
        if removed > 0 {
            self.stage();
        }
        Ok(removed)
    }
}
