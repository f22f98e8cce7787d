//! Entry queries on the staged session

use super::Session;
use crate::{
    error::{AppError, AppResult},
    models::entry::{CreateEntry, Entry, EntryUpdate},
};

impl Session {
    /// List all entries sorted by name
    pub async fn entries_list(&mut self) -> AppResult<Vec<Entry>> {
        let rows = sqlx::query_as::<_, Entry>("SELECT * FROM entries ORDER BY name")
            .fetch_all(self.conn().await?)
            .await?;
        Ok(rows)
    }

    /// Entries whose name contains `pattern`, sorted by name
    pub async fn entries_search(&mut self, pattern: &str) -> AppResult<Vec<Entry>> {
        let rows = sqlx::query_as::<_, Entry>(
            "SELECT * FROM entries WHERE instr(name, ?1) > 0 ORDER BY name",
        )
        .bind(pattern)
        .fetch_all(self.conn().await?)
        .await?;
        Ok(rows)
    }

    /// Get entry by ID
    pub async fn entries_get_by_id(&mut self, id: i64) -> AppResult<Entry> {
        sqlx::query_as::<_, Entry>("SELECT * FROM entries WHERE id = ?1")
            .bind(id)
            .fetch_optional(self.conn().await?)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Entry {} not found", id)))
    }

    /// Get entry by its unique name
    pub async fn entries_get_by_name(&mut self, name: &str) -> AppResult<Option<Entry>> {
        let row = sqlx::query_as::<_, Entry>("SELECT * FROM entries WHERE name = ?1")
            .bind(name)
            .fetch_optional(self.conn().await?)
            .await?;
        Ok(row)
    }

    /// Create entry with nothing booked
    pub async fn entries_create(&mut self, data: &CreateEntry) -> AppResult<Entry> {
        let row = sqlx::query_as::<_, Entry>(
            r#"
            INSERT INTO entries (name, location_text, location_img, available, booked)
            VALUES (?1, ?2, ?3, ?4, 0)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.location_text)
        .bind(&data.location_img)
        .bind(data.available)
        .fetch_one(self.conn().await?)
        .await
        .map_err(|e| AppError::unique_violation(e, || format!("Entry '{}' already exists", data.name)))?;
        self.stage();
        Ok(row)
    }

    /// Change a single attribute of an entry
    pub async fn entries_update(&mut self, id: i64, update: &EntryUpdate) -> AppResult<Entry> {
        let (column, sql) = match update {
            EntryUpdate::LocationText(_) => (
                "location_text",
                "UPDATE entries SET location_text = ?1 WHERE id = ?2 RETURNING *",
            ),
            EntryUpdate::LocationImg(_) => (
                "location_img",
                "UPDATE entries SET location_img = ?1 WHERE id = ?2 RETURNING *",
            ),
            EntryUpdate::Available(_) => (
                "available",
                "UPDATE entries SET available = ?1 WHERE id = ?2 RETURNING *",
            ),
            EntryUpdate::Booked(_) => (
                "booked",
                "UPDATE entries SET booked = ?1 WHERE id = ?2 RETURNING *",
            ),
        };

        let query = sqlx::query_as::<_, Entry>(sql);
        let query = match update {
            EntryUpdate::LocationText(value) | EntryUpdate::LocationImg(value) => query.bind(value),
            EntryUpdate::Available(value) | EntryUpdate::Booked(value) => query.bind(value),
        };

        let row = query
            .bind(id)
            .fetch_optional(self.conn().await?)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Entry {} not found", id)))?;
        tracing::debug!("Updated {} of entry {}", column, id);
        self.stage();
        Ok(row)
    }

    /// Delete entry by ID
    pub async fn entries_delete(&mut self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM entries WHERE id = ?1")
            .bind(id)
            .execute(self.conn().await?)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Entry {} not found", id)));
        }
        self.stage();
        Ok(())
    }

    /// Add one to the booked count of the named entry. Returns whether an entry matched.
    pub async fn entries_increment_booked(&mut self, name: &str) -> AppResult<bool> {
        let result = sqlx::query("UPDATE entries SET booked = booked + 1 WHERE name = ?1")
            .bind(name)
            .execute(self.conn().await?)
            .await?;
        let matched = result.rows_affected() > 0;
        if matched {
            self.stage();
        }
        Ok(matched)
    }

    /// Take one off the booked count of the named entry, if it exists and has bookings
    pub async fn entries_decrement_booked(&mut self, name: &str) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE entries SET booked = booked - 1 WHERE name = ?1 AND booked > 0",
        )
        .bind(name)
        .execute(self.conn().await?)
        .await?;
        let matched = result.rows_affected() > 0;
        if matched {
            self.stage();
        }
        Ok(matched)
    }
}
