//! Entry service

use validator::Validate;

use crate::{
    config::CatalogueConfig,
    error::{AppError, AppResult},
    models::entry::{CreateEntry, Entry, EntryUpdate},
    repository::Session,
};

#[derive(Clone, Debug)]
pub struct EntriesService {
    config: CatalogueConfig,
}

impl EntriesService {
    pub fn new(config: CatalogueConfig) -> Self {
        Self { config }
    }

    pub async fn list(&self, session: &mut Session) -> AppResult<Vec<Entry>> {
        session.entries_list().await
    }

    pub async fn search(&self, session: &mut Session, pattern: &str) -> AppResult<Vec<Entry>> {
        session.entries_search(pattern).await
    }

    pub async fn get(&self, session: &mut Session, id: i64) -> AppResult<Entry> {
        session.entries_get_by_id(id).await
    }

    pub async fn create(&self, session: &mut Session, data: &CreateEntry) -> AppResult<Entry> {
        data.validate()?;
        let entry = session.entries_create(data).await?;
        tracing::info!("Staged new entry '{}' ({} available)", entry.name, entry.available);
        Ok(entry)
    }

    /// Apply a single-attribute change, checking capacity when counts move
    pub async fn update(&self, session: &mut Session, id: i64, update: &EntryUpdate) -> AppResult<Entry> {
        if self.config.enforce_capacity {
            let current = session.entries_get_by_id(id).await?;
            let (available, booked) = match update {
                EntryUpdate::Available(n) => (*n, current.booked),
                EntryUpdate::Booked(n) => (current.available, *n),
                _ => (current.available, current.booked),
            };
            if booked > available {
                return Err(AppError::BusinessRule(format!(
                    "'{}' would have {} booked out of {} available",
                    current.name, booked, available
                )));
            }
        }

        session.entries_update(id, update).await
    }

    /// Remove an entry and every booking of it. Returns how many bookings went with it.
    pub async fn remove(&self, session: &mut Session, entry: &Entry) -> AppResult<u64> {
        session.entries_delete(entry.id).await?;
        let removed = session.bookings_delete_by_material(&entry.name).await?;
        tracing::info!("Staged removal of entry '{}' and {} booking(s)", entry.name, removed);
        Ok(removed)
    }
}
