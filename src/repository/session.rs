//! Explicit staged transaction shared by every console handler

use sqlx::{Pool, Sqlite, SqliteConnection, Transaction};

use crate::error::AppResult;

/// A unit of work against the record store.
///
/// All reads and writes made through a [`Session`] run inside a single
/// transaction that is opened on first use. Changes stay staged until
/// [`Session::commit`] and are discarded by [`Session::rollback`] or when the
/// session is dropped.
pub struct Session {
    pool: Pool<Sqlite>,
    tx: Option<Transaction<'static, Sqlite>>,
    staged: usize,
}

impl Session {
    pub(crate) fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            pool,
            tx: None,
            staged: 0,
        }
    }

    /// Connection of the open transaction, beginning one if needed
    pub(crate) async fn conn(&mut self) -> AppResult<&mut SqliteConnection> {
        let tx = match self.tx.take() {
            Some(tx) => tx,
            None => {
                tracing::debug!("Beginning transaction");
                self.pool.begin().await?
            }
        };
        Ok(&mut **self.tx.insert(tx))
    }

    /// Record that a mutation was staged
    pub(crate) fn stage(&mut self) {
        self.staged += 1;
    }

    /// Number of mutations staged since the last commit or rollback
    pub fn staged(&self) -> usize {
        self.staged
    }

    /// Durably persist every staged change. Returns how many were committed.
    pub async fn commit(&mut self) -> AppResult<usize> {
        let count = self.staged;
        if let Some(tx) = self.tx.take() {
            tx.commit().await?;
        }
        self.staged = 0;
        tracing::info!("Committed {} staged change(s)", count);
        Ok(count)
    }

    /// Close a transaction that has only read, so the next query starts from
    /// a fresh snapshot. Staged changes are left alone.
    pub async fn release(&mut self) -> AppResult<()> {
        if self.staged > 0 {
            return Ok(());
        }
        if let Some(tx) = self.tx.take() {
            tracing::debug!("Closing read-only transaction");
            tx.rollback().await?;
        }
        Ok(())
    }

    /// Discard every staged change. Returns how many were discarded.
    pub async fn rollback(&mut self) -> AppResult<usize> {
        let count = std::mem::take(&mut self.staged);
        if let Some(tx) = self.tx.take() {
            tx.rollback().await?;
        }
        if count > 0 {
            tracing::warn!("Rolled back {} staged change(s)", count);
        }
        Ok(count)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("open", &self.tx.is_some())
            .field("staged", &self.staged)
            .finish()
    }
}
