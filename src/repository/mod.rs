//! Repository layer for database operations

pub mod bookings;
pub mod entries;
pub mod requests;
mod session;

use std::str::FromStr;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
    Pool, Sqlite,
};

use crate::{config::DatabaseConfig, error::AppResult, models::CatalogueCounts};

pub use session::Session;

/// Main repository struct holding the database connection pool
#[derive(Clone, Debug)]
pub struct Repository {
    pub pool: Pool<Sqlite>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Open the SQLite database described by `config`
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

        let pool = if is_memory(&config.url) {
            // Every connection to `:memory:` is its own database, so keep exactly one alive
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(config.max_connections.max(1))
                .connect_with(options.journal_mode(SqliteJournalMode::Wal))
                .await?
        };

        Ok(Self::new(pool))
    }

    /// Run embedded migrations
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Start a new session. Nothing touches the database until the first query.
    pub fn session(&self) -> Session {
        Session::new(self.pool.clone())
    }

    /// Committed record totals, read outside any session
    pub async fn counts(&self) -> AppResult<CatalogueCounts> {
        let counts = sqlx::query_as::<_, CatalogueCounts>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM entries) AS entries,
                (SELECT COUNT(*) FROM bookings) AS bookings,
                (SELECT COUNT(*) FROM material_requests) AS requests
            "#,
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(counts)
    }
}

fn is_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
