//! Cata inventory and booking catalogue
//!
//! An administrative console for entries, bookings and material requests,
//! with a small JSON web service sharing the same SQLite store.

use std::sync::Arc;

pub mod api;
pub mod bulletin;
pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all web handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repository: repository::Repository,
    pub services: Arc<services::Services>,
    pub bulletin: bulletin::Bulletin,
}
