//! Business logic services

pub mod bookings;
pub mod entries;
pub mod requests;

use crate::config::CatalogueConfig;

/// Container for all services
#[derive(Clone, Debug)]
pub struct Services {
    pub entries: entries::EntriesService,
    pub bookings: bookings::BookingsService,
    pub requests: requests::RequestsService,
}

impl Services {
    /// Create all services with the given catalogue policy
    pub fn new(config: CatalogueConfig) -> Self {
        Self {
            entries: entries::EntriesService::new(config.clone()),
            bookings: bookings::BookingsService::new(config),
            requests: requests::RequestsService::new(),
        }
    }
}
