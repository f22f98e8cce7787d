//! Catalogue entry model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A bookable item of the catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: i64,
    /// Unique display name, also the key bookings refer to
    pub name: String,
    /// Text description of where the material is kept
    pub location_text: String,
    /// Image or URL shown for the location
    pub location_img: String,
    /// Total number of instances
    pub available: i64,
    /// Number of instances currently booked
    pub booked: i64,
}

impl Entry {
    /// Units that can still be booked, never negative
    pub fn free(&self) -> i64 {
        (self.available - self.booked).max(0)
    }
}

/// Create entry request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntry {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    pub location_text: String,
    pub location_img: String,
    #[validate(range(min = 0, message = "Available count must not be negative"))]
    pub available: i64,
}

/// Attributes of an entry that can be edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    LocationText,
    LocationImg,
    Available,
    Booked,
}

impl EntryField {
    pub const NAMES: &'static [&'static str] = &["locationText", "locationImg", "available", "booked"];

    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "locationText" => Some(Self::LocationText),
            "locationImg" => Some(Self::LocationImg),
            "available" => Some(Self::Available),
            "booked" => Some(Self::Booked),
            _ => None,
        }
    }

    /// Whether the attribute holds a count rather than free text
    pub fn is_count(self) -> bool {
        matches!(self, Self::Available | Self::Booked)
    }
}

/// A single-attribute change to an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryUpdate {
    LocationText(String),
    LocationImg(String),
    Available(i64),
    Booked(i64),
}

impl EntryUpdate {
    /// Build an update from an already parsed field and a count or text value
    pub fn text(field: EntryField, value: String) -> Option<Self> {
        match field {
            EntryField::LocationText => Some(Self::LocationText(value)),
            EntryField::LocationImg => Some(Self::LocationImg(value)),
            _ => None,
        }
    }

    pub fn count(field: EntryField, value: i64) -> Option<Self> {
        match field {
            EntryField::Available => Some(Self::Available(value)),
            EntryField::Booked => Some(Self::Booked(value)),
            _ => None,
        }
    }
}
