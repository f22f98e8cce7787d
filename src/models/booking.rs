//! Booking model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Reservation of one unit of an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    /// Name of the booked entry. Not enforced as a foreign key.
    pub booked_material: String,
    /// Who booked it
    pub booked_by: String,
    pub book_info: String,
}

/// Create booking request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    #[validate(length(min = 1, message = "Booked material must not be empty"))]
    pub booked_material: String,
    #[validate(length(min = 1, message = "Requester name must not be empty"))]
    pub booked_by: String,
    #[serde(default)]
    pub book_info: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingField {
    BookedBy,
    BookInfo,
}

impl BookingField {
    pub const NAMES: &'static [&'static str] = &["bookedBy", "bookInfo"];

    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "bookedBy" => Some(Self::BookedBy),
            "bookInfo" => Some(Self::BookInfo),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingUpdate {
    BookedBy(String),
    BookInfo(String),
}

impl BookingUpdate {
    pub fn new(field: BookingField, value: String) -> Self {
        match field {
            BookingField::BookedBy => Self::BookedBy(value),
            BookingField::BookInfo => Self::BookInfo(value),
        }
    }
}
