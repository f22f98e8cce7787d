//! Data models for Cata

pub mod booking;
pub mod counts;
pub mod entry;
pub mod request;

// Re-export commonly used types
pub use booking::{Booking, BookingField, BookingUpdate, CreateBooking};
pub use counts::CatalogueCounts;
pub use entry::{CreateEntry, Entry, EntryField, EntryUpdate};
pub use request::{CreateRequest, MaterialRequest, RequestField, RequestUpdate};
