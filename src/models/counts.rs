//! Record totals

use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// How many records each table holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, FromRow, ToSchema)]
pub struct CatalogueCounts {
    pub entries: i64,
    pub bookings: i64,
    pub requests: i64,
}
