//! Material request model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A want-list item, independent of the inventory counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaterialRequest {
    pub id: i64,
    pub material: String,
    pub request_by: String,
    pub info: String,
}

/// Create material request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequest {
    #[validate(length(min = 1, message = "Material must not be empty"))]
    pub material: String,
    #[validate(length(min = 1, message = "Requester name must not be empty"))]
    pub request_by: String,
    #[serde(default)]
    pub info: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestField {
    Material,
    RequestBy,
    Info,
}

impl RequestField {
    pub const NAMES: &'static [&'static str] = &["material", "requestBy", "info"];

    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "material" => Some(Self::Material),
            "requestBy" => Some(Self::RequestBy),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestUpdate {
    Material(String),
    RequestBy(String),
    Info(String),
}

impl RequestUpdate {
    pub fn new(field: RequestField, value: String) -> Self {
        match field {
            RequestField::Material => Self::Material(value),
            RequestField::RequestBy => Self::RequestBy(value),
            RequestField::Info => Self::Info(value),
        }
    }
}
