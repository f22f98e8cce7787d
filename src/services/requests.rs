//! Material request service

use validator::Validate;

use crate::{
    error::AppResult,
    models::request::{CreateRequest, MaterialRequest, RequestUpdate},
    repository::Session,
};

#[derive(Clone, Debug, Default)]
pub struct RequestsService;

impl RequestsService {
    pub fn new() -> Self {
        Self
    }

    pub async fn list(&self, session: &mut Session) -> AppResult<Vec<MaterialRequest>> {
        session.requests_list().await
    }

    pub async fn search(&self, session: &mut Session, pattern: &str) -> AppResult<Vec<MaterialRequest>> {
        session.requests_search(pattern).await
    }

    pub async fn get(&self, session: &mut Session, id: i64) -> AppResult<MaterialRequest> {
        session.requests_get_by_id(id).await
    }

    pub async fn create(&self, session: &mut Session, data: &CreateRequest) -> AppResult<MaterialRequest> {
        data.validate()?;
        session.requests_create(data).await
    }

    pub async fn update(
        &self,
        session: &mut Session,
        id: i64,
        update: &RequestUpdate,
    ) -> AppResult<MaterialRequest> {
        session.requests_update(id, update).await
    }

    pub async fn remove(&self, session: &mut Session, request: &MaterialRequest) -> AppResult<()> {
        session.requests_delete(request.id).await
    }
}
