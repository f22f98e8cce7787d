//! Material request queries on the staged session

use super::Session;
use crate::{
    error::{AppError, AppResult},
    models::request::{CreateRequest, MaterialRequest, RequestUpdate},
};

impl Session {
    /// List all material requests sorted by material
    pub async fn requests_list(&mut self) -> AppResult<Vec<MaterialRequest>> {
        let rows = sqlx::query_as::<_, MaterialRequest>(
            "SELECT * FROM material_requests ORDER BY material",
        )
        .fetch_all(self.conn().await?)
        .await?;
        Ok(rows)
    }

    /// Requests whose material contains `pattern`
    pub async fn requests_search(&mut self, pattern: &str) -> AppResult<Vec<MaterialRequest>> {
        let rows = sqlx::query_as::<_, MaterialRequest>(
            "SELECT * FROM material_requests WHERE instr(material, ?1) > 0 ORDER BY material",
        )
        .bind(pattern)
        .fetch_all(self.conn().await?)
        .await?;
        Ok(rows)
    }

    /// Get request by ID
    pub async fn requests_get_by_id(&mut self, id: i64) -> AppResult<MaterialRequest> {
        sqlx::query_as::<_, MaterialRequest>("SELECT * FROM material_requests WHERE id = ?1")
            .bind(id)
            .fetch_optional(self.conn().await?)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Request {} not found", id)))
    }

    /// Create a material request. The material must be unique.
    pub async fn requests_create(&mut self, data: &CreateRequest) -> AppResult<MaterialRequest> {
        let row = sqlx::query_as::<_, MaterialRequest>(
            r#"
            INSERT INTO material_requests (material, request_by, info)
            VALUES (?1, ?2, ?3)
            RETURNING *
            "#,
        )
        .bind(&data.material)
        .bind(&data.request_by)
        .bind(&data.info)
        .fetch_one(self.conn().await?)
        .await
        .map_err(|e| {
            AppError::unique_violation(e, || format!("'{}' has already been requested", data.material))
        })?;
        self.stage();
        Ok(row)
    }

    /// Change a single attribute of a request
    pub async fn requests_update(&mut self, id: i64, update: &RequestUpdate) -> AppResult<MaterialRequest> {
        let (sql, value) = match update {
            RequestUpdate::Material(value) => (
                "UPDATE material_requests SET material = ?1 WHERE id = ?2 RETURNING *",
                value,
            ),
            RequestUpdate::RequestBy(value) => (
                "UPDATE material_requests SET request_by = ?1 WHERE id = ?2 RETURNING *",
                value,
            ),
            RequestUpdate::Info(value) => (
                "UPDATE material_requests SET info = ?1 WHERE id = ?2 RETURNING *",
                value,
            ),
        };

        let row = sqlx::query_as::<_, MaterialRequest>(sql)
            .bind(value)
            .bind(id)
            .fetch_optional(self.conn().await?)
            .await
            .map_err(|e| AppError::unique_violation(e, || format!("'{}' has already been requested", value)))?
            .ok_or_else(|| AppError::NotFound(format!("Request {} not found", id)))?;
        self.stage();
        Ok(row)
    }

    /// Delete request by ID
    pub async fn requests_delete(&mut self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM material_requests WHERE id = ?1")
            .bind(id)
            .execute(self.conn().await?)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Request {} not found", id)));
        }
        self.stage();
        Ok(())
    }
}
