// src/db/visit_repo.rs

use sqlx::PgPool;
use crate::{common::error::AppError, models::visit::VisitorLog};

#[derive(Clone)]
pub struct VisitRepository {
    pool: PgPool,
}

impl VisitRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, name: &str, email: &str, page: &str) -> Result<VisitorLog, AppError> {
        let log = sqlx::query_as::<_, VisitorLog>(
            "INSERT INTO visitor_logs (name, email, page) VALUES ($1, $2, $3) RETURNING *",
        )
            .bind(name)
            .bind(email)
            .bind(page)
            .fetch_one(&self.pool)
            .await?;
        Ok(log)
    }

    pub async fn list_recent_first(&self) -> Result<Vec<VisitorLog>, AppError> {
        let logs = sqlx::query_as::<_, VisitorLog>(
            "SELECT * FROM visitor_logs ORDER BY created_at DESC",
        )
            .fetch_all(&self.pool)
            .await?;
        Ok(logs)
    }
}
