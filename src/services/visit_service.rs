// src/services/visit_service.rs

use crate::{
    common::error::AppError,
    db::VisitRepository,
    models::visit::{CreateVisitorLogPayload, VisitorLog},
};

#[derive(Clone)]
pub struct VisitService {
    repo: VisitRepository,
}

impl VisitService {
    pub fn new(repo: VisitRepository) -> Self {
        Self { repo }
    }

    pub async fn record(&self, input: &CreateVisitorLogPayload) -> Result<VisitorLog, AppError> {
        self.repo.create(&input.name, &input.email, &input.page).await
    }

    pub async fn list(&self) -> Result<Vec<VisitorLog>, AppError> {
        self.repo.list_recent_first().await
    }
}
