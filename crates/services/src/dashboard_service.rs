use std::sync::Arc;

use log::info;

use concurso_core::model::{Dashboard, GoalDraft, GoalKind};

use crate::api::ConcursoApi;
use crate::error::{ApiError, DashboardError};

#[derive(Clone)]
pub struct DashboardService {
    api: Arc<dyn ConcursoApi>,
}

impl DashboardService {
    #[must_use]
    pub fn new(api: Arc<dyn ConcursoApi>) -> Self {
        Self { api }
    }

    /// # Errors
    ///
    /// Returns `ApiError` when the dashboard request fails.
    pub async fn load(&self) -> Result<Dashboard, ApiError> {
        self.api.dashboard().await
    }

    /// Validate the typed target and create the goal.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::Goal` without any request when `raw_target` is
    /// not a positive number, and `DashboardError::Api` when creation fails.
    pub async fn create_goal(
        &self,
        kind: GoalKind,
        raw_target: &str,
    ) -> Result<GoalDraft, DashboardError> {
        let draft = GoalDraft::parse(kind, raw_target)?;
        self.api.create_goal(&draft).await?;
        info!("goal created: {} = {}", kind.as_str(), draft.valor_meta);
        Ok(draft)
    }
}
