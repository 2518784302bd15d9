use std::sync::Arc;

use log::info;

use concurso_core::model::{EssayGrading, EssaySubmission, EssayTopic};

use crate::api::ConcursoApi;
use crate::error::{ApiError, EssayServiceError};

#[derive(Clone)]
pub struct EssayService {
    api: Arc<dyn ConcursoApi>,
}

impl EssayService {
    #[must_use]
    pub fn new(api: Arc<dyn ConcursoApi>) -> Self {
        Self { api }
    }

    /// # Errors
    ///
    /// Returns `ApiError` when the topic list cannot be fetched.
    pub async fn topics(&self) -> Result<Vec<EssayTopic>, ApiError> {
        self.api.essay_topics().await
    }

    /// Submit an essay for grading.
    ///
    /// # Errors
    ///
    /// Returns `EssayServiceError::Essay` without any request when no topic is
    /// chosen or the text is too short, and `EssayServiceError::Api` when
    /// grading fails.
    pub async fn grade(
        &self,
        topic: Option<&EssayTopic>,
        text: &str,
    ) -> Result<EssayGrading, EssayServiceError> {
        let submission = EssaySubmission::new(topic, text)?;
        let grading = self.api.grade_essay(&submission).await?;
        info!("essay graded: {}", grading.nota_final);
        Ok(grading)
    }
}
