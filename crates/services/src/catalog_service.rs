use std::sync::Arc;

use concurso_core::model::{Area, Board};

use crate::api::ConcursoApi;
use crate::error::ApiError;

/// Study areas and exam boards offered on the setup form.
#[derive(Clone)]
pub struct CatalogService {
    api: Arc<dyn ConcursoApi>,
}

impl CatalogService {
    #[must_use]
    pub fn new(api: Arc<dyn ConcursoApi>) -> Self {
        Self { api }
    }

    /// # Errors
    ///
    /// Returns `ApiError` when the catalog request fails.
    pub async fn areas(&self) -> Result<Vec<Area>, ApiError> {
        self.api.areas().await
    }

    /// # Errors
    ///
    /// Returns `ApiError` when the board request fails.
    pub async fn boards(&self) -> Result<Vec<Board>, ApiError> {
        self.api.boards().await
    }
}
