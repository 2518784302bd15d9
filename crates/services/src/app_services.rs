use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::Mutex;

use storage::SessionStore;

use crate::Clock;
use crate::api::{ApiConfig, ConcursoApi, HttpApi};
use crate::catalog_service::CatalogService;
use crate::dashboard_service::DashboardService;
use crate::error::ApiError;
use crate::essay_service::EssayService;
use crate::navigation::Navigator;
use crate::preferences_service::PreferencesService;
use crate::quiz::QuizSession;
use crate::timer::ElapsedTimer;

/// Assembles app-facing services around one API client and one session store.
#[derive(Clone)]
pub struct AppServices {
    quiz: Arc<Mutex<QuizSession>>,
    navigator: Arc<Navigator>,
    catalog: Arc<CatalogService>,
    dashboard: Arc<DashboardService>,
    essays: Arc<EssayService>,
    preferences: Arc<PreferencesService>,
}

impl AppServices {
    /// Build services talking to the backend at `config.base_url`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the HTTP client cannot be built.
    pub fn new_http(
        config: &ApiConfig,
        store: SessionStore,
        clock: Clock,
        runtime: Handle,
    ) -> Result<Self, ApiError> {
        let api = Arc::new(HttpApi::new(config)?);
        Ok(Self::with_api(api, store, clock, runtime))
    }

    /// Build services over any `ConcursoApi` implementation.
    #[must_use]
    pub fn with_api(
        api: Arc<dyn ConcursoApi>,
        store: SessionStore,
        clock: Clock,
        runtime: Handle,
    ) -> Self {
        let timer = ElapsedTimer::new(store.clone(), clock, runtime);
        let quiz = QuizSession::new(Arc::clone(&api), store.clone(), timer);

        Self {
            quiz: Arc::new(Mutex::new(quiz)),
            navigator: Arc::new(Navigator::with_default_hooks(store.clone())),
            catalog: Arc::new(CatalogService::new(Arc::clone(&api))),
            dashboard: Arc::new(DashboardService::new(Arc::clone(&api))),
            essays: Arc::new(EssayService::new(api)),
            preferences: Arc::new(PreferencesService::new(store)),
        }
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<Mutex<QuizSession>> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn navigator(&self) -> Arc<Navigator> {
        Arc::clone(&self.navigator)
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }

    #[must_use]
    pub fn essays(&self) -> Arc<EssayService> {
        Arc::clone(&self.essays)
    }

    #[must_use]
    pub fn preferences(&self) -> Arc<PreferencesService> {
        Arc::clone(&self.preferences)
    }
}
