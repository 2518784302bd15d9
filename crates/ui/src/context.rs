use std::sync::Arc;

use tokio::sync::Mutex;

use services::{
    AppServices, CatalogService, DashboardService, EssayService, Navigator, PreferencesService,
    QuizSession,
};

pub trait UiApp: Send + Sync {
    fn quiz(&self) -> Arc<Mutex<QuizSession>>;
    fn navigator(&self) -> Arc<Navigator>;
    fn catalog(&self) -> Arc<CatalogService>;
    fn dashboard(&self) -> Arc<DashboardService>;
    fn essays(&self) -> Arc<EssayService>;
    fn preferences(&self) -> Arc<PreferencesService>;
}

impl UiApp for AppServices {
    fn quiz(&self) -> Arc<Mutex<QuizSession>> {
        AppServices::quiz(self)
    }

    fn navigator(&self) -> Arc<Navigator> {
        AppServices::navigator(self)
    }

    fn catalog(&self) -> Arc<CatalogService> {
        AppServices::catalog(self)
    }

    fn dashboard(&self) -> Arc<DashboardService> {
        AppServices::dashboard(self)
    }

    fn essays(&self) -> Arc<EssayService> {
        AppServices::essays(self)
    }

    fn preferences(&self) -> Arc<PreferencesService> {
        AppServices::preferences(self)
    }
}

/// Services shared with every view through the Dioxus context.
#[derive(Clone)]
pub struct AppContext {
    quiz: Arc<Mutex<QuizSession>>,
    navigator: Arc<Navigator>,
    catalog: Arc<CatalogService>,
    dashboard: Arc<DashboardService>,
    essays: Arc<EssayService>,
    preferences: Arc<PreferencesService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz: app.quiz(),
            navigator: app.navigator(),
            catalog: app.catalog(),
            dashboard: app.dashboard(),
            essays: app.essays(),
            preferences: app.preferences(),
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

// Provided by the composition root in `crates/app`.

#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
