#![forbid(unsafe_code)]

pub mod api;
pub mod app_services;
pub mod catalog_service;
pub mod dashboard_service;
pub mod error;
pub mod essay_service;
pub mod navigation;
pub mod preferences_service;
pub mod quiz;
pub mod timer;

pub use concurso_core::Clock;

pub use api::{AnswerRequest, ApiConfig, ConcursoApi, HttpApi, QuestionPage, StartRequest};
pub use app_services::AppServices;
pub use catalog_service::CatalogService;
pub use dashboard_service::DashboardService;
pub use error::{ApiError, DashboardError, EssayServiceError, QuizError};
pub use essay_service::EssayService;
pub use navigation::{
    Navigator, ScreenEffect, ScreenHook, ScreenId, ScreenTransition, TabState,
};
pub use preferences_service::PreferencesService;
pub use quiz::{FinishConfirmation, NavigateOutcome, QuizSession, ResumeOutcome, ShownQuestion};
pub use timer::{ElapsedDisplay, ElapsedTimer};
