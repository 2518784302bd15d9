//! Shared error types for the services crate.

use reqwest::StatusCode;
use thiserror::Error;

use concurso_core::model::{AttemptError, EssayError, GoalError};

/// Errors emitted by the HTTP API client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Non-2xx response; the message comes from the body when it has one.
    #[error("{message}")]
    Status { status: StatusCode, message: String },
    /// 2xx response carrying `success: false`.
    #[error("{0}")]
    Rejected(String),
    #[error("falha de conexão com o servidor: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("resposta inválida do servidor: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Generic message used when the server did not explain the failure.
    #[must_use]
    pub fn status_message(status: StatusCode) -> String {
        format!("Erro na resposta do servidor: {}", status.as_u16())
    }
}

/// Errors emitted by `QuizSession`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("Selecione pelo menos uma Matéria ou Área de Estudo!")]
    NoTopicsSelected,
    #[error("Nenhum simulado ativo!")]
    NoActiveAttempt,
    #[error("Nenhuma questão carregada!")]
    NoQuestionLoaded,
    #[error("Selecione uma alternativa!")]
    NoAlternativeSelected,
    #[error("Esta questão já foi respondida.")]
    AlreadyAnswered,
    #[error("Nenhuma questão encontrada.")]
    NoQuestionFound,
    #[error(transparent)]
    Attempt(#[from] AttemptError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl QuizError {
    /// Validation errors are raised before any request and change no state.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            QuizError::NoTopicsSelected
                | QuizError::NoActiveAttempt
                | QuizError::NoQuestionLoaded
                | QuizError::NoAlternativeSelected
                | QuizError::AlreadyAnswered
        )
    }
}

/// Errors emitted by `DashboardService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DashboardError {
    #[error("Digite um valor válido para a meta!")]
    Goal(#[from] GoalError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `EssayService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EssayServiceError {
    #[error(transparent)]
    Essay(#[from] EssayError),
    #[error(transparent)]
    Api(#[from] ApiError),
}
