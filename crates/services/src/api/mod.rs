//! Client side of the ConcursoIA backend.

mod envelope;
mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use concurso_core::model::{
    AnswerFeedback, Area, Board, Dashboard, EssayGrading, EssaySubmission, EssayTopic,
    FinalReport, GoalDraft, Letter, PriorAnswer, Question,
};

use crate::error::ApiError;

pub use envelope::decode_envelope;
pub use http::{ApiConfig, HttpApi};

/// Body of `POST /api/simulado/iniciar`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartRequest {
    pub areas: Vec<String>,
    pub banca: String,
    pub quantidade: u32,
}

/// Body of `POST /api/simulado/responder`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerRequest {
    pub questao_id: i64,
    pub alternativa: Letter,
}

/// One question of an attempt together with its position.
///
/// Start, navigation and spaced review all answer with this shape; spaced
/// review names the question `questao_atual`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionPage {
    #[serde(default, alias = "questao_atual")]
    pub questao: Option<Question>,
    #[serde(default)]
    pub indice_atual: Option<usize>,
    #[serde(default)]
    pub total_questoes: usize,
    #[serde(default)]
    pub resposta_anterior: Option<PriorAnswer>,
}

/// Endpoints consumed by the client.
#[async_trait]
pub trait ConcursoApi: Send + Sync {
    /// `GET /api/areas`
    async fn areas(&self) -> Result<Vec<Area>, ApiError>;

    /// `GET /api/bancas`
    async fn boards(&self) -> Result<Vec<Board>, ApiError>;

    /// `POST /api/simulado/iniciar`
    async fn start_quiz(&self, request: &StartRequest) -> Result<QuestionPage, ApiError>;

    /// `GET /api/simulado/questao/{index}`
    async fn question(&self, index: usize) -> Result<QuestionPage, ApiError>;

    /// `POST /api/simulado/responder`
    async fn answer(&self, request: &AnswerRequest) -> Result<AnswerFeedback, ApiError>;

    /// `POST /api/simulado/finalizar`
    async fn finish_quiz(&self) -> Result<FinalReport, ApiError>;

    /// `POST /api/simulado/revisao-espacada`
    async fn spaced_review(&self) -> Result<QuestionPage, ApiError>;

    /// `GET /api/dashboard/simplificado`
    async fn dashboard(&self) -> Result<Dashboard, ApiError>;

    /// `POST /api/dashboard/criar-meta`
    async fn create_goal(&self, draft: &GoalDraft) -> Result<(), ApiError>;

    /// `GET /api/redacao/temas-melhorados`
    async fn essay_topics(&self) -> Result<Vec<EssayTopic>, ApiError>;

    /// `POST /api/redacao/corrigir-gemini-real`
    async fn grade_essay(&self, submission: &EssaySubmission) -> Result<EssayGrading, ApiError>;
}
