use std::env;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};

use concurso_core::model::{
    AnswerFeedback, Area, Board, Dashboard, EssayGrading, EssaySubmission, EssayTopic,
    FinalReport, GoalDraft,
};

use super::envelope::decode_envelope;
use super::{AnswerRequest, ConcursoApi, QuestionPage, StartRequest};
use crate::error::ApiError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://127.0.0.1:5000";
    pub const ENV_VAR: &'static str = "CONCURSOIA_API_URL";

    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Reads `CONCURSOIA_API_URL`, falling back to the local development server.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var(Self::ENV_VAR)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.into());
        Self::new(base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}

/// `ConcursoApi` over HTTP.
///
/// The backend keeps the running attempt in its cookie session, so the client
/// carries a cookie store for its whole lifetime.
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    /// # Errors
    ///
    /// Returns `ApiError::Transport` when the HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!("GET {path}");
        let response = self.client.get(self.url(path)).send().await?;
        read(response).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        debug!("POST {path}");
        let response = self.client.post(self.url(path)).json(body).send().await?;
        read(response).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!("POST {path}");
        let response = self.client.post(self.url(path)).send().await?;
        read(response).await
    }
}

async fn read<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;
    decode_envelope(status, &body)
}

#[derive(Deserialize)]
struct AreasPayload {
    #[serde(default)]
    areas: Vec<Area>,
}

#[derive(Deserialize)]
struct BoardsPayload {
    #[serde(default)]
    bancas: Vec<Board>,
}

#[derive(Deserialize)]
struct ReportPayload {
    relatorio: FinalReport,
}

#[derive(Deserialize)]
struct TopicsPayload {
    #[serde(default)]
    temas: Vec<EssayTopic>,
}

#[derive(Deserialize)]
struct GradingPayload {
    correcao: EssayGrading,
}

#[async_trait]
impl ConcursoApi for HttpApi {
    async fn areas(&self) -> Result<Vec<Area>, ApiError> {
        let payload: AreasPayload = self.get("/api/areas").await?;
        Ok(payload.areas)
    }

    async fn boards(&self) -> Result<Vec<Board>, ApiError> {
        let payload: BoardsPayload = self.get("/api/bancas").await?;
        Ok(payload.bancas)
    }

    async fn start_quiz(&self, request: &StartRequest) -> Result<QuestionPage, ApiError> {
        self.post("/api/simulado/iniciar", request).await
    }

    async fn question(&self, index: usize) -> Result<QuestionPage, ApiError> {
        self.get(&format!("/api/simulado/questao/{index}")).await
    }

    async fn answer(&self, request: &AnswerRequest) -> Result<AnswerFeedback, ApiError> {
        self.post("/api/simulado/responder", request).await
    }

    async fn finish_quiz(&self) -> Result<FinalReport, ApiError> {
        let payload: ReportPayload = self.post_empty("/api/simulado/finalizar").await?;
        Ok(payload.relatorio)
    }

    async fn spaced_review(&self) -> Result<QuestionPage, ApiError> {
        self.post_empty("/api/simulado/revisao-espacada").await
    }

    async fn dashboard(&self) -> Result<Dashboard, ApiError> {
        self.get("/api/dashboard/simplificado").await
    }

    async fn create_goal(&self, draft: &GoalDraft) -> Result<(), ApiError> {
        let _: IgnoredAny = self.post("/api/dashboard/criar-meta", draft).await?;
        Ok(())
    }

    async fn essay_topics(&self) -> Result<Vec<EssayTopic>, ApiError> {
        let payload: TopicsPayload = self.get("/api/redacao/temas-melhorados").await?;
        Ok(payload.temas)
    }

    async fn grade_essay(&self, submission: &EssaySubmission) -> Result<EssayGrading, ApiError> {
        let payload: GradingPayload = self
            .post("/api/redacao/corrigir-gemini-real", submission)
            .await?;
        Ok(payload.correcao)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let api = HttpApi::new(&ApiConfig::new("http://localhost:5000/")).unwrap();
        assert_eq!(api.url("/api/areas"), "http://localhost:5000/api/areas");
    }

    #[test]
    fn default_config_points_at_local_server() {
        assert_eq!(ApiConfig::default().base_url, "http://127.0.0.1:5000");
    }
}
