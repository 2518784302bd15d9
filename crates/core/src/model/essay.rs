use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum essay length, in characters after trimming, accepted for grading.
pub const MIN_ESSAY_CHARS: usize = 100;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EssayError {
    #[error("Selecione um tema!")]
    MissingTopic,

    #[error("Digite uma redação com pelo menos 100 caracteres para uma análise justa.")]
    TooShort { chars: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EssayTopic {
    pub titulo: String,
    #[serde(default)]
    pub enunciado: Option<String>,
    #[serde(default)]
    pub textos_base: Vec<String>,
}

/// Body of a grading request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EssaySubmission {
    pub tema: String,
    pub texto: String,
    pub enunciado: Option<String>,
}

impl EssaySubmission {
    /// # Errors
    ///
    /// Returns `EssayError::MissingTopic` without a topic and
    /// `EssayError::TooShort` for texts under `MIN_ESSAY_CHARS`.
    pub fn new(topic: Option<&EssayTopic>, text: &str) -> Result<Self, EssayError> {
        let topic = topic.ok_or(EssayError::MissingTopic)?;
        let chars = text.trim().chars().count();
        if chars < MIN_ESSAY_CHARS {
            return Err(EssayError::TooShort { chars });
        }
        Ok(Self {
            tema: topic.titulo.clone(),
            texto: text.to_string(),
            enunciado: topic.enunciado.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competency {
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub nota: Option<f64>,
    #[serde(default)]
    pub comentario: Option<String>,
}

impl Competency {
    /// Each competency is scored out of 200.
    pub const MAX_SCORE: f64 = 200.0;

    #[must_use]
    pub fn score(&self) -> f64 {
        self.nota.unwrap_or(0.0)
    }

    #[must_use]
    pub fn percent(&self) -> f64 {
        (self.score() / Self::MAX_SCORE * 100.0).clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EssayBand {
    Excellent,
    Good,
    NeedsPractice,
}

impl EssayBand {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 800.0 {
            EssayBand::Excellent
        } else if score >= 600.0 {
            EssayBand::Good
        } else {
            EssayBand::NeedsPractice
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            EssayBand::Excellent => "Excelente! Nível competitivo!",
            EssayBand::Good => "Bom desempenho! Continue evoluindo!",
            EssayBand::NeedsPractice => "Precisa de mais prática. Foco nos estudos!",
        }
    }
}

/// Grading report (`correcao`) on the ENEM 0–1000 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EssayGrading {
    #[serde(default)]
    pub nota_final: f64,
    #[serde(default)]
    pub competencias: Vec<Competency>,
    #[serde(default)]
    pub pontos_fortes: Vec<String>,
    #[serde(default)]
    pub pontos_fracos: Vec<String>,
    #[serde(default)]
    pub sugestoes_melhoria: Vec<String>,
}

impl EssayGrading {
    #[must_use]
    pub fn band(&self) -> EssayBand {
        EssayBand::from_score(self.nota_final)
    }
}
