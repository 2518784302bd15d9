use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GoalError {
    #[error("goal target must be a positive number: {raw:?}")]
    InvalidTarget { raw: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalKind {
    PercentualAcerto,
    QuestoesResolvidas,
    SimuladosRealizados,
    TempoEstudo,
}

impl GoalKind {
    /// Kinds offered when creating a goal. Study time is tracked server-side only.
    pub const SELECTABLE: [GoalKind; 3] = [
        GoalKind::PercentualAcerto,
        GoalKind::QuestoesResolvidas,
        GoalKind::SimuladosRealizados,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            GoalKind::PercentualAcerto => "percentual_acerto",
            GoalKind::QuestoesResolvidas => "questoes_resolvidas",
            GoalKind::SimuladosRealizados => "simulados_realizados",
            GoalKind::TempoEstudo => "tempo_estudo",
        }
    }

    /// Label used in the active goals list.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            GoalKind::PercentualAcerto => "Média de Acerto",
            GoalKind::QuestoesResolvidas => "Total de Questões Resolvidas",
            GoalKind::SimuladosRealizados => "Total de Simulados Realizados",
            GoalKind::TempoEstudo => "Tempo de Estudo",
        }
    }

    /// Label used in the creation form.
    #[must_use]
    pub fn option_label(self) -> &'static str {
        match self {
            GoalKind::PercentualAcerto => "Percentual de Acerto",
            GoalKind::QuestoesResolvidas => "Questões Resolvidas",
            GoalKind::SimuladosRealizados => "Simulados Realizados",
            GoalKind::TempoEstudo => "Tempo de Estudo",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        [
            GoalKind::PercentualAcerto,
            GoalKind::QuestoesResolvidas,
            GoalKind::SimuladosRealizados,
            GoalKind::TempoEstudo,
        ]
        .into_iter()
        .find(|kind| kind.as_str() == key)
    }
}

impl fmt::Display for GoalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Goal kind as reported by the server, keeping keys this client does not know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GoalType {
    Known(GoalKind),
    Other(String),
}

impl GoalType {
    /// Known kinds get their label; anything else shows the raw key.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            GoalType::Known(kind) => kind.label(),
            GoalType::Other(raw) => raw,
        }
    }
}

impl From<GoalKind> for GoalType {
    fn from(kind: GoalKind) -> Self {
        GoalType::Known(kind)
    }
}

/// An active goal as reported by the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalMetric {
    pub tipo: GoalType,
    pub valor_meta: f64,
    #[serde(default)]
    pub valor_atual: f64,
    #[serde(default)]
    pub progresso: f64,
}

/// A validated goal creation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalDraft {
    pub tipo: GoalKind,
    pub valor_meta: f64,
}

impl GoalDraft {
    /// Parse the target typed by the user.
    ///
    /// # Errors
    ///
    /// Returns `GoalError::InvalidTarget` unless the value is a finite number above zero.
    pub fn parse(tipo: GoalKind, raw: &str) -> Result<Self, GoalError> {
        let invalid = || GoalError::InvalidTarget {
            raw: raw.to_string(),
        };
        let valor_meta: f64 = raw.trim().parse().map_err(|_| invalid())?;
        if !valor_meta.is_finite() || valor_meta <= 0.0 {
            return Err(invalid());
        }
        Ok(Self { tipo, valor_meta })
    }
}
