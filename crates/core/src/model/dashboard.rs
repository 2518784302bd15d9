use serde::{Deserialize, Serialize};

use super::goal::GoalMetric;
use super::report::Performance;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    #[serde(default)]
    pub total_simulados: u32,
    #[serde(default)]
    pub media_geral: f64,
    #[serde(default)]
    pub total_acertos: f64,
    #[serde(default)]
    pub progresso_geral: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightArea {
    pub area: String,
    #[serde(default)]
    pub percentual: f64,
}

impl HighlightArea {
    #[must_use]
    pub fn performance(&self) -> Performance {
        Performance::from_percent(self.percentual)
    }
}

/// Aggregated progress shown on the dashboard screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    #[serde(default)]
    pub metricas: DashboardMetrics,
    #[serde(default)]
    pub metas: Vec<GoalMetric>,
    #[serde(default)]
    pub areas_destaque: Vec<HighlightArea>,
}
