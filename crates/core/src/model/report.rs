use serde::{Deserialize, Serialize};

/// Renders a server number the way the backend means it: whole values without
/// a fractional part, everything else with one decimal.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Coarse performance band used to colour percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Performance {
    High,
    Medium,
    Low,
}

impl Performance {
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 70.0 {
            Performance::High
        } else if percent >= 50.0 {
            Performance::Medium
        } else {
            Performance::Low
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Performance::High => "desempenho-alto",
            Performance::Medium => "desempenho-medio",
            Performance::Low => "desempenho-baixo",
        }
    }
}

/// Final report returned when an attempt is finished (`relatorio`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalReport {
    pub total_acertos: u32,
    pub total_questoes: u32,
    pub percentual_acerto: f64,
    pub nota_final: f64,
}

impl FinalReport {
    #[must_use]
    pub fn score_label(&self) -> String {
        format!("{}/{}", self.total_acertos, self.total_questoes)
    }

    #[must_use]
    pub fn percent_label(&self) -> String {
        format!("{}%", format_number(self.percentual_acerto))
    }

    #[must_use]
    pub fn grade_label(&self) -> String {
        format!("{:.1}", self.nota_final)
    }

    #[must_use]
    pub fn performance(&self) -> Performance {
        Performance::from_percent(self.percentual_acerto)
    }
}
