use concurso_core::model::{Dashboard, GoalKind, format_number};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricCardVm {
    pub icon: &'static str,
    pub value: String,
    pub label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoalRowVm {
    pub label: String,
    pub ratio: String,
    pub bar_width: String,
    pub percent: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightRowVm {
    pub area: String,
    pub percent: String,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardVm {
    pub metrics: Vec<MetricCardVm>,
    pub overall_width: String,
    /// Shown inside the bar only once it is wide enough to hold it.
    pub overall_label: Option<String>,
    pub goals: Vec<GoalRowVm>,
    pub highlights: Vec<HighlightRowVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoalOptionVm {
    pub value: &'static str,
    pub label: &'static str,
}

fn bar_width(percent: f64) -> String {
    format!("{}%", format_number(percent.clamp(0.0, 100.0)))
}

#[must_use]
pub fn map_dashboard(dashboard: &Dashboard) -> DashboardVm {
    let metrics = &dashboard.metricas;
    let overall = metrics.progresso_geral;

    DashboardVm {
        metrics: vec![
            MetricCardVm {
                icon: "📝",
                value: metrics.total_simulados.to_string(),
                label: "Simulados Realizados",
            },
            MetricCardVm {
                icon: "🎯",
                value: format!("{}%", format_number(metrics.media_geral)),
                label: "Média de Acertos",
            },
            MetricCardVm {
                icon: "✅",
                value: format_number(metrics.total_acertos),
                label: "Total de Acertos",
            },
            MetricCardVm {
                icon: "📚",
                value: format!("{}%", format_number(overall)),
                label: "Progresso Geral",
            },
        ],
        overall_width: bar_width(overall),
        overall_label: (overall > 10.0).then(|| format!("{}%", format_number(overall))),
        goals: dashboard
            .metas
            .iter()
            .map(|goal| GoalRowVm {
                label: goal.tipo.label().to_string(),
                ratio: format!(
                    "{}/{}",
                    format_number(goal.valor_atual),
                    format_number(goal.valor_meta)
                ),
                bar_width: bar_width(goal.progresso),
                percent: format!("{}%", goal.progresso.round()),
            })
            .collect(),
        highlights: dashboard
            .areas_destaque
            .iter()
            .map(|area| HighlightRowVm {
                area: area.area.clone(),
                percent: format!("{}%", format_number(area.percentual)),
                class: area.performance().css_class(),
            })
            .collect(),
    }
}

#[must_use]
pub fn goal_options() -> Vec<GoalOptionVm> {
    GoalKind::SELECTABLE
        .into_iter()
        .map(|kind| GoalOptionVm {
            value: kind.as_str(),
            label: kind.option_label(),
        })
        .collect()
}
