use concurso_core::model::{FinalReport, Performance};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportVm {
    pub score: String,
    pub percent: String,
    pub grade: String,
    pub class: &'static str,
    pub message: &'static str,
}

#[must_use]
pub fn map_report(report: &FinalReport) -> ReportVm {
    let performance = report.performance();
    ReportVm {
        score: report.score_label(),
        percent: report.percent_label(),
        grade: report.grade_label(),
        class: performance.css_class(),
        message: match performance {
            Performance::High => "🎉 Excelente resultado! Continue assim!",
            Performance::Medium => "👍 Bom trabalho! Revise os pontos fracos.",
            Performance::Low => "📚 Continue estudando. A revisão espaçada vai ajudar!",
        },
    }
}
