use concurso_core::model::{EssayGrading, EssayTopic, MIN_ESSAY_CHARS, format_number};

use super::sanitize::rich_text;

#[derive(Clone, Debug, PartialEq)]
pub struct PromptVm {
    pub statement_html: String,
    pub support_texts: Vec<String>,
}

/// Statement block for the chosen topic; hidden when the topic has none.
#[must_use]
pub fn map_prompt(topic: Option<&EssayTopic>) -> Option<PromptVm> {
    let topic = topic?;
    let statement = topic
        .enunciado
        .as_deref()
        .filter(|text| !text.trim().is_empty())?;
    Some(PromptVm {
        statement_html: rich_text(statement),
        support_texts: topic.textos_base.iter().map(|text| rich_text(text)).collect(),
    })
}

/// "123 caracteres (mínimo 100)"
#[must_use]
pub fn char_counter(text: &str) -> String {
    let count = text.trim().chars().count();
    format!("{count} caracteres (mínimo {MIN_ESSAY_CHARS})")
}

#[derive(Clone, Debug, PartialEq)]
pub struct CompetencyVm {
    pub name: String,
    pub score: String,
    pub bar_width: String,
    pub comment: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GradingVm {
    pub score: String,
    pub band: &'static str,
    pub competencies: Vec<CompetencyVm>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
}

fn or_placeholder(items: &[String], placeholder: &str) -> Vec<String> {
    if items.is_empty() {
        vec![placeholder.to_string()]
    } else {
        items.to_vec()
    }
}

#[must_use]
pub fn map_grading(grading: &EssayGrading) -> GradingVm {
    GradingVm {
        score: format!("{}/1000", format_number(grading.nota_final)),
        band: grading.band().description(),
        competencies: grading
            .competencias
            .iter()
            .map(|competency| CompetencyVm {
                name: competency
                    .nome
                    .clone()
                    .unwrap_or_else(|| "Competência".into()),
                score: format!("{}/200", format_number(competency.score())),
                bar_width: format!("{}%", format_number(competency.percent())),
                comment: competency
                    .comentario
                    .clone()
                    .unwrap_or_else(|| "Sem comentário.".into()),
            })
            .collect(),
        strengths: or_placeholder(
            &grading.pontos_fortes,
            "Continue desenvolvendo suas habilidades",
        ),
        weaknesses: or_placeholder(&grading.pontos_fracos, "Ótimo trabalho! Mantenha o foco"),
        suggestions: or_placeholder(
            &grading.sugestoes_melhoria,
            "Continue praticando regularmente",
        ),
    }
}
