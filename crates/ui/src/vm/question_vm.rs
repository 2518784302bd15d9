use concurso_core::model::{AnswerFeedback, Letter, QuizAttempt};
use services::ShownQuestion;

use super::sanitize::rich_text;

#[derive(Clone, Debug, PartialEq)]
pub struct OptionVm {
    pub letter: Letter,
    pub input_id: String,
    pub letter_label: String,
    pub text_html: String,
    pub selected: bool,
    pub disabled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuxKind {
    Hint,
    Formula,
}

impl AuxKind {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            AuxKind::Hint => "Dica",
            AuxKind::Formula => "Fórmula",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            AuxKind::Hint => "💡",
            AuxKind::Formula => "📐",
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            AuxKind::Hint => "auxiliar-card dica-card",
            AuxKind::Formula => "auxiliar-card formula-card",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuxCardVm {
    pub kind: AuxKind,
    pub html: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FeedbackVm {
    pub class: &'static str,
    pub title: &'static str,
    pub correct_letter: String,
    pub explanation_html: Option<String>,
}

impl FeedbackVm {
    #[must_use]
    pub fn from_feedback(feedback: &AnswerFeedback) -> Self {
        let (class, title) = if feedback.acertou {
            ("feedback acerto", "✅ Acertou!")
        } else {
            ("feedback erro", "❌ Errou!")
        };
        Self {
            class,
            title,
            correct_letter: feedback.resposta_correta.clone(),
            explanation_html: feedback.explanation().map(rich_text),
        }
    }
}

/// Everything the active-quiz card renders for one question.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionVm {
    pub counter_label: String,
    pub disciplina: String,
    pub materia: String,
    pub difficulty: String,
    pub statement_html: String,
    pub progress_width: String,
    pub aux_cards: Vec<AuxCardVm>,
    pub options: Vec<OptionVm>,
    pub feedback: Option<FeedbackVm>,
    pub answer_disabled: bool,
    pub prev_disabled: bool,
    pub next_visible: bool,
}

/// Map the shown question plus the not-yet-submitted pick.
///
/// Once answered, the recorded letter wins over `pending` and every input is
/// disabled.
#[must_use]
pub fn map_question(shown: &ShownQuestion, pending: Option<Letter>) -> QuestionVm {
    let question = &shown.question;
    let answered = shown.is_answered();
    let selected = if answered { shown.chosen } else { pending };

    let options = question
        .alternativas
        .options()
        .into_iter()
        .map(|option| OptionVm {
            letter: option.letter,
            input_id: format!("alt-{}", option.letter.as_str()),
            letter_label: format!("{})", option.letter.upper()),
            text_html: rich_text(&option.text),
            selected: selected == Some(option.letter),
            disabled: answered,
        })
        .collect();

    let aux_cards = [
        (AuxKind::Hint, question.hint()),
        (AuxKind::Formula, question.formula()),
    ]
    .into_iter()
    .filter_map(|(kind, text)| {
        text.map(|text| AuxCardVm {
            kind,
            html: rich_text(text),
        })
    })
    .collect();

    let progress = QuizAttempt::new(shown.index, shown.total)
        .map_or(0.0, |attempt| attempt.progress_percent());

    QuestionVm {
        counter_label: shown.counter_label(),
        disciplina: question.disciplina.clone(),
        materia: question.materia.clone(),
        difficulty: question.difficulty_label().to_string(),
        statement_html: rich_text(&question.enunciado),
        progress_width: format!("{progress:.1}%"),
        aux_cards,
        options,
        feedback: shown.feedback.as_ref().map(FeedbackVm::from_feedback),
        answer_disabled: answered,
        prev_disabled: shown.index == 0,
        next_visible: shown.index + 1 < shown.total,
    }
}
