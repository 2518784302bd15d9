//! Quiz attempt workflow.

mod session;

use concurso_core::model::{AnswerFeedback, Letter, PriorAnswer, Question};

pub use session::QuizSession;

/// The question currently on screen with its answer state.
#[derive(Debug, Clone, PartialEq)]
pub struct ShownQuestion {
    pub question: Question,
    pub index: usize,
    pub total: usize,
    /// Letter picked in this visit or recorded by the server earlier.
    pub chosen: Option<Letter>,
    pub feedback: Option<AnswerFeedback>,
}

impl ShownQuestion {
    pub(crate) fn new(
        question: Question,
        index: usize,
        total: usize,
        prior: Option<PriorAnswer>,
    ) -> Self {
        let feedback = prior.as_ref().map(|prior| question.feedback_for(prior));
        Self {
            chosen: prior.map(|prior| prior.alternativa_escolhida),
            question,
            index,
            total,
            feedback,
        }
    }

    /// Answered questions accept no further input.
    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.feedback.is_some()
    }

    /// "Questão i de n"
    #[must_use]
    pub fn counter_label(&self) -> String {
        format!("Questão {} de {}", self.index + 1, self.total)
    }
}

/// Result of a previous/next request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigateOutcome {
    Moved { index: usize },
    /// The step would leave the attempt; nothing was requested.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeOutcome {
    Resumed { index: usize },
    NothingToResume,
}

/// Proof that the user confirmed ending the attempt.
///
/// Only `QuizSession::request_finish` hands these out; dropping one means the
/// user declined.
#[derive(Debug)]
#[must_use = "dropping the confirmation cancels the finish"]
pub struct FinishConfirmation {
    _private: (),
}

impl FinishConfirmation {
    pub const PROMPT: &'static str = "Tem certeza que deseja finalizar o simulado agora?";

    pub(crate) fn new() -> Self {
        Self { _private: () }
    }

    #[must_use]
    pub fn prompt(&self) -> &'static str {
        Self::PROMPT
    }
}
