use std::fmt;
use std::sync::Arc;

use log::{debug, info, warn};

use concurso_core::model::{AnswerFeedback, Direction, FinalReport, Letter, QuizAttempt};
use storage::{SessionKey, SessionStore};

use super::{FinishConfirmation, NavigateOutcome, ResumeOutcome, ShownQuestion};
use crate::api::{AnswerRequest, ConcursoApi, QuestionPage, StartRequest};
use crate::error::QuizError;
use crate::timer::ElapsedTimer;

/// Client-side controller of one quiz attempt.
///
/// The server owns questions and scoring; this type tracks the cursor, the
/// question on screen and the elapsed-time tracker. Every operation either
/// fully applies or leaves the previous state in place.
pub struct QuizSession {
    api: Arc<dyn ConcursoApi>,
    store: SessionStore,
    timer: ElapsedTimer,
    attempt: Option<QuizAttempt>,
    shown: Option<ShownQuestion>,
}

impl QuizSession {
    #[must_use]
    pub fn new(api: Arc<dyn ConcursoApi>, store: SessionStore, timer: ElapsedTimer) -> Self {
        Self {
            api,
            store,
            timer,
            attempt: None,
            shown: None,
        }
    }

    #[must_use]
    pub fn attempt(&self) -> Option<&QuizAttempt> {
        self.attempt.as_ref()
    }

    #[must_use]
    pub fn shown(&self) -> Option<&ShownQuestion> {
        self.shown.as_ref()
    }

    #[must_use]
    pub fn timer(&self) -> &ElapsedTimer {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut ElapsedTimer {
        &mut self.timer
    }

    /// An attempt is running in memory or was left behind in the store.
    #[must_use]
    pub fn has_resumable(&self) -> bool {
        self.attempt.is_some() || self.store.contains(SessionKey::SimuladoStartTime)
    }

    /// Start a new attempt over the selected topics.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoTopicsSelected` without any request when `topics`
    /// is empty, `QuizError::NoQuestionFound` when the server answers without a
    /// question and `QuizError::Api` when the request fails. On error no
    /// attempt is active.
    pub async fn start(
        &mut self,
        topics: Vec<String>,
        board: impl Into<String>,
        count: u32,
    ) -> Result<&ShownQuestion, QuizError> {
        if topics.is_empty() {
            return Err(QuizError::NoTopicsSelected);
        }
        let request = StartRequest {
            areas: topics,
            banca: board.into(),
            quantidade: count,
        };

        self.reset();
        info!(
            "starting quiz: {} topic(s), board {:?}, {} question(s)",
            request.areas.len(),
            request.banca,
            request.quantidade
        );
        let page = self.api.start_quiz(&request).await?;
        self.establish(page)
    }

    /// Start an attempt made of questions due for review.
    ///
    /// # Errors
    ///
    /// Same as `start`, minus topic validation.
    pub async fn start_spaced_review(&mut self) -> Result<&ShownQuestion, QuizError> {
        self.reset();
        info!("starting spaced review");
        let page = self.api.spaced_review().await?;
        self.establish(page)
    }

    fn establish(&mut self, page: QuestionPage) -> Result<&ShownQuestion, QuizError> {
        let question = page.questao.ok_or(QuizError::NoQuestionFound)?;
        let attempt = QuizAttempt::new(page.indice_atual.unwrap_or(0), page.total_questoes)?;

        self.store.set(SessionKey::SimuladoAtual, &attempt);
        self.timer.start();
        let shown = ShownQuestion::new(
            question,
            attempt.current_index(),
            attempt.total_count(),
            page.resposta_anterior,
        );
        self.attempt = Some(attempt);
        Ok(self.shown.insert(shown))
    }

    /// Step to the previous or next question.
    ///
    /// Steps past either end are ignored without contacting the server.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoActiveAttempt` when no attempt is running and
    /// `QuizError::Api` or `QuizError::NoQuestionFound` when the fetch fails;
    /// the cursor and shown question are unchanged on error.
    pub async fn navigate(&mut self, direction: Direction) -> Result<NavigateOutcome, QuizError> {
        let attempt = self.attempt.ok_or(QuizError::NoActiveAttempt)?;
        let Some(target) = attempt.target(direction) else {
            debug!("navigation {direction:?} ignored at index {}", attempt.current_index());
            return Ok(NavigateOutcome::Ignored);
        };

        self.show_index(attempt, target).await?;
        Ok(NavigateOutcome::Moved { index: target })
    }

    async fn show_index(&mut self, mut attempt: QuizAttempt, index: usize) -> Result<(), QuizError> {
        let page = self.api.question(index).await?;
        let question = page.questao.ok_or(QuizError::NoQuestionFound)?;
        attempt.move_to(index)?;

        self.store.set(SessionKey::SimuladoAtual, &attempt);
        self.shown = Some(ShownQuestion::new(
            question,
            index,
            attempt.total_count(),
            page.resposta_anterior,
        ));
        self.attempt = Some(attempt);
        Ok(())
    }

    /// Submit the chosen alternative for the shown question.
    ///
    /// # Errors
    ///
    /// Validation errors (`NoQuestionLoaded`, `NoAlternativeSelected`,
    /// `AlreadyAnswered`) are raised before any request. `QuizError::Api` leaves
    /// the question unanswered so the user can retry.
    pub async fn answer(&mut self, letter: Option<Letter>) -> Result<AnswerFeedback, QuizError> {
        let shown = self.shown.as_ref().ok_or(QuizError::NoQuestionLoaded)?;
        let letter = letter.ok_or(QuizError::NoAlternativeSelected)?;
        if shown.is_answered() {
            return Err(QuizError::AlreadyAnswered);
        }
        let request = AnswerRequest {
            questao_id: shown.question.id,
            alternativa: letter,
        };

        let feedback = self.api.answer(&request).await?;
        debug!(
            "question {} answered {letter}: correct = {}",
            request.questao_id, feedback.acertou
        );
        if let Some(shown) = self
            .shown
            .as_mut()
            .filter(|shown| shown.question.id == request.questao_id)
        {
            shown.chosen = Some(letter);
            shown.feedback = Some(feedback.clone());
        }
        Ok(feedback)
    }

    /// Ask to end the attempt. The returned token stands for the user's "yes".
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoActiveAttempt` when there is nothing to finish.
    pub fn request_finish(&self) -> Result<FinishConfirmation, QuizError> {
        if self.attempt.is_none() {
            return Err(QuizError::NoActiveAttempt);
        }
        Ok(FinishConfirmation::new())
    }

    /// End the attempt and fetch the final report.
    ///
    /// The timer stops before the request and is restarted if it fails.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoActiveAttempt` or `QuizError::Api`; on error the
    /// attempt stays active.
    pub async fn finish(
        &mut self,
        confirmation: FinishConfirmation,
    ) -> Result<FinalReport, QuizError> {
        drop(confirmation);
        if self.attempt.is_none() {
            return Err(QuizError::NoActiveAttempt);
        }

        self.timer.stop();
        match self.api.finish_quiz().await {
            Ok(report) => {
                info!(
                    "quiz finished: {}/{}",
                    report.total_acertos, report.total_questoes
                );
                self.reset();
                Ok(report)
            }
            Err(err) => {
                warn!("finishing quiz failed: {err}");
                self.timer.start();
                Err(err.into())
            }
        }
    }

    /// Show the running attempt again after the quiz screen was re-entered.
    ///
    /// An attempt lost with a rebuilt controller is restored from the persisted
    /// cursor.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Api` or `QuizError::NoQuestionFound` when the
    /// question cannot be fetched; the attempt itself is kept.
    pub async fn resume(&mut self) -> Result<ResumeOutcome, QuizError> {
        let attempt = match self.attempt {
            Some(attempt) => attempt,
            None => match self.store.get::<QuizAttempt>(SessionKey::SimuladoAtual) {
                Some(restored) => {
                    info!("restoring attempt at index {}", restored.current_index());
                    self.attempt = Some(restored);
                    restored
                }
                None => return Ok(ResumeOutcome::NothingToResume),
            },
        };

        let index = attempt.current_index();
        if self.shown.as_ref().is_none_or(|shown| shown.index != index) {
            self.show_index(attempt, index).await?;
        }
        self.timer.start();
        Ok(ResumeOutcome::Resumed { index })
    }

    /// Drop the attempt without reporting it.
    pub fn abandon(&mut self) {
        if self.attempt.is_some() {
            info!("quiz abandoned");
        }
        self.reset();
    }

    fn reset(&mut self) {
        self.timer.clear();
        self.store.remove(SessionKey::SimuladoAtual);
        self.attempt = None;
        self.shown = None;
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("attempt", &self.attempt)
            .field("shown", &self.shown.as_ref().map(|shown| shown.question.id))
            .field("timer", &self.timer)
            .finish_non_exhaustive()
    }
}
