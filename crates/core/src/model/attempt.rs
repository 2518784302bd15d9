use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AttemptError {
    #[error("O simulado não possui questões.")]
    Empty,

    #[error("Questão {index} fora do intervalo do simulado (0..{total}).")]
    IndexOutOfRange { index: usize, total: usize },
}

/// Step requested by the previous/next controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    #[must_use]
    pub fn offset(self) -> isize {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

/// Wire and persisted shape of the attempt cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptCursor {
    pub indice_atual: usize,
    pub total_questoes: usize,
}

/// Client-side cursor over a server-held attempt.
///
/// The server owns question content and correctness; the client only tracks
/// which index is shown and how many questions exist. `total_count` never
/// changes for the lifetime of an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AttemptCursor", into = "AttemptCursor")]
pub struct QuizAttempt {
    current_index: usize,
    total_count: usize,
}

impl QuizAttempt {
    /// # Errors
    ///
    /// Returns `AttemptError::Empty` for a zero-question attempt and
    /// `AttemptError::IndexOutOfRange` when the index is not below the total.
    pub fn new(current_index: usize, total_count: usize) -> Result<Self, AttemptError> {
        if total_count == 0 {
            return Err(AttemptError::Empty);
        }
        if current_index >= total_count {
            return Err(AttemptError::IndexOutOfRange {
                index: current_index,
                total: total_count,
            });
        }
        Ok(Self {
            current_index,
            total_count,
        })
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Index reached by stepping in `direction`, or `None` at the boundaries.
    #[must_use]
    pub fn target(&self, direction: Direction) -> Option<usize> {
        let next = self.current_index.checked_add_signed(direction.offset())?;
        (next < self.total_count).then_some(next)
    }

    /// Re-point the cursor after the server confirmed `index`.
    ///
    /// # Errors
    ///
    /// Returns `AttemptError::IndexOutOfRange` and leaves the cursor untouched
    /// when `index` is not below the total.
    pub fn move_to(&mut self, index: usize) -> Result<(), AttemptError> {
        if index >= self.total_count {
            return Err(AttemptError::IndexOutOfRange {
                index,
                total: self.total_count,
            });
        }
        self.current_index = index;
        Ok(())
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current_index + 1 >= self.total_count
    }

    /// Progress through the attempt, counting the shown question as reached.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let percent = (self.current_index + 1) as f64 / self.total_count as f64 * 100.0;
        percent
    }
}

impl TryFrom<AttemptCursor> for QuizAttempt {
    type Error = AttemptError;

    fn try_from(cursor: AttemptCursor) -> Result<Self, Self::Error> {
        Self::new(cursor.indice_atual, cursor.total_questoes)
    }
}

impl From<QuizAttempt> for AttemptCursor {
    fn from(attempt: QuizAttempt) -> Self {
        Self {
            indice_atual: attempt.current_index,
            total_questoes: attempt.total_count,
        }
    }
}
