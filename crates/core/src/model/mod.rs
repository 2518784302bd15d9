mod attempt;
mod catalog;
mod dashboard;
mod essay;
mod goal;
mod preferences;
mod question;
mod report;

pub use attempt::{AttemptCursor, AttemptError, Direction, QuizAttempt};
pub use catalog::{Area, AreaShape, Board, GroupState, TopicSelection, area_slug};
pub use dashboard::{Dashboard, DashboardMetrics, HighlightArea};
pub use essay::{
    Competency, EssayBand, EssayError, EssayGrading, EssaySubmission, EssayTopic,
    MIN_ESSAY_CHARS,
};
pub use goal::{GoalDraft, GoalError, GoalKind, GoalMetric, GoalType};
pub use preferences::UiPreferences;
pub use question::{
    AnswerFeedback, AnswerOption, Alternatives, Letter, LetterError, PriorAnswer, Question,
    meaningful,
};
pub use report::{FinalReport, Performance, format_number};
