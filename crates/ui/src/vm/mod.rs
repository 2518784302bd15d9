mod catalog_vm;
mod dashboard_vm;
mod essay_vm;
mod question_vm;
mod reading_vm;
mod report_vm;
mod sanitize;

pub use catalog_vm::{
    AreaCardKind, AreaCardVm, BoardOptionVm, SubjectVm, area_icon, map_area_cards,
    map_board_options,
};
pub use dashboard_vm::{
    DashboardVm, GoalOptionVm, GoalRowVm, HighlightRowVm, MetricCardVm, goal_options,
    map_dashboard,
};
pub use essay_vm::{CompetencyVm, GradingVm, PromptVm, char_counter, map_grading, map_prompt};
pub use question_vm::{AuxCardVm, AuxKind, FeedbackVm, OptionVm, QuestionVm, map_question};
pub use reading_vm::{ReadingVm, map_reading};
pub use report_vm::{ReportVm, map_report};
pub use sanitize::{rich_text, sanitize_html};
