mod dashboard;
mod dialog;
mod inicio;
mod redacao;
mod simulado;
mod state;

pub use dashboard::DashboardView;
pub use dialog::{AlertDialog, AlertSlot, ConfirmDialog, use_alert};
pub use inicio::InicioView;
pub use redacao::RedacaoView;
pub use simulado::{
    ActiveQuiz, DEFAULT_QUESTION_COUNT, QuizIntent, ResultPanel, SetupForm, SetupPanel,
    SimuladoView, StartForm,
};
pub use state::{ViewError, ViewState, view_state_from_resource};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
