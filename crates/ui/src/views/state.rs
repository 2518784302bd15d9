use std::fmt;

use dioxus::prelude::*;

/// User-facing failure text for a view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewError {
    message: String,
}

impl ViewError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// `"{context}: {err}"`
    #[must_use]
    pub fn with_context(context: &str, err: &impl fmt::Display) -> Self {
        Self::new(format!("{context}: {err}"))
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

/// Resources that only fetch once their screen asked for it resolve to
/// `Ok(None)` until then; that reads as `Idle`.
#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<Option<T>, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(Some(data))) => ViewState::Ready(data.clone()),
            Some(Ok(None)) => ViewState::Idle,
            Some(Err(err)) => ViewState::Error(err.clone()),
            None => ViewState::Error(ViewError::new("Erro inesperado.")),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
