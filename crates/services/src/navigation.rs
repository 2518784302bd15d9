//! Tab navigation and the work each screen needs on entry.

use std::fmt;

use storage::{SessionKey, SessionStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Inicio,
    Simulado,
    Redacao,
    Dashboard,
}

impl ScreenId {
    pub const ALL: [ScreenId; 4] = [
        ScreenId::Inicio,
        ScreenId::Simulado,
        ScreenId::Redacao,
        ScreenId::Dashboard,
    ];

    /// Element id of the screen container.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ScreenId::Inicio => "tela-inicio",
            ScreenId::Simulado => "tela-simulado",
            ScreenId::Redacao => "tela-redacao",
            ScreenId::Dashboard => "tela-dashboard",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ScreenId::Inicio => "Início",
            ScreenId::Simulado => "Simulado",
            ScreenId::Redacao => "Redação",
            ScreenId::Dashboard => "Dashboard",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Work requested when a screen becomes visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEffect {
    ShowActiveQuiz,
    ResumeTimer,
    ShowSetup,
    LoadCatalog,
    StopTimer,
    LoadEssayTopics,
    ShowEssayTips,
    LoadDashboard,
}

/// Adds effects for screens it cares about. Hooks run in registration order.
pub trait ScreenHook: Send + Sync {
    fn on_enter(&self, screen: ScreenId, effects: &mut Vec<ScreenEffect>);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabState {
    pub screen: ScreenId,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenTransition {
    pub screen: ScreenId,
    pub tabs: Vec<TabState>,
    pub effects: Vec<ScreenEffect>,
}

impl ScreenTransition {
    #[must_use]
    pub fn has(&self, effect: ScreenEffect) -> bool {
        self.effects.contains(&effect)
    }
}

/// Resumes a running attempt, or shows the setup form.
pub struct QuizScreenHook {
    store: SessionStore,
}

impl QuizScreenHook {
    #[must_use]
    pub fn new(store: SessionStore) -> Self {
        Self { store }
    }
}

impl ScreenHook for QuizScreenHook {
    fn on_enter(&self, screen: ScreenId, effects: &mut Vec<ScreenEffect>) {
        if screen != ScreenId::Simulado {
            return;
        }
        if self.store.contains(SessionKey::SimuladoStartTime) {
            effects.extend([ScreenEffect::ShowActiveQuiz, ScreenEffect::ResumeTimer]);
        } else {
            effects.extend([
                ScreenEffect::ShowSetup,
                ScreenEffect::LoadCatalog,
                ScreenEffect::StopTimer,
            ]);
        }
    }
}

pub struct EssayScreenHook;

impl ScreenHook for EssayScreenHook {
    fn on_enter(&self, screen: ScreenId, effects: &mut Vec<ScreenEffect>) {
        if screen == ScreenId::Redacao {
            effects.extend([ScreenEffect::LoadEssayTopics, ScreenEffect::ShowEssayTips]);
        }
    }
}

pub struct DashboardScreenHook;

impl ScreenHook for DashboardScreenHook {
    fn on_enter(&self, screen: ScreenId, effects: &mut Vec<ScreenEffect>) {
        if screen == ScreenId::Dashboard {
            effects.push(ScreenEffect::LoadDashboard);
        }
    }
}

/// Maps a tab selection to tab highlighting and entry effects.
///
/// Holds no current screen, so entering the same screen twice yields the same
/// transition.
#[derive(Default)]
pub struct Navigator {
    hooks: Vec<Box<dyn ScreenHook>>,
}

impl Navigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigator with the quiz, essay and dashboard hooks registered.
    #[must_use]
    pub fn with_default_hooks(store: SessionStore) -> Self {
        let mut navigator = Self::new();
        navigator.register(QuizScreenHook::new(store));
        navigator.register(EssayScreenHook);
        navigator.register(DashboardScreenHook);
        navigator
    }

    pub fn register(&mut self, hook: impl ScreenHook + 'static) {
        self.hooks.push(Box::new(hook));
    }

    #[must_use]
    pub fn go_to(&self, screen: ScreenId) -> ScreenTransition {
        let tabs = ScreenId::ALL
            .into_iter()
            .map(|tab| TabState {
                screen: tab,
                active: tab == screen,
            })
            .collect();
        let mut effects = Vec::new();
        for hook in &self.hooks {
            hook.on_enter(screen, &mut effects);
        }
        ScreenTransition {
            screen,
            tabs,
            effects,
        }
    }
}

impl fmt::Debug for Navigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("hooks", &self.hooks.len())
            .finish()
    }
}
