use std::sync::Arc;

use dioxus::prelude::*;
use log::warn;

use concurso_core::model::{Board, Direction, Letter, UiPreferences};
use services::{
    FinishConfirmation, NavigateOutcome, QuizError, ResumeOutcome, ScreenEffect, ScreenId,
    ShownQuestion,
};

use crate::context::AppContext;
use crate::views::{ViewError, use_alert};
use crate::vm::{ReportVm, map_report};

use super::active::QuizIntent;
use super::display::SignalDisplay;
use super::setup::{SetupForm, use_setup_form};

pub(super) const PREPARING: &str = "Preparando seu simulado...";
const FINISHING: &str = "Finalizando simulado e gerando resultados...";
const RESUMING: &str = "Retomando simulado...";

#[derive(Clone, Debug, PartialEq)]
pub(super) enum QuizPhase {
    Setup,
    Busy(&'static str),
    Active,
    Finished(ReportVm),
}

/// Boards of the loaded catalog; the areas go straight into the setup form.
pub(super) type CatalogResource = Resource<Result<Option<Vec<Board>>, ViewError>>;

fn failure_message(context: &str, err: &QuizError) -> String {
    if err.is_validation() {
        err.to_string()
    } else {
        format!("{context}: {err}")
    }
}

/// Signals and handlers behind the quiz screen.
#[derive(Clone, Copy)]
pub(super) struct QuizController {
    pub phase: Signal<QuizPhase>,
    pub shown: Signal<Option<ShownQuestion>>,
    pub pending: Signal<Option<Letter>>,
    pub busy: Signal<bool>,
    pub confirm: Signal<Option<FinishConfirmation>>,
    pub clock: SyncSignal<String>,
    pub preferences: Signal<UiPreferences>,
    pub catalog: CatalogResource,
    pub form: SetupForm,
    pub start: Callback<()>,
    pub intent: Callback<QuizIntent>,
    pub confirm_finish: Callback<()>,
    pub new_attempt: Callback<()>,
}

pub(super) fn use_quiz_controller() -> QuizController {
    let ctx = use_context::<AppContext>();
    let transition = use_hook({
        let navigator = ctx.navigator();
        move || navigator.go_to(ScreenId::Simulado)
    });

    let mut phase = use_signal({
        let resuming = transition.has(ScreenEffect::ShowActiveQuiz);
        move || {
            if resuming {
                QuizPhase::Busy(RESUMING)
            } else {
                QuizPhase::Setup
            }
        }
    });
    let mut shown = use_signal(|| None::<ShownQuestion>);
    let mut pending = use_signal(|| None::<Letter>);
    let mut busy = use_signal(|| false);
    let mut alert = use_alert();
    let mut confirm = use_signal(|| None::<FinishConfirmation>);
    let mut load_catalog = use_signal(|| false);
    let clock = use_signal_sync(|| String::from("00:00:00"));
    let mut preferences = use_signal({
        let service = ctx.preferences();
        move || service.load()
    });
    let form = use_setup_form();

    let catalog_ctx = ctx.clone();
    let mut catalog = use_resource(move || {
        let service = catalog_ctx.catalog();
        let requested = load_catalog();
        async move {
            if !requested {
                return Ok(None);
            }
            let areas = service
                .areas()
                .await
                .map_err(|err| ViewError::with_context("Erro ao carregar áreas", &err))?;
            let boards = service.boards().await.unwrap_or_else(|err| {
                warn!("loading boards failed: {err}");
                Vec::new()
            });
            form.reset(areas, &boards);
            Ok(Some(boards))
        }
    });

    // A fresh catalog also clears the form.
    let mut reload_catalog = move || {
        if *load_catalog.peek() {
            catalog.restart();
        } else {
            load_catalog.set(true);
        }
    };

    let mount_ctx = ctx.clone();
    use_hook(move || {
        let quiz = mount_ctx.quiz();
        let effects = transition.effects.clone();
        spawn(async move {
            let mut session = quiz.lock().await;
            session
                .timer_mut()
                .bind_display(Arc::new(SignalDisplay::new(clock)));
            for effect in effects {
                match effect {
                    ScreenEffect::ShowSetup => phase.set(QuizPhase::Setup),
                    ScreenEffect::LoadCatalog => reload_catalog(),
                    ScreenEffect::StopTimer => session.timer_mut().stop(),
                    ScreenEffect::ShowActiveQuiz => phase.set(QuizPhase::Busy(RESUMING)),
                    ScreenEffect::ResumeTimer => match session.resume().await {
                        Ok(ResumeOutcome::Resumed { .. }) => {
                            shown.set(session.shown().cloned());
                            pending.set(None);
                            phase.set(QuizPhase::Active);
                        }
                        Ok(ResumeOutcome::NothingToResume) => {
                            session.abandon();
                            phase.set(QuizPhase::Setup);
                            reload_catalog();
                        }
                        Err(err) => {
                            alert.set(Some(failure_message("Erro ao carregar questão", &err)));
                            phase.set(QuizPhase::Setup);
                            reload_catalog();
                        }
                    },
                    _ => {}
                }
            }
        });
    });

    let start_ctx = ctx.clone();
    let start = use_callback(move |()| {
        let request = form.submission();
        if request.topics.is_empty() {
            alert.set(Some(QuizError::NoTopicsSelected.to_string()));
            return;
        }
        let quiz = start_ctx.quiz();
        phase.set(QuizPhase::Busy(PREPARING));
        spawn(async move {
            let mut session = quiz.lock().await;
            match session
                .start(request.topics, request.board, request.count)
                .await
            {
                Ok(first) => {
                    shown.set(Some(first.clone()));
                    pending.set(None);
                    phase.set(QuizPhase::Active);
                }
                Err(err) => {
                    alert.set(Some(failure_message("Erro ao iniciar simulado", &err)));
                    phase.set(QuizPhase::Setup);
                }
            }
        });
    });

    let intent_ctx = ctx.clone();
    let intent = use_callback(move |intent: QuizIntent| {
        let quiz = intent_ctx.quiz();
        let prefs = intent_ctx.preferences();
        match intent {
            QuizIntent::Pick(letter) => pending.set(Some(letter)),
            QuizIntent::FontSmaller => preferences.set(prefs.update(UiPreferences::decrease_font)),
            QuizIntent::FontLarger => preferences.set(prefs.update(UiPreferences::increase_font)),
            QuizIntent::FontReset => preferences.set(prefs.update(UiPreferences::reset_font)),
            QuizIntent::ToggleFocus => {
                preferences.set(prefs.update(UiPreferences::toggle_focus_mode));
            }
            QuizIntent::Answer => {
                let letter = *pending.peek();
                busy.set(true);
                spawn(async move {
                    let mut session = quiz.lock().await;
                    match session.answer(letter).await {
                        Ok(_) => shown.set(session.shown().cloned()),
                        Err(err) => {
                            alert.set(Some(failure_message("Erro ao responder questão", &err)));
                        }
                    }
                    busy.set(false);
                });
            }
            QuizIntent::Previous | QuizIntent::Next => {
                let direction = if intent == QuizIntent::Previous {
                    Direction::Previous
                } else {
                    Direction::Next
                };
                busy.set(true);
                spawn(async move {
                    let mut session = quiz.lock().await;
                    match session.navigate(direction).await {
                        Ok(NavigateOutcome::Moved { .. }) => {
                            shown.set(session.shown().cloned());
                            pending.set(None);
                        }
                        Ok(NavigateOutcome::Ignored) => {}
                        Err(err) => {
                            alert.set(Some(failure_message("Erro ao carregar questão", &err)));
                        }
                    }
                    busy.set(false);
                });
            }
            QuizIntent::Finish => {
                spawn(async move {
                    let session = quiz.lock().await;
                    match session.request_finish() {
                        Ok(token) => confirm.set(Some(token)),
                        Err(err) => alert.set(Some(err.to_string())),
                    }
                });
            }
            QuizIntent::Abandon => {
                spawn(async move {
                    quiz.lock().await.abandon();
                    shown.set(None);
                    pending.set(None);
                    phase.set(QuizPhase::Setup);
                    reload_catalog();
                });
            }
        }
    });

    let finish_ctx = ctx.clone();
    let confirm_finish = use_callback(move |()| {
        let Some(token) = confirm.write().take() else {
            return;
        };
        let quiz = finish_ctx.quiz();
        phase.set(QuizPhase::Busy(FINISHING));
        spawn(async move {
            let mut session = quiz.lock().await;
            match session.finish(token).await {
                Ok(report) => {
                    shown.set(None);
                    pending.set(None);
                    phase.set(QuizPhase::Finished(map_report(&report)));
                }
                Err(err) => {
                    alert.set(Some(failure_message("Erro ao finalizar simulado", &err)));
                    phase.set(QuizPhase::Active);
                }
            }
        });
    });

    let new_attempt = use_callback(move |()| {
        phase.set(QuizPhase::Setup);
        reload_catalog();
    });

    QuizController {
        phase,
        shown,
        pending,
        busy,
        confirm,
        clock,
        preferences,
        catalog,
        form,
        start,
        intent,
        confirm_finish,
        new_attempt,
    }
}
