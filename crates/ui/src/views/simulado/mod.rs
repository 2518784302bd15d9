//! Quiz screen: topic setup, the running attempt and its final report.

mod active;
mod controller;
mod display;
mod result;
mod setup;

#[cfg(test)]
mod intent_smoke;

pub use active::{ActiveQuiz, QuizIntent};
pub use result::ResultPanel;
pub use setup::{DEFAULT_QUESTION_COUNT, SetupForm, SetupPanel, StartForm};

use dioxus::prelude::*;

use services::ScreenId;

use crate::views::{ConfirmDialog, ViewState, view_state_from_resource};
use crate::vm::{map_question, map_reading};
use controller::{QuizPhase, use_quiz_controller};

#[component]
pub fn SimuladoView() -> Element {
    let controller = use_quiz_controller();
    let mut confirm = controller.confirm;
    let on_start = controller.start;
    let on_intent = controller.intent;
    let on_confirm_finish = controller.confirm_finish;
    let on_new = controller.new_attempt;

    let current_phase = controller.phase.read().clone();
    let body = match current_phase {
        QuizPhase::Setup => match view_state_from_resource(&controller.catalog) {
            ViewState::Idle | ViewState::Loading => rsx! {
                p { class: "loading", "Carregando áreas de estudo..." }
            },
            ViewState::Error(err) => rsx! {
                p { class: "error", "{err}" }
            },
            ViewState::Ready(boards) => rsx! {
                SetupPanel {
                    form: controller.form,
                    boards,
                    busy: false,
                    on_start: move |()| on_start.call(()),
                }
            },
        },
        QuizPhase::Busy(text) => rsx! {
            div { class: "loading",
                div { class: "spinner" }
                p { "{text}" }
            }
        },
        QuizPhase::Active => match controller.shown.read().as_ref() {
            Some(current) => {
                let question = map_question(current, *controller.pending.read());
                let reading = map_reading(&controller.preferences.read());
                let clock_text = controller.clock.read().clone();
                rsx! {
                    ActiveQuiz {
                        question,
                        reading,
                        clock: clock_text,
                        busy: *controller.busy.read(),
                        on_intent: move |intent| on_intent.call(intent),
                    }
                }
            }
            None => rsx! {},
        },
        QuizPhase::Finished(report) => rsx! {
            ResultPanel {
                report,
                on_new: move |()| on_new.call(()),
            }
        },
    };
    let confirm_prompt = confirm
        .read()
        .as_ref()
        .map(|token| token.prompt().to_string());

    rsx! {
        section { id: ScreenId::Simulado.as_str(), class: "tela active",
            {body}
            if let Some(prompt) = confirm_prompt {
                ConfirmDialog {
                    prompt,
                    on_confirm: move |()| on_confirm_finish.call(()),
                    on_cancel: move |()| confirm.set(None),
                }
            }
        }
    }
}
