use std::collections::BTreeSet;

use dioxus::prelude::*;

use concurso_core::model::{Area, Board, GroupState, TopicSelection};

use crate::vm::{AreaCardKind, AreaCardVm, map_area_cards, map_board_options};

pub const DEFAULT_QUESTION_COUNT: u32 = 10;

/// What the setup form submits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartForm {
    pub topics: Vec<String>,
    pub board: String,
    pub count: u32,
}

fn parse_count(raw: &str) -> u32 {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|count| *count > 0)
        .unwrap_or(DEFAULT_QUESTION_COUNT)
}

/// Setup form values, held by the quiz screen so they outlive the panel.
#[derive(Clone, Copy, PartialEq)]
pub struct SetupForm {
    pub selection: Signal<TopicSelection>,
    pub expanded: Signal<BTreeSet<String>>,
    pub board: Signal<String>,
    pub count: Signal<String>,
}

pub fn use_setup_form() -> SetupForm {
    SetupForm {
        selection: use_signal(TopicSelection::default),
        expanded: use_signal(BTreeSet::new),
        board: use_signal(String::new),
        count: use_signal(|| DEFAULT_QUESTION_COUNT.to_string()),
    }
}

impl SetupForm {
    /// Start over from a freshly loaded catalog.
    pub fn reset(mut self, areas: Vec<Area>, boards: &[Board]) {
        self.selection.set(TopicSelection::new(areas));
        self.expanded.set(BTreeSet::new());
        self.board
            .set(boards.first().map(|board| board.banca.clone()).unwrap_or_default());
        self.count.set(DEFAULT_QUESTION_COUNT.to_string());
    }

    #[must_use]
    pub fn submission(&self) -> StartForm {
        StartForm {
            topics: self.selection.peek().selected_topics(),
            board: self.board.peek().clone(),
            count: parse_count(&self.count.peek()),
        }
    }
}

#[component]
pub fn SetupPanel(
    form: SetupForm,
    boards: Vec<Board>,
    busy: bool,
    on_start: EventHandler<()>,
) -> Element {
    let SetupForm {
        selection,
        expanded,
        mut board,
        mut count,
    } = form;
    let board_options = map_board_options(&boards);

    let cards = map_area_cards(&selection.read(), &expanded.read());
    let selected_total = selection.read().selected_topics().len();

    rsx! {
        div { class: "simulado-config", id: "config-simulado",
            h2 { "⚙️ Configurar Simulado" }

            div { class: "form-group",
                label { "Matérias e Áreas de Estudo:" }
                if cards.is_empty() {
                    p { class: "empty-state", "Nenhuma área disponível." }
                } else {
                    div { class: "areas-grid", id: "areas-container",
                        for card in cards {
                            AreaCard {
                                key: "{card.slug}",
                                card: card.clone(),
                                selection,
                                expanded,
                            }
                        }
                    }
                }
                p { class: "selection-count", "{selected_total} selecionada(s)" }
            }

            div { class: "form-row",
                div { class: "form-group",
                    label { r#for: "banca-select", "Banca:" }
                    select {
                        id: "banca-select",
                        value: "{board}",
                        onchange: move |evt| board.set(evt.value()),
                        for choice in board_options {
                            option { key: "{choice.value}", value: "{choice.value}", "{choice.label}" }
                        }
                    }
                }
                div { class: "form-group",
                    label { r#for: "quantidade-questoes", "Quantidade de Questões:" }
                    input {
                        id: "quantidade-questoes",
                        r#type: "number",
                        min: "1",
                        value: "{count}",
                        oninput: move |evt| count.set(evt.value()),
                    }
                }
            }

            button {
                class: "btn btn-primary btn-large",
                id: "btn-iniciar",
                disabled: busy,
                onclick: move |_| on_start.call(()),
                "🚀 Iniciar Simulado"
            }
        }
    }
}

#[component]
fn AreaCard(
    card: AreaCardVm,
    selection: Signal<TopicSelection>,
    expanded: Signal<BTreeSet<String>>,
) -> Element {
    let mut selection = selection;
    let mut expanded = expanded;
    let area = card.area.clone();

    match card.kind.clone() {
        AreaCardKind::Single { subject, checked } => rsx! {
            div { class: "{card.class}", id: "area-{card.slug}",
                label { class: "area-header",
                    input {
                        r#type: "checkbox",
                        checked,
                        onchange: move |_| selection.write().toggle(&area, &subject),
                    }
                    span { class: "area-icon", "{card.icon}" }
                    span { class: "area-nome", "{card.area}" }
                    span { class: "area-count", "{card.count_label}" }
                }
            }
        },
        AreaCardKind::Group {
            subjects,
            state,
            expanded: is_open,
        } => {
            let all_checked = state == GroupState::All;
            let group_area = area.clone();
            let expand_area = area.clone();
            rsx! {
                div { class: "{card.class}", id: "area-{card.slug}",
                    div { class: "area-header",
                        input {
                            r#type: "checkbox",
                            checked: all_checked,
                            onchange: move |_| selection.write().set_all(&group_area, !all_checked),
                        }
                        span { class: "area-icon", "{card.icon}" }
                        span { class: "area-nome", "{card.area}" }
                        span { class: "area-count", "{card.count_label}" }
                        button {
                            class: "expand-btn",
                            onclick: move |_| {
                                let mut open = expanded.write();
                                if !open.remove(&expand_area) {
                                    open.insert(expand_area.clone());
                                }
                            },
                            if is_open { "▼" } else { "▶" }
                        }
                    }
                    if is_open {
                        div { class: "sub-materias",
                            for subject in subjects {
                                label { key: "{subject.name}", class: "sub-materia",
                                    input {
                                        r#type: "checkbox",
                                        checked: subject.checked,
                                        onchange: {
                                            let area = area.clone();
                                            let name = subject.name.clone();
                                            move |_| selection.write().toggle(&area, &name)
                                        },
                                    }
                                    span { "{subject.name}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_falls_back_to_default() {
        assert_eq!(parse_count(" 25 "), 25);
        assert_eq!(parse_count(""), DEFAULT_QUESTION_COUNT);
        assert_eq!(parse_count("0"), DEFAULT_QUESTION_COUNT);
        assert_eq!(parse_count("dez"), DEFAULT_QUESTION_COUNT);
    }
}
