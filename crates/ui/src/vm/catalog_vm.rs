use std::collections::BTreeSet;

use concurso_core::model::{AreaShape, Board, GroupState, TopicSelection};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectVm {
    pub name: String,
    pub checked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AreaCardKind {
    /// The card itself toggles its only subject.
    Single { subject: String, checked: bool },
    Group {
        subjects: Vec<SubjectVm>,
        state: GroupState,
        expanded: bool,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AreaCardVm {
    pub area: String,
    pub slug: String,
    pub icon: &'static str,
    pub count_label: String,
    pub class: String,
    pub kind: AreaCardKind,
}

#[must_use]
pub fn area_icon(area: &str) -> &'static str {
    match area {
        "Língua Portuguesa" => "📝",
        "Exatas e Raciocínio Lógico" | "Matemática" | "Raciocínio Lógico"
        | "Matemática Financeira" => "🔢",
        "Conhecimentos Jurídicos" | "Direito Administrativo" | "Direito Constitucional" => "⚖️",
        "Conhecimentos Bancários e Vendas" => "💰",
        "Psicologia Clínica e Saúde" | "Psicologia" | "Psicologia (Saúde)" => "🧠",
        "Gestão de Pessoas" | "Psicologia (Gestão)" => "👥",
        "Informática" => "💻",
        "Atualidades Gerais" => "📰",
        _ => "❓",
    }
}

/// Cards for the topic picker. `expanded` holds the names of open groups.
#[must_use]
pub fn map_area_cards(selection: &TopicSelection, expanded: &BTreeSet<String>) -> Vec<AreaCardVm> {
    selection
        .areas()
        .iter()
        .map(|area| {
            let name = area.area_principal.as_str();
            let mut class = String::from("area-card-inteligente");
            let kind = match area.shape() {
                AreaShape::Single(subject) => {
                    let checked = selection.is_selected(name, subject);
                    if checked {
                        class.push_str(" selected");
                    }
                    AreaCardKind::Single {
                        subject: subject.to_string(),
                        checked,
                    }
                }
                AreaShape::Group(subjects) => {
                    let state = selection.group_state(name);
                    let is_open = expanded.contains(name);
                    match state {
                        GroupState::All => class.push_str(" selected"),
                        GroupState::Partial => class.push_str(" partial"),
                        GroupState::None => {}
                    }
                    if is_open {
                        class.push_str(" expanded");
                    }
                    AreaCardKind::Group {
                        subjects: subjects
                            .iter()
                            .map(|subject| SubjectVm {
                                name: subject.clone(),
                                checked: selection.is_selected(name, subject),
                            })
                            .collect(),
                        state,
                        expanded: is_open,
                    }
                }
            };
            AreaCardVm {
                area: name.to_string(),
                slug: area.slug(),
                icon: area_icon(name),
                count_label: format!("{} questões", area.total_questoes),
                class,
                kind,
            }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardOptionVm {
    pub value: String,
    pub label: String,
}

#[must_use]
pub fn map_board_options(boards: &[Board]) -> Vec<BoardOptionVm> {
    boards
        .iter()
        .map(|board| BoardOptionVm {
            value: board.banca.clone(),
            label: board.option_label(),
        })
        .collect()
}
