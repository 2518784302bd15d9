use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// A top-level study area with its subjects (`sub_materias`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub area_principal: String,
    #[serde(default)]
    pub sub_materias: Vec<String>,
    #[serde(default)]
    pub total_questoes: u32,
}

/// How an area is presented in the topic picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaShape<'a> {
    /// One subject: the area itself is a checkbox selecting that subject.
    Single(&'a str),
    /// Several subjects: an expandable group of checkboxes.
    Group(&'a [String]),
}

impl Area {
    #[must_use]
    pub fn shape(&self) -> AreaShape<'_> {
        match self.sub_materias.as_slice() {
            [] => AreaShape::Single(self.area_principal.as_str()),
            [only] => AreaShape::Single(only.as_str()),
            many => AreaShape::Group(many),
        }
    }

    #[must_use]
    pub fn slug(&self) -> String {
        area_slug(&self.area_principal)
    }

    fn subjects(&self) -> Vec<&str> {
        match self.shape() {
            AreaShape::Single(subject) => vec![subject],
            AreaShape::Group(subjects) => subjects.iter().map(String::as_str).collect(),
        }
    }
}

/// Stable identifier for an area: every non-alphanumeric ASCII character
/// becomes `-`, then lowercased.
#[must_use]
pub fn area_slug(name: &str) -> String {
    name.chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '-' })
        .collect::<String>()
        .to_ascii_lowercase()
}

/// An exam board (`banca`) with its question count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub banca: String,
    #[serde(default)]
    pub total_questoes: u32,
}

impl Board {
    #[must_use]
    pub fn option_label(&self) -> String {
        format!("{} ({} Q)", self.banca, self.total_questoes)
    }
}

/// Group-level selection derived from the children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupState {
    None,
    Partial,
    All,
}

/// Checked subjects per area, keyed by area name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicSelection {
    areas: Vec<Area>,
    selected: BTreeMap<String, BTreeSet<String>>,
}

impl TopicSelection {
    #[must_use]
    pub fn new(areas: Vec<Area>) -> Self {
        Self {
            areas,
            selected: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    fn area(&self, area_name: &str) -> Option<&Area> {
        self.areas.iter().find(|area| area.area_principal == area_name)
    }

    #[must_use]
    pub fn is_selected(&self, area_name: &str, subject: &str) -> bool {
        self.selected
            .get(area_name)
            .is_some_and(|subjects| subjects.contains(subject))
    }

    /// Flip one subject. Unknown areas or subjects are ignored.
    pub fn toggle(&mut self, area_name: &str, subject: &str) {
        let Some(area) = self.area(area_name) else {
            return;
        };
        if !area.subjects().contains(&subject) {
            return;
        }
        let subjects = self.selected.entry(area_name.to_string()).or_default();
        if !subjects.remove(subject) {
            subjects.insert(subject.to_string());
        }
        if subjects.is_empty() {
            self.selected.remove(area_name);
        }
    }

    /// Select or clear every subject of an area.
    pub fn set_all(&mut self, area_name: &str, select: bool) {
        let Some(area) = self.area(area_name) else {
            return;
        };
        if select {
            let subjects = area.subjects().into_iter().map(str::to_string).collect();
            self.selected.insert(area_name.to_string(), subjects);
        } else {
            self.selected.remove(area_name);
        }
    }

    #[must_use]
    pub fn group_state(&self, area_name: &str) -> GroupState {
        let Some(area) = self.area(area_name) else {
            return GroupState::None;
        };
        let total = area.subjects().len();
        let checked = self.selected.get(area_name).map_or(0, BTreeSet::len);
        if checked == 0 || total == 0 {
            GroupState::None
        } else if checked >= total {
            GroupState::All
        } else {
            GroupState::Partial
        }
    }

    /// Selected subjects in catalog order, as sent to the start request.
    #[must_use]
    pub fn selected_topics(&self) -> Vec<String> {
        self.areas
            .iter()
            .flat_map(|area| {
                area.subjects()
                    .into_iter()
                    .filter(|subject| self.is_selected(&area.area_principal, subject))
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> TopicSelection {
        TopicSelection::new(vec![
            Area {
                area_principal: "Matemática".into(),
                sub_materias: vec!["Matemática".into()],
                total_questoes: 30,
            },
            Area {
                area_principal: "Conhecimentos Jurídicos".into(),
                sub_materias: vec![
                    "Direito Administrativo".into(),
                    "Direito Constitucional".into(),
                ],
                total_questoes: 50,
            },
        ])
    }

    #[test]
    fn shapes_follow_subject_count() {
        let selection = catalog();
        assert_eq!(selection.areas()[0].shape(), AreaShape::Single("Matemática"));
        assert!(matches!(selection.areas()[1].shape(), AreaShape::Group(subjects) if subjects.len() == 2));
    }

    #[test]
    fn group_state_is_derived_from_children() {
        let mut selection = catalog();
        let area = "Conhecimentos Jurídicos";
        assert_eq!(selection.group_state(area), GroupState::None);

        selection.toggle(area, "Direito Administrativo");
        assert_eq!(selection.group_state(area), GroupState::Partial);

        selection.toggle(area, "Direito Constitucional");
        assert_eq!(selection.group_state(area), GroupState::All);

        selection.toggle(area, "Direito Administrativo");
        assert_eq!(selection.group_state(area), GroupState::Partial);

        selection.set_all(area, false);
        assert_eq!(selection.group_state(area), GroupState::None);
        assert!(selection.is_empty());
    }

    #[test]
    fn selected_topics_follow_catalog_order() {
        let mut selection = catalog();
        selection.set_all("Conhecimentos Jurídicos", true);
        selection.toggle("Matemática", "Matemática");
        assert_eq!(
            selection.selected_topics(),
            vec![
                "Matemática".to_string(),
                "Direito Administrativo".to_string(),
                "Direito Constitucional".to_string(),
            ]
        );
    }

    #[test]
    fn unknown_subjects_are_ignored() {
        let mut selection = catalog();
        selection.toggle("Matemática", "Física");
        selection.toggle("Geografia", "Relevo");
        assert!(selection.is_empty());
    }

    #[test]
    fn slug_replaces_non_alphanumerics() {
        assert_eq!(area_slug("Psicologia (Saúde)"), "psicologia--sa-de-");
        assert_eq!(area_slug("Gestão de Pessoas"), "gest-o-de-pessoas");
    }
}
