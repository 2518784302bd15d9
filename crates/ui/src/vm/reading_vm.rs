use concurso_core::model::UiPreferences;

/// Inline style and class hooks derived from the reading preferences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadingVm {
    pub style: String,
    pub root_class: &'static str,
    pub scale_label: String,
    pub can_decrease: bool,
    pub can_increase: bool,
    pub focus_label: &'static str,
}

#[must_use]
pub fn map_reading(preferences: &UiPreferences) -> ReadingVm {
    let scale = preferences.font_scale();
    ReadingVm {
        style: format!("font-size: {scale:.1}rem;"),
        root_class: if preferences.focus_mode() {
            "leitura modo-foco"
        } else {
            "leitura"
        },
        scale_label: format!("{:.0}%", scale * 100.0),
        can_decrease: scale > UiPreferences::MIN_FONT_SCALE + 1e-9,
        can_increase: scale < UiPreferences::MAX_FONT_SCALE - 1e-9,
        focus_label: if preferences.focus_mode() {
            "Sair do modo foco"
        } else {
            "Modo foco"
        },
    }
}
