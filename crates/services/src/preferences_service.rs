use concurso_core::model::UiPreferences;
use storage::{SessionKey, SessionStore};

/// Reading preferences kept for the lifetime of the session.
#[derive(Clone, Debug)]
pub struct PreferencesService {
    store: SessionStore,
}

impl PreferencesService {
    #[must_use]
    pub fn new(store: SessionStore) -> Self {
        Self { store }
    }

    /// Stored preferences, with defaults for anything missing or unreadable.
    #[must_use]
    pub fn load(&self) -> UiPreferences {
        let defaults = UiPreferences::default();
        let font_scale = self
            .store
            .get::<f64>(SessionKey::FontSize)
            .unwrap_or(defaults.font_scale());
        let focus_mode = self
            .store
            .get::<bool>(SessionKey::FocusMode)
            .unwrap_or(defaults.focus_mode());
        UiPreferences::new(font_scale, focus_mode)
    }

    pub fn save(&self, preferences: &UiPreferences) {
        self.store
            .set(SessionKey::FontSize, &preferences.font_scale());
        self.store
            .set(SessionKey::FocusMode, &preferences.focus_mode());
    }

    /// Apply `change` to the stored preferences and persist the result.
    pub fn update(&self, change: impl FnOnce(&mut UiPreferences)) -> UiPreferences {
        let mut preferences = self.load();
        change(&mut preferences);
        self.save(&preferences);
        preferences
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use storage::DisabledTabStorage;

    #[test]
    fn defaults_when_nothing_is_stored() {
        let service = PreferencesService::new(SessionStore::in_memory());
        assert_eq!(service.load(), UiPreferences::default());
    }

    #[test]
    fn update_persists_clamped_scale() {
        let service = PreferencesService::new(SessionStore::in_memory());
        for _ in 0..20 {
            service.update(UiPreferences::increase_font);
        }
        let loaded = service.load();
        assert!((loaded.font_scale() - UiPreferences::MAX_FONT_SCALE).abs() < 1e-9);

        service.update(UiPreferences::toggle_focus_mode);
        assert!(service.load().focus_mode());
    }

    #[test]
    fn out_of_range_stored_scale_is_clamped() {
        let store = SessionStore::in_memory();
        store.set(SessionKey::FontSize, &9.0_f64);
        let service = PreferencesService::new(store);
        assert!((service.load().font_scale() - UiPreferences::MAX_FONT_SCALE).abs() < 1e-9);
    }

    #[test]
    fn disabled_storage_falls_back_to_defaults() {
        let service = PreferencesService::new(SessionStore::new(Arc::new(DisabledTabStorage)));
        let updated = service.update(UiPreferences::increase_font);
        assert!(updated.font_scale() > UiPreferences::DEFAULT_FONT_SCALE);
        assert_eq!(service.load(), UiPreferences::default());
    }
}
