/// Reading preferences layered on top of the quiz view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiPreferences {
    font_scale: f64,
    focus_mode: bool,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            font_scale: Self::DEFAULT_FONT_SCALE,
            focus_mode: false,
        }
    }
}

impl UiPreferences {
    pub const MIN_FONT_SCALE: f64 = 0.8;
    pub const MAX_FONT_SCALE: f64 = 1.6;
    pub const DEFAULT_FONT_SCALE: f64 = 1.0;
    pub const FONT_STEP: f64 = 0.1;

    /// Build preferences from possibly stale persisted values; the scale is
    /// clamped and non-finite values fall back to the default.
    #[must_use]
    pub fn new(font_scale: f64, focus_mode: bool) -> Self {
        Self {
            font_scale: clamp_scale(font_scale),
            focus_mode,
        }
    }

    #[must_use]
    pub fn font_scale(&self) -> f64 {
        self.font_scale
    }

    #[must_use]
    pub fn focus_mode(&self) -> bool {
        self.focus_mode
    }

    pub fn increase_font(&mut self) {
        self.font_scale = clamp_scale(self.font_scale + Self::FONT_STEP);
    }

    pub fn decrease_font(&mut self) {
        self.font_scale = clamp_scale(self.font_scale - Self::FONT_STEP);
    }

    pub fn reset_font(&mut self) {
        self.font_scale = Self::DEFAULT_FONT_SCALE;
    }

    pub fn toggle_focus_mode(&mut self) {
        self.focus_mode = !self.focus_mode;
    }
}

// Rounded to one decimal so repeated steps do not drift.
fn clamp_scale(scale: f64) -> f64 {
    if !scale.is_finite() {
        return UiPreferences::DEFAULT_FONT_SCALE;
    }
    let rounded = (scale * 10.0).round() / 10.0;
    rounded.clamp(UiPreferences::MIN_FONT_SCALE, UiPreferences::MAX_FONT_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_increase_stops_at_max() {
        let mut prefs = UiPreferences::default();
        for _ in 0..20 {
            prefs.increase_font();
            assert!(prefs.font_scale() <= UiPreferences::MAX_FONT_SCALE);
        }
        assert!((prefs.font_scale() - UiPreferences::MAX_FONT_SCALE).abs() < f64::EPSILON);
    }

    #[test]
    fn repeated_decrease_stops_at_min() {
        let mut prefs = UiPreferences::default();
        for _ in 0..20 {
            prefs.decrease_font();
            assert!(prefs.font_scale() >= UiPreferences::MIN_FONT_SCALE);
        }
        assert!((prefs.font_scale() - UiPreferences::MIN_FONT_SCALE).abs() < f64::EPSILON);
    }

    #[test]
    fn persisted_values_are_clamped() {
        assert!((UiPreferences::new(3.0, false).font_scale() - 1.6).abs() < f64::EPSILON);
        assert!((UiPreferences::new(f64::NAN, true).font_scale() - 1.0).abs() < f64::EPSILON);
        assert!(UiPreferences::new(1.0, true).focus_mode());
    }

    #[test]
    fn focus_mode_toggles() {
        let mut prefs = UiPreferences::default();
        prefs.toggle_focus_mode();
        assert!(prefs.focus_mode());
    }
}
