use eframe::egui;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    System,
    Dark,
    Light,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::System
    }
}

/// Map the configured theme mode onto egui visuals. `System` keeps whatever
/// the context already uses.
pub fn visuals_for_mode(mode: ThemeMode, defaults: &egui::Visuals) -> egui::Visuals {
    match mode {
        ThemeMode::System => defaults.clone(),
        ThemeMode::Dark => egui::Visuals::dark(),
        ThemeMode::Light => egui::Visuals::light(),
    }
}

#[cfg(test)]
mod tests {
    use super::{visuals_for_mode, ThemeMode};
    use eframe::egui;

    #[test]
    fn system_mode_keeps_context_defaults() {
        let base = egui::Visuals::light();
        let visuals = visuals_for_mode(ThemeMode::System, &base);
        assert!(!visuals.dark_mode);

        let base = egui::Visuals::dark();
        let visuals = visuals_for_mode(ThemeMode::System, &base);
        assert!(visuals.dark_mode);
    }

    #[test]
    fn mode_switching_is_deterministic() {
        let base = egui::Visuals::light();

        let dark = visuals_for_mode(ThemeMode::Dark, &base);
        let light = visuals_for_mode(ThemeMode::Light, &base);

        assert!(dark.dark_mode);
        assert!(!light.dark_mode);
        assert_eq!(dark.window_fill, egui::Visuals::dark().window_fill);
        assert_eq!(light.window_fill, egui::Visuals::light().window_fill);
    }

    #[test]
    fn mode_serialises_lowercase() {
        let json = serde_json::to_string(&ThemeMode::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        let back: ThemeMode = serde_json::from_str("\"system\"").unwrap();
        assert_eq!(back, ThemeMode::System);
    }
}
