use crate::theme::ThemeMode;
use serde::{Deserialize, Serialize};

/// Default settings file name, resolved relative to the working directory.
pub const SETTINGS_FILE: &str = "hub_settings.json";

/// Smallest window the hub will open with.
pub const MIN_WINDOW_SIZE: (f32, f32) = (640.0, 480.0);

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// Log at debug level instead of the usual info.
    #[serde(default)]
    pub debug_logging: bool,
    /// Extra log sink. Lines go only to stderr when unset.
    #[serde(default)]
    pub log_file: Option<String>,
    /// Window size requested at startup. Read through [`Settings::window_size`],
    /// which guards against corrupt values.
    #[serde(default = "default_window_size")]
    pub window_size: (f32, f32),
    /// Colour scheme applied at startup.
    #[serde(default)]
    pub theme: ThemeMode,
}

fn default_window_size() -> (f32, f32) {
    (960.0, 720.0)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            log_file: None,
            window_size: default_window_size(),
            theme: ThemeMode::default(),
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Startup window size. A hand-edited or corrupt value falls back to the
    /// default so the window always opens on screen.
    pub fn window_size(&self) -> (f32, f32) {
        let (width, height) = self.window_size;
        let usable = width.is_finite()
            && height.is_finite()
            && width >= MIN_WINDOW_SIZE.0
            && height >= MIN_WINDOW_SIZE.1;
        if !usable {
            tracing::warn!(
                "stored window size {:?} is unusable; using the default",
                self.window_size
            );
            return default_window_size();
        }
        (width, height)
    }
}
