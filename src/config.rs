//! User settings (`folio.json`).
//!
//! Every field has a default, so a partial or empty file is valid. A missing
//! file means defaults; a malformed file is an error for `load` and a warning
//! for `load_or_default`.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::core::SliderOptions;
use crate::design::StaticEnvironment;
use crate::design::tokens::DEFAULT_AUTOPLAY_INTERVAL;
use crate::paths::{self, PathConfig, SETTINGS_FILE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderSettings {
    pub autoplay: bool,
    pub interval_ms: u64,
    pub initial_slide: usize,
}

impl Default for SliderSettings {
    fn default() -> Self {
        Self {
            autoplay: true,
            interval_ms: DEFAULT_AUTOPLAY_INTERVAL.as_millis() as u64,
            initial_slide: 0,
        }
    }
}

impl SliderSettings {
    /// Apply on top of a preset
    pub fn apply(&self, base: SliderOptions) -> SliderOptions {
        SliderOptions {
            autoplay: self.autoplay,
            interval: Duration::from_millis(self.interval_ms),
            initial_slide: self.initial_slide,
            ..base
        }
    }
}

/// Viewport used by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    pub width: u32,
    pub height: u32,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self { width: 1440, height: 900 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub hero: SliderSettings,
    pub hobbies: SliderSettings,
    /// Reduced motion for the simulated environment; `None` means off
    pub reduced_motion: Option<bool>,
    pub viewport: ViewportSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hero: SliderSettings::default(),
            hobbies: SliderSettings {
                autoplay: false,
                ..SliderSettings::default()
            },
            reduced_motion: None,
            viewport: ViewportSettings::default(),
        }
    }
}

impl Settings {
    /// Read settings from `path`. Missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings: {}", path.display()))?;
        let settings: Self = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse settings: {}", path.display()))?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Settings from the resolved config dir; malformed files fall back to defaults.
    pub fn load_or_default(config: &PathConfig) -> Self {
        let path = paths::config_file(SETTINGS_FILE, config);
        Self::load(&path).unwrap_or_else(|e| {
            warn!("{:#}; using default settings", e);
            Self::default()
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        std::fs::write(path, json).with_context(|| format!("Failed to write settings: {}", path.display()))?;
        info!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Environment for the configured viewport; reduced motion only when set to `true`
    pub fn environment(&self) -> StaticEnvironment {
        StaticEnvironment::new(self.viewport.width, self.viewport.height)
            .with_reduced_motion(self.reduced_motion.unwrap_or(false))
    }

    pub fn hero_options(&self) -> SliderOptions {
        self.hero.apply(SliderOptions::hero())
    }

    pub fn hobbies_options(&self) -> SliderOptions {
        self.hobbies.apply(SliderOptions::hobbies())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::Environment;

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"hero":{"interval_ms":3000},"reduced_motion":true}"#).unwrap();
        assert_eq!(settings.hero.interval_ms, 3000);
        assert!(settings.hero.autoplay);
        assert!(!settings.hobbies.autoplay);
        assert_eq!(settings.viewport, ViewportSettings::default());
        assert!(settings.environment().prefers_reduced_motion());
        assert_eq!(settings.hero_options().interval, Duration::from_millis(3000));
        assert_eq!(settings.hero_options().name, "hero");
    }

    #[test]
    fn test_empty_object_is_default() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!settings.environment().prefers_reduced_motion());
        let off: Settings = serde_json::from_str(r#"{"reduced_motion":false}"#).unwrap();
        assert!(!off.environment().prefers_reduced_motion());
    }

    #[test]
    fn test_save_load_and_errors() {
        let dir = std::env::temp_dir().join(format!("folio_settings_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(SETTINGS_FILE);

        assert_eq!(Settings::load(&path).unwrap(), Settings::default());

        let mut settings = Settings::default();
        settings.viewport.width = 375;
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap().viewport.width, 375);

        std::fs::write(&path, "{ not json").unwrap();
        assert!(Settings::load(&path).is_err());
        let config = PathConfig {
            config_dir: Some(dir.clone()),
        };
        assert_eq!(Settings::load_or_default(&config), Settings::default());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
