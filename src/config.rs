use crate::keymap::Keymap;
use crate::state::AccessibilitySettings;
use crate::styles::ThemeType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// UI theme: dark, light, highcontrast or nocolor
    #[serde(default)]
    pub theme: ThemeType,
    /// Key bindings (preset plus overrides)
    #[serde(default)]
    pub keymap: Keymap,
    /// Accessibility preferences, written back when the settings dialog closes
    #[serde(default)]
    pub accessibility: AccessibilitySettings,
    /// Timer intervals
    #[serde(default)]
    pub timers: TimerConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// How long the splash screen stays up (default: 2000)
    #[serde(default = "default_splash_delay_ms")]
    pub splash_delay_ms: u64,
    /// Seconds between heart regenerations (default: one day)
    #[serde(default = "default_heart_regen_secs")]
    pub heart_regen_secs: u64,
}

fn default_splash_delay_ms() -> u64 {
    2000
}

fn default_heart_regen_secs() -> u64 {
    24 * 60 * 60
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            splash_delay_ms: default_splash_delay_ms(),
            heart_regen_secs: default_heart_regen_secs(),
        }
    }
}

impl TimerConfig {
    pub fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_delay_ms)
    }

    /// Never zero; a zero interval would fire every tick.
    pub fn heart_regen_interval(&self) -> Duration {
        Duration::from_secs(self.heart_regen_secs.max(1))
    }
}

impl Config {
    /// Load configuration from file or create default
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let mut config: Config = toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

            // Hand-edited values may be off the 16-24 grid
            config.accessibility = config.accessibility.normalized();

            Ok(config)
        } else {
            let config = Self::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    /// Theme after applying `NO_COLOR` and the high-contrast setting.
    pub fn effective_theme(&self, no_color_env: bool) -> ThemeType {
        if no_color_env {
            return ThemeType::NoColor;
        }
        self.theme.effective(self.accessibility.high_contrast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::{Action, KeyBinding, KeymapPreset};
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.theme, ThemeType::Dark);
        assert_eq!(config.timers.splash_delay(), Duration::from_millis(2000));
        assert_eq!(config.accessibility.font_size, 18);
    }

    #[test]
    fn test_load_creates_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config::load_or_create(&config_path).unwrap();
        assert!(config_path.exists());
        assert_eq!(config.keymap.preset, KeymapPreset::Standard);
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.theme = ThemeType::Light;
        config.accessibility.voice_guide = true;
        config.keymap.overrides.push(KeyBinding::new("ctrl+q", Action::Quit));
        config.save(&config_path).unwrap();

        let loaded = Config::load_or_create(&config_path).unwrap();
        assert_eq!(loaded.theme, ThemeType::Light);
        assert!(loaded.accessibility.voice_guide);
        assert_eq!(loaded.keymap.overrides.len(), 1);
        assert_eq!(loaded.keymap.overrides[0].action, Action::Quit);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            "theme = \"nocolor\"\n[accessibility]\nfont_size = 23\n[timers]\nheart_regen_secs = 0\n",
        )
        .unwrap();

        let config = Config::load_or_create(&config_path).unwrap();
        assert_eq!(config.theme, ThemeType::NoColor);
        assert_eq!(config.accessibility.font_size, 22);
        assert!(!config.accessibility.high_contrast);
        assert_eq!(config.timers.splash_delay_ms, 2000);
        assert_eq!(config.timers.heart_regen_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "theme = [").unwrap();
        assert!(Config::load_or_create(&config_path).is_err());
    }

    #[test]
    fn test_effective_theme() {
        let mut config = Config::default();
        assert_eq!(config.effective_theme(false), ThemeType::Dark);
        config.accessibility.high_contrast = true;
        assert_eq!(config.effective_theme(false), ThemeType::HighContrast);
        assert_eq!(config.effective_theme(true), ThemeType::NoColor);
    }
}
