//! Driver configuration
//!
//! Stored as TOML at `~/.config/beosound5/config.toml`. Every field has a
//! default, so a partial or missing file is fine.

use beosound_panel::{IndicatorMode, StatusByte};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Complete driver configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Name for the virtual input device
    #[serde(default = "default_device_name")]
    pub device_name: String,
    /// Screen backlight state applied when a session starts
    #[serde(default = "default_true")]
    pub screen_on: bool,
    /// Indicator mode applied when a session starts
    #[serde(default)]
    pub indicator: IndicatorMode,
    /// How long one input read may block (ms, 0 or more)
    #[serde(default = "default_read_timeout")]
    pub read_timeout_ms: i32,
    /// Negate both wheel deltas before they reach the virtual device
    #[serde(default)]
    pub invert_wheels: bool,
}

fn default_device_name() -> String {
    "BeoSound 5".to_string()
}

fn default_true() -> bool {
    true
}

fn default_read_timeout() -> i32 {
    100
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            device_name: default_device_name(),
            screen_on: true,
            indicator: IndicatorMode::Off,
            read_timeout_ms: default_read_timeout(),
            invert_wheels: false,
        }
    }
}

impl DriverConfig {
    /// Get the default config file path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("beosound5")
            .join("config.toml")
    }

    /// Load config from a file, or return default if not found
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: DriverConfig = toml::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to a file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check values serde cannot constrain
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.read_timeout_ms < 0 {
            anyhow::bail!(
                "read_timeout_ms must be 0 or more, got {}",
                self.read_timeout_ms
            );
        }
        Ok(())
    }

    /// Status the session should start with
    pub fn initial_status(&self) -> StatusByte {
        StatusByte::new(self.screen_on, self.indicator)
    }
}
