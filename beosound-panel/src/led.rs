//! Indicator modes and LED targets

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use beosound_transport::device_registry::DEVICE_NAME;

/// Maximum brightness of the screen backlight LED (on/off only)
pub const BACKLIGHT_MAX_BRIGHTNESS: u32 = 1;

/// Maximum brightness of the indicator LED (off, solid, blink)
pub const INDICATOR_MAX_BRIGHTNESS: u32 = 2;

/// Indicator LED mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum IndicatorMode {
    #[default]
    Off = 0,
    Solid = 1,
    Blink = 2,
}

impl IndicatorMode {
    /// All modes, in level order
    pub const ALL: [IndicatorMode; 3] = [Self::Off, Self::Solid, Self::Blink];

    /// Get mode from a numeric brightness level
    ///
    /// Returns `None` for anything outside `0..=2`.
    pub fn from_level(level: u32) -> Option<Self> {
        match level {
            0 => Some(Self::Off),
            1 => Some(Self::Solid),
            2 => Some(Self::Blink),
            _ => None,
        }
    }

    /// Numeric brightness level of this mode
    pub fn level(self) -> u32 {
        self as u32
    }

    /// Get the display name for this mode
    pub fn name(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Solid => "solid",
            Self::Blink => "blink",
        }
    }
}

impl fmt::Display for IndicatorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IndicatorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" | "0" => Ok(Self::Off),
            "solid" | "on" | "1" => Ok(Self::Solid),
            "blink" | "2" => Ok(Self::Blink),
            _ => Err(format!("Unknown indicator mode: {s} (expected off, solid or blink)")),
        }
    }
}

/// LED-class style targets exposed by the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedTarget {
    /// Screen backlight (`beosound5::backlight`)
    Backlight,
    /// Indicator LED (`beosound5::indicator`)
    Indicator,
}

impl LedTarget {
    pub const ALL: [LedTarget; 2] = [Self::Backlight, Self::Indicator];

    /// LED name, e.g. `beosound5::backlight`
    pub fn name(&self) -> String {
        let function = match self {
            Self::Backlight => "backlight",
            Self::Indicator => "indicator",
        };
        format!("{DEVICE_NAME}::{function}")
    }

    /// Highest meaningful brightness value
    pub fn max_brightness(&self) -> u32 {
        match self {
            Self::Backlight => BACKLIGHT_MAX_BRIGHTNESS,
            Self::Indicator => INDICATOR_MAX_BRIGHTNESS,
        }
    }

    /// Resolve a full LED name or its short function suffix
    pub fn from_name(name: &str) -> Option<Self> {
        let function = name
            .strip_prefix(DEVICE_NAME)
            .and_then(|rest| rest.strip_prefix("::"))
            .unwrap_or(name);
        match function {
            "backlight" | "screen" => Some(Self::Backlight),
            "indicator" | "led" => Some(Self::Indicator),
            _ => None,
        }
    }
}
