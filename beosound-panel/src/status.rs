//! The status register: one byte of device-visible output state

use std::fmt;

use beosound_transport::protocol::{status, OutgoingCommand};

use crate::led::IndicatorMode;

/// Screen and indicator state packed the way the panel expects it
///
/// The screen bit and the two indicator bits are independent. At most one
/// indicator bit is ever set; every constructor and setter preserves that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusByte(u8);

impl Default for StatusByte {
    fn default() -> Self {
        Self(status::DEFAULT)
    }
}

impl StatusByte {
    /// Build from logical states
    pub fn new(screen_on: bool, indicator: IndicatorMode) -> Self {
        let mut byte = Self(0);
        byte.set_screen(screen_on);
        byte.set_indicator(indicator);
        byte
    }

    /// Raw byte as sent on the wire
    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn screen_on(self) -> bool {
        self.0 & status::SCREEN != 0
    }

    /// Current indicator mode
    pub fn indicator(self) -> IndicatorMode {
        if self.0 & status::LED_BLINK != 0 {
            IndicatorMode::Blink
        } else if self.0 & status::LED_SOLID != 0 {
            IndicatorMode::Solid
        } else {
            IndicatorMode::Off
        }
    }

    pub fn set_screen(&mut self, on: bool) {
        if on {
            self.0 |= status::SCREEN;
        } else {
            self.0 &= !status::SCREEN;
        }
    }

    pub fn set_indicator(&mut self, mode: IndicatorMode) {
        let bits = match mode {
            IndicatorMode::Off => 0,
            IndicatorMode::Solid => status::LED_SOLID,
            IndicatorMode::Blink => status::LED_BLINK,
        };
        self.0 = (self.0 & !status::LED_MASK) | bits;
    }

    /// Command carrying this status
    pub fn to_command(self) -> OutgoingCommand {
        OutgoingCommand::new(self.0)
    }
}

impl fmt::Display for StatusByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X} ({})", self.0, status::describe(self.0))
    }
}
