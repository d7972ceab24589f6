//! Output state encoder
//!
//! Owns the status register and pushes it to the device after every change.
//! Each request is transmitted on its own, even when it leaves the byte
//! unchanged. A failed transmission is reported but the register keeps the
//! requested state; the next successful transmission brings the device back
//! in line.

use parking_lot::Mutex;
use tracing::{debug, warn};

use beosound_transport::BoxedTransport;

use crate::error::PanelError;
use crate::led::{IndicatorMode, LedTarget};
use crate::status::StatusByte;

/// Sole owner and mutator of the panel status byte
pub struct StatusEncoder {
    transport: BoxedTransport,
    /// Held across mutate-and-transmit so concurrent requests serialize
    status: Mutex<StatusByte>,
}

impl StatusEncoder {
    /// Create an encoder with the session default status (screen on, indicator off).
    ///
    /// Nothing is transmitted until the first request or [`sync`](Self::sync).
    pub fn new(transport: BoxedTransport) -> Self {
        Self::with_status(transport, StatusByte::default())
    }

    /// Create an encoder starting from a specific status
    pub fn with_status(transport: BoxedTransport, status: StatusByte) -> Self {
        Self {
            transport,
            status: Mutex::new(status),
        }
    }

    /// Current register value, without transmitting
    pub fn status(&self) -> StatusByte {
        *self.status.lock()
    }

    /// Transmit the current register unchanged
    pub fn sync(&self) -> Result<(), PanelError> {
        self.update(|_| {})
    }

    /// Turn the screen backlight on or off
    pub fn set_screen(&self, on: bool) -> Result<(), PanelError> {
        debug!("Screen {}", if on { "on" } else { "off" });
        self.update(|status| status.set_screen(on))
    }

    /// Set the indicator LED mode
    pub fn set_indicator(&self, mode: IndicatorMode) -> Result<(), PanelError> {
        debug!("Indicator {}", mode);
        self.update(|status| status.set_indicator(mode))
    }

    /// Set the indicator from a numeric level (0 off, 1 solid, 2 blink).
    ///
    /// Other levels leave the indicator as it was; the status is still
    /// transmitted.
    pub fn set_indicator_level(&self, level: u32) -> Result<(), PanelError> {
        match IndicatorMode::from_level(level) {
            Some(mode) => self.set_indicator(mode),
            None => {
                debug!("Ignoring indicator level {}", level);
                self.sync()
            }
        }
    }

    /// LED-class style brightness request
    pub fn set_brightness(&self, target: LedTarget, brightness: u32) -> Result<(), PanelError> {
        match target {
            LedTarget::Backlight => self.set_screen(brightness != 0),
            LedTarget::Indicator => self.set_indicator_level(brightness),
        }
    }

    /// Current brightness value of an LED target
    pub fn brightness(&self, target: LedTarget) -> u32 {
        let status = self.status();
        match target {
            LedTarget::Backlight => u32::from(status.screen_on()),
            LedTarget::Indicator => status.indicator().level(),
        }
    }

    fn update(&self, mutate: impl FnOnce(&mut StatusByte)) -> Result<(), PanelError> {
        let mut status = self.status.lock();
        mutate(&mut *status);

        let cmd = status.to_command();
        if let Err(e) = self.transport.send_command(&cmd) {
            warn!("Failed to send status {}: {}", *status, e);
            return Err(e.into());
        }
        Ok(())
    }
}
