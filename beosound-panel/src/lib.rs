//! High-level panel interface for the BeoSound 5
//!
//! This crate sits on top of any [`beosound_transport::Transport`] and provides the status
//! encoder (screen backlight and indicator LED) plus input polling that feeds
//! decoded event sets to an [`EventSink`].

pub mod encoder;
pub mod error;
pub mod led;
pub mod sink;
pub mod status;
pub mod sync;

pub use encoder::StatusEncoder;
pub use error::PanelError;
pub use led::{IndicatorMode, LedTarget};
pub use sink::{EventSink, RecordingSink};
pub use status::StatusByte;
pub use sync::{list_panels, open_panel};

// Re-export decoded input types for sink implementations
pub use beosound_transport::{Buttons, DecodeError, InputEventSet};

use beosound_transport::{decode, BoxedTransport, TransportDeviceInfo};
use tracing::{debug, info};

/// Result of one input poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// No report arrived before the timeout
    Idle,
    /// A report was decoded and handed to the sink
    Delivered(InputEventSet),
    /// A report arrived but could not be decoded; nothing was emitted
    Dropped(DecodeError),
}

/// One session with a connected panel
pub struct Panel {
    transport: BoxedTransport,
    encoder: StatusEncoder,
}

impl Panel {
    /// Create a session with the default status (screen on, indicator off)
    pub fn new(transport: BoxedTransport) -> Self {
        Self::with_status(transport, StatusByte::default())
    }

    /// Create a session starting from a specific status
    pub fn with_status(transport: BoxedTransport, status: StatusByte) -> Self {
        let encoder = StatusEncoder::with_status(transport.clone(), status);
        Self { transport, encoder }
    }

    pub fn device_info(&self) -> &TransportDeviceInfo {
        self.transport.device_info()
    }

    /// Status encoder for this session
    pub fn encoder(&self) -> &StatusEncoder {
        &self.encoder
    }

    /// Push the initial status to the device
    pub fn start(&self) -> Result<(), PanelError> {
        info!("Panel session started, status {}", self.encoder.status());
        self.encoder.sync()
    }

    // === Output ===

    pub fn set_screen(&self, on: bool) -> Result<(), PanelError> {
        self.encoder.set_screen(on)
    }

    pub fn set_indicator(&self, mode: IndicatorMode) -> Result<(), PanelError> {
        self.encoder.set_indicator(mode)
    }

    pub fn set_brightness(&self, target: LedTarget, brightness: u32) -> Result<(), PanelError> {
        self.encoder.set_brightness(target, brightness)
    }

    pub fn status(&self) -> StatusByte {
        self.encoder.status()
    }

    // === Input ===

    /// Wait up to `timeout_ms` for one input report and deliver it to `sink`.
    ///
    /// Malformed reports are dropped and reported as [`PollOutcome::Dropped`];
    /// only transport and sink failures are errors.
    pub fn poll(
        &self,
        sink: &mut dyn EventSink,
        timeout_ms: i32,
    ) -> Result<PollOutcome, PanelError> {
        let Some(report) = self.transport.read_report(timeout_ms)? else {
            return Ok(PollOutcome::Idle);
        };

        match decode(&report) {
            Ok(events) => {
                sink.emit(&events)?;
                Ok(PollOutcome::Delivered(events))
            }
            Err(e) => {
                debug!("Dropping input report: {}", e);
                Ok(PollOutcome::Dropped(e))
            }
        }
    }
}
