//! Report codec and transport layer for the Bang & Olufsen BeoSound 5 panel
//!
//! The panel is a USB HID device combining an input surface (laser pointer,
//! two endless wheels, four buttons) with a screen backlight and an indicator
//! LED. This crate provides:
//!
//! - the input report decoder ([`decode`])
//! - the outgoing status command layout ([`OutgoingCommand`])
//! - the [`Transport`] trait and its HID, in-memory and monitoring backends
//! - discovery of connected panels

pub mod device_registry;
pub mod error;
pub mod input_report;
pub mod printer;
pub mod protocol;
pub mod types;

mod discovery;
mod hid_panel;
mod memory;

pub use device_registry::{is_beosound5, PRODUCT_ID, VENDOR_ID};
pub use error::{DecodeError, TransportError};
pub use input_report::{decode, Buttons, InputEventSet};
pub use printer::{PacketFilter, PrinterConfig, PrinterTransport};
pub use protocol::{OutgoingCommand, RawInputReport};
pub use types::{DiscoveredDevice, TransportDeviceInfo};

pub use discovery::HidDiscovery;
pub use hid_panel::HidPanelTransport;
pub use memory::MemoryTransport;

use std::sync::Arc;

/// The core transport trait - all backends implement this
///
/// Calls are synchronous: a command's success or failure is known before
/// `send_command` returns. Backends do not retry.
pub trait Transport: Send + Sync {
    /// Send one status command to the device
    fn send_command(&self, cmd: &OutgoingCommand) -> Result<(), TransportError>;

    /// Read one raw input report
    ///
    /// # Arguments
    /// * `timeout_ms` - Timeout in milliseconds (0 for non-blocking, -1 to block)
    ///
    /// # Returns
    /// `None` on timeout, `Some(report)` if data was received
    fn read_report(&self, timeout_ms: i32) -> Result<Option<Vec<u8>>, TransportError>;

    /// Get device information
    fn device_info(&self) -> &TransportDeviceInfo;
}

/// Type alias for a shared transport
pub type BoxedTransport = Arc<dyn Transport>;
