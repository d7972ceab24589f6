//! Synchronous helpers for panel discovery.

use beosound_transport::{DiscoveredDevice, HidDiscovery, PrinterConfig};

use crate::error::PanelError;
use crate::status::StatusByte;
use crate::Panel;

/// List all connected panels
pub fn list_panels() -> Result<Vec<DiscoveredDevice>, PanelError> {
    Ok(HidDiscovery::new().list_devices()?)
}

/// Open the first connected panel, optionally with traffic monitoring.
///
/// The session starts from `status`; nothing is transmitted yet.
pub fn open_panel(
    monitor: Option<PrinterConfig>,
    status: StatusByte,
) -> Result<Panel, PanelError> {
    let discovery = match monitor {
        Some(config) => HidDiscovery::with_printer_config(config),
        None => HidDiscovery::new(),
    };
    let transport = discovery.open_first().map_err(|e| match e {
        beosound_transport::TransportError::DeviceNotFound(msg) => PanelError::NotFound(msg),
        other => PanelError::Transport(other),
    })?;
    Ok(Panel::with_status(transport, status))
}
