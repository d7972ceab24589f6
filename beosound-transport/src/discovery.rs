//! Device discovery for BeoSound 5 panels

use std::sync::Arc;

use hidapi::HidApi;
use tracing::{debug, info};

use crate::device_registry;
use crate::error::TransportError;
use crate::hid_panel::HidPanelTransport;
use crate::printer::{PrinterConfig, PrinterTransport};
use crate::types::{DiscoveredDevice, TransportDeviceInfo};
use crate::Transport;

/// HID device discovery
pub struct HidDiscovery {
    /// Optional printer config for monitoring mode - wraps transports automatically
    printer_config: Option<PrinterConfig>,
}

impl Default for HidDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

impl HidDiscovery {
    /// Create a new HID discovery instance
    pub fn new() -> Self {
        Self { printer_config: None }
    }

    /// Create with printer config for monitoring mode.
    /// All transports opened via `open_device()` are wrapped with a printer.
    pub fn with_printer_config(config: PrinterConfig) -> Self {
        Self {
            printer_config: Some(config),
        }
    }

    /// List currently connected panels
    pub fn list_devices(&self) -> Result<Vec<DiscoveredDevice>, TransportError> {
        let api = HidApi::new()?;
        let mut devices = Vec::new();

        for dev in api.device_list() {
            if !device_registry::is_beosound5(dev.vendor_id(), dev.product_id()) {
                continue;
            }
            let path = dev.path().to_string_lossy().into_owned();
            if devices
                .iter()
                .any(|d: &DiscoveredDevice| d.info.device_path == path)
            {
                continue;
            }

            debug!(
                "Found panel {:04x}:{:04x} at {}",
                dev.vendor_id(),
                dev.product_id(),
                path
            );
            devices.push(DiscoveredDevice {
                info: TransportDeviceInfo {
                    vid: dev.vendor_id(),
                    pid: dev.product_id(),
                    device_path: path,
                    serial: dev.serial_number().map(str::to_owned),
                    product_name: dev.product_string().map(str::to_owned),
                },
            });
        }

        Ok(devices)
    }

    /// Open a specific device
    pub fn open_device(
        &self,
        device: &DiscoveredDevice,
    ) -> Result<Arc<dyn Transport>, TransportError> {
        let api = HidApi::new()?;
        let path = std::ffi::CString::new(device.info.device_path.clone())
            .map_err(|e| TransportError::DeviceNotFound(e.to_string()))?;
        let hid = api.open_path(&path)?;

        info!(
            "Opened panel {:04x}:{:04x} ({})",
            device.info.vid,
            device.info.pid,
            device.info.product_name.as_deref().unwrap_or("unknown")
        );

        let transport: Arc<dyn Transport> =
            Arc::new(HidPanelTransport::new(hid, device.info.clone()));

        Ok(match &self.printer_config {
            Some(config) => PrinterTransport::wrap(transport, config.clone()),
            None => transport,
        })
    }

    /// Open the first connected panel
    pub fn open_first(&self) -> Result<Arc<dyn Transport>, TransportError> {
        let devices = self.list_devices()?;
        let first = devices.first().ok_or_else(|| {
            TransportError::DeviceNotFound(format!(
                "No BeoSound 5 panel found ({:04x}:{:04x})",
                device_registry::VENDOR_ID,
                device_registry::PRODUCT_ID
            ))
        })?;
        self.open_device(first)
    }
}
