//! HID transport implementation for the panel's USB interface

use std::sync::Mutex;

use hidapi::HidDevice;
use tracing::debug;
use zerocopy::IntoBytes;

use crate::error::TransportError;
use crate::protocol::{OutgoingCommand, OUTPUT_REPORT_LEN};
use crate::types::TransportDeviceInfo;
use crate::Transport;

/// Largest input report we expect from the panel
const READ_BUFFER_SIZE: usize = 64;

/// HID transport for a USB-connected panel
///
/// Status commands go out as output reports on the same handle that input
/// reports are read from. The handle is locked per operation, so reads and
/// writes from different threads never interleave on the device.
pub struct HidPanelTransport {
    device: Mutex<HidDevice>,
    info: TransportDeviceInfo,
}

impl HidPanelTransport {
    /// Create a new transport from an opened HID device
    pub fn new(device: HidDevice, info: TransportDeviceInfo) -> Self {
        Self {
            device: Mutex::new(device),
            info,
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HidDevice>, TransportError> {
        self.device.lock().map_err(|_| TransportError::Disconnected)
    }
}

impl Transport for HidPanelTransport {
    fn send_command(&self, cmd: &OutgoingCommand) -> Result<(), TransportError> {
        let buf = cmd.as_bytes();
        debug!("Sending status 0x{:02X}: {:02X?}", cmd.status(), buf);

        let device = self.lock()?;
        let written = device.write(buf)?;
        if written < OUTPUT_REPORT_LEN {
            return Err(TransportError::ShortWrite {
                written,
                expected: OUTPUT_REPORT_LEN,
            });
        }
        Ok(())
    }

    fn read_report(&self, timeout_ms: i32) -> Result<Option<Vec<u8>>, TransportError> {
        let mut buf = [0u8; READ_BUFFER_SIZE];
        let len = {
            let device = self.lock()?;
            device.read_timeout(&mut buf, timeout_ms)?
        };

        if len == 0 {
            return Ok(None);
        }
        debug!("Input report ({} bytes): {:02X?}", len, &buf[..len]);
        Ok(Some(buf[..len].to_vec()))
    }

    fn device_info(&self) -> &TransportDeviceInfo {
        &self.info
    }
}

impl Drop for HidPanelTransport {
    fn drop(&mut self) {
        debug!("HidPanelTransport dropped ({})", self.info.device_path);
    }
}
