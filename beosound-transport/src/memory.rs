//! In-memory transport
//!
//! Records every command sent and replays queued input reports. Used by the
//! panel and driver tests in place of a real device.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::error::TransportError;
use crate::protocol::OutgoingCommand;
use crate::types::TransportDeviceInfo;
use crate::{device_registry, Transport};

/// Transport backed by in-memory queues
pub struct MemoryTransport {
    info: TransportDeviceInfo,
    sent: Mutex<Vec<OutgoingCommand>>,
    reports: Mutex<VecDeque<Vec<u8>>>,
    fail_sends: AtomicBool,
}

impl Default for MemoryTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self {
            info: TransportDeviceInfo {
                vid: device_registry::VENDOR_ID,
                pid: device_registry::PRODUCT_ID,
                device_path: "memory".to_string(),
                serial: None,
                product_name: Some("BeoSound 5 (memory)".to_string()),
            },
            sent: Mutex::new(Vec::new()),
            reports: Mutex::new(VecDeque::new()),
            fail_sends: AtomicBool::new(false),
        }
    }

    /// Queue an input report to be returned by the next `read_report`
    pub fn push_report(&self, report: &[u8]) {
        self.reports.lock().push_back(report.to_vec());
    }

    /// Make subsequent sends fail (or succeed again)
    pub fn set_fail_sends(&self, fail: bool) {
        self.fail_sends.store(fail, Ordering::SeqCst);
    }

    /// Status bytes of every command accepted so far, in order
    pub fn sent_statuses(&self) -> Vec<u8> {
        self.sent.lock().iter().map(OutgoingCommand::status).collect()
    }

    /// Every command accepted so far, in order
    pub fn sent_commands(&self) -> Vec<OutgoingCommand> {
        self.sent.lock().clone()
    }
}

impl Transport for MemoryTransport {
    fn send_command(&self, cmd: &OutgoingCommand) -> Result<(), TransportError> {
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(TransportError::Disconnected);
        }
        self.sent.lock().push(*cmd);
        Ok(())
    }

    fn read_report(&self, _timeout_ms: i32) -> Result<Option<Vec<u8>>, TransportError> {
        Ok(self.reports.lock().pop_front())
    }

    fn device_info(&self) -> &TransportDeviceInfo {
        &self.info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_sends_in_order() {
        let transport = MemoryTransport::new();
        transport.send_command(&OutgoingCommand::new(0x40)).unwrap();
        transport.send_command(&OutgoingCommand::new(0x50)).unwrap();
        assert_eq!(transport.sent_statuses(), vec![0x40, 0x50]);
    }

    #[test]
    fn test_failed_send_not_recorded() {
        let transport = MemoryTransport::new();
        transport.set_fail_sends(true);
        assert!(transport.send_command(&OutgoingCommand::new(0x40)).is_err());
        assert!(transport.sent_statuses().is_empty());
    }

    #[test]
    fn test_reports_replayed_fifo() {
        let transport = MemoryTransport::new();
        transport.push_report(&[1, 2, 3, 4, 5, 6]);
        transport.push_report(&[7]);
        assert_eq!(transport.read_report(0).unwrap(), Some(vec![1, 2, 3, 4, 5, 6]));
        assert_eq!(transport.read_report(0).unwrap(), Some(vec![7]));
        assert_eq!(transport.read_report(0).unwrap(), None);
    }
}
