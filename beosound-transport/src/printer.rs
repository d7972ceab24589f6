//! PrinterTransport middleware for monitoring transport traffic
//!
//! Wraps any [`Transport`] and logs every status command and input report
//! passing through it, decoded where possible.
//!
//! # Example
//!
//! ```ignore
//! use beosound_transport::{HidDiscovery, PrinterConfig, PrinterTransport};
//!
//! let transport = HidDiscovery::new().open_first()?;
//! let monitored = PrinterTransport::wrap(transport, PrinterConfig::default().with_hex(true));
//! ```

use std::str::FromStr;
use std::sync::Arc;

use tracing::info;

use crate::input_report::decode;
use crate::protocol::{status, OutgoingCommand};
use crate::{Transport, TransportDeviceInfo, TransportError};

/// Packet filter for selective display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PacketFilter {
    #[default]
    All,
    /// Only inbound input reports
    Reports,
    /// Only outbound status commands
    Commands,
}

impl FromStr for PacketFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" | "" => Ok(Self::All),
            "reports" | "report" | "input" => Ok(Self::Reports),
            "commands" | "cmd" | "cmds" | "status" => Ok(Self::Commands),
            _ => Err(format!("Unknown filter: {}", s)),
        }
    }
}

/// Configuration for the PrinterTransport
#[derive(Debug, Clone, Default)]
pub struct PrinterConfig {
    /// Show raw hex dump alongside decoded output
    pub show_hex: bool,
    /// Filter for selective display
    pub filter: PacketFilter,
}

impl PrinterConfig {
    /// Create config with hex output setting
    pub fn with_hex(mut self, show: bool) -> Self {
        self.show_hex = show;
        self
    }

    /// Create config with filter
    pub fn with_filter(mut self, filter: PacketFilter) -> Self {
        self.filter = filter;
        self
    }

    fn shows_commands(&self) -> bool {
        matches!(self.filter, PacketFilter::All | PacketFilter::Commands)
    }

    fn shows_reports(&self) -> bool {
        matches!(self.filter, PacketFilter::All | PacketFilter::Reports)
    }
}

/// Transport middleware that logs all commands and reports
pub struct PrinterTransport {
    inner: Arc<dyn Transport>,
    config: PrinterConfig,
}

impl PrinterTransport {
    /// Wrap a transport with printing middleware
    pub fn wrap(transport: Arc<dyn Transport>, config: PrinterConfig) -> Arc<dyn Transport> {
        Arc::new(Self {
            inner: transport,
            config,
        })
    }

    fn print_command(&self, cmd: &OutgoingCommand, result: &Result<(), TransportError>) {
        if !self.config.shows_commands() {
            return;
        }
        let outcome = match result {
            Ok(()) => "ok".to_string(),
            Err(e) => format!("failed: {e}"),
        };
        if self.config.show_hex {
            info!(
                ">> status {} [{:02X?}] {}",
                status::describe(cmd.status()),
                cmd.to_bytes(),
                outcome
            );
        } else {
            info!(">> status {} {}", status::describe(cmd.status()), outcome);
        }
    }

    fn print_report(&self, data: &[u8]) {
        if !self.config.shows_reports() {
            return;
        }
        let decoded = match decode(data) {
            Ok(events) => format!("{events:?}"),
            Err(e) => e.to_string(),
        };
        if self.config.show_hex {
            info!("<< report [{:02X?}] {}", data, decoded);
        } else {
            info!("<< report {}", decoded);
        }
    }
}

impl Transport for PrinterTransport {
    fn send_command(&self, cmd: &OutgoingCommand) -> Result<(), TransportError> {
        let result = self.inner.send_command(cmd);
        self.print_command(cmd, &result);
        result
    }

    fn read_report(&self, timeout_ms: i32) -> Result<Option<Vec<u8>>, TransportError> {
        let report = self.inner.read_report(timeout_ms)?;
        if let Some(ref data) = report {
            self.print_report(data);
        }
        Ok(report)
    }

    fn device_info(&self) -> &TransportDeviceInfo {
        self.inner.device_info()
    }
}
