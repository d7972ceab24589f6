//! Command handlers for the CLI application.
//!
//! - `status`: output commands (screen, indicator, led)
//! - `input`: input commands (watch, run)
//! - `utility`: list, init-config

pub mod input;
pub mod status;
pub mod utility;

use beosound_panel::{Panel, StatusByte};
use beosound_transport::{PacketFilter, PrinterConfig};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result type for command handlers
pub type CommandResult = anyhow::Result<()>;

/// Open the first panel starting from `status`, wrapping the transport for
/// monitoring if requested
pub fn open_panel(
    status: StatusByte,
    printer_config: Option<PrinterConfig>,
) -> anyhow::Result<Panel> {
    Ok(beosound_panel::open_panel(printer_config, status)?)
}

/// Set up a Ctrl-C handler that sets the given flag to false when triggered.
/// Returns the Arc<AtomicBool> for use in the main loop.
pub fn setup_interrupt_handler() -> Arc<AtomicBool> {
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = Arc::clone(&running);

    if let Err(e) = ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    }) {
        tracing::warn!("Could not install Ctrl-C handler: {e}");
    }

    running
}

/// Create printer config from CLI flags
pub fn create_printer_config(
    monitor: bool,
    hex: bool,
    filter: Option<&str>,
) -> anyhow::Result<Option<PrinterConfig>> {
    if !monitor {
        return Ok(None);
    }

    let filter = match filter {
        Some(f) => f.parse::<PacketFilter>().map_err(anyhow::Error::msg)?,
        None => PacketFilter::All,
    };

    Ok(Some(
        PrinterConfig::default().with_hex(hex).with_filter(filter),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printer_config_disabled() {
        assert!(create_printer_config(false, true, Some("reports"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_printer_config_filter() {
        let config = create_printer_config(true, true, Some("commands"))
            .unwrap()
            .unwrap();
        assert!(config.show_hex);
        assert_eq!(config.filter, PacketFilter::Commands);
        assert!(create_printer_config(true, false, Some("nope")).is_err());
    }
}
