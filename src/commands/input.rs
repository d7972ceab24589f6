//! Input command handlers (watch, run).

use super::{open_panel, setup_interrupt_handler, CommandResult};
use beosound5::{forward, DriverConfig, StatusStore, VirtualPanel};
use beosound_panel::{EventSink, InputEventSet, Panel, PanelError};
use beosound_transport::PrinterConfig;
use tracing::info;

/// Sink that prints every event set to stdout
struct StdoutSink {
    json: bool,
}

impl EventSink for StdoutSink {
    fn emit(&mut self, events: &InputEventSet) -> Result<(), PanelError> {
        if self.json {
            let line =
                serde_json::to_string(events).map_err(|e| PanelError::Sink(e.to_string()))?;
            println!("{line}");
        } else {
            let b = &events.buttons;
            println!(
                "laser={:3} sel={:+4} sec={:+4} buttons=[{}{}{}{}]",
                events.laser,
                events.selection_wheel,
                events.secondary_wheel,
                if b.left { 'L' } else { '-' },
                if b.right { 'R' } else { '-' },
                if b.go { 'G' } else { '-' },
                if b.power { 'P' } else { '-' },
            );
        }
        Ok(())
    }
}

/// Print decoded input reports until Ctrl-C
pub fn watch(
    config: &DriverConfig,
    json: bool,
    printer_config: Option<PrinterConfig>,
) -> CommandResult {
    let panel = open_panel(config.initial_status(), printer_config)?;
    let running = setup_interrupt_handler();

    if !json {
        println!("Watching input. Ctrl+C to stop.");
    }
    let mut sink = StdoutSink { json };
    forward::run(&panel, &mut sink, &running, config.read_timeout_ms)?;
    Ok(())
}

/// Apply the configured status and forward input to a virtual device until Ctrl-C
pub fn run(
    config: &DriverConfig,
    store: &StatusStore,
    printer_config: Option<PrinterConfig>,
) -> CommandResult {
    let panel = open_panel(config.initial_status(), printer_config)?;
    let info = panel.device_info();
    info!(
        "Connected to panel: {} ({:04x}:{:04x})",
        info.product_name.as_deref().unwrap_or("Unknown"),
        info.vid,
        info.pid
    );

    store.apply(&panel, Panel::start)?;

    let mut device = VirtualPanel::new(&config.device_name, config.invert_wheels)?;
    info!("Created virtual input device: {}", config.device_name);
    if let Some(path) = device.device_path() {
        info!("Device path: {}", path.display());
    }

    let running = setup_interrupt_handler();
    let stats = forward::run(&panel, &mut device, &running, config.read_timeout_ms)?;
    info!(
        "Session ended ({} reports forwarded, {} dropped)",
        stats.delivered, stats.dropped
    );
    Ok(())
}
