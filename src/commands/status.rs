//! Output command handlers (screen backlight and indicator LED).
//!
//! Each invocation is its own session. It starts from the last status that
//! reached the panel (or the configured initial state if none is stored) and
//! applies the requested change on top of it.

use super::{open_panel, CommandResult};
use beosound5::{DriverConfig, StatusStore};
use beosound_panel::{IndicatorMode, LedTarget, Panel};
use beosound_transport::PrinterConfig;

fn open_session(
    config: &DriverConfig,
    store: &StatusStore,
    printer_config: Option<PrinterConfig>,
) -> anyhow::Result<Panel> {
    open_panel(store.seed(config.initial_status()), printer_config)
}

/// Turn the screen on or off
pub fn screen(
    config: &DriverConfig,
    store: &StatusStore,
    on: bool,
    printer_config: Option<PrinterConfig>,
) -> CommandResult {
    let panel = open_session(config, store, printer_config)?;
    let status = store.apply(&panel, |panel| panel.set_screen(on))?;
    println!("Status: {status}");
    Ok(())
}

/// Set the indicator mode
pub fn indicator(
    config: &DriverConfig,
    store: &StatusStore,
    mode: IndicatorMode,
    printer_config: Option<PrinterConfig>,
) -> CommandResult {
    let panel = open_session(config, store, printer_config)?;
    let status = store.apply(&panel, |panel| panel.set_indicator(mode))?;
    println!("Status: {status}");
    Ok(())
}

/// Set an LED by name and raw brightness
pub fn led(
    config: &DriverConfig,
    store: &StatusStore,
    name: &str,
    brightness: u32,
    printer_config: Option<PrinterConfig>,
) -> CommandResult {
    let target = LedTarget::from_name(name).ok_or_else(|| {
        let known: Vec<String> = LedTarget::ALL.iter().map(LedTarget::name).collect();
        anyhow::anyhow!("Unknown LED {name:?} (known: {})", known.join(", "))
    })?;

    if target == LedTarget::Indicator && brightness > target.max_brightness() {
        eprintln!(
            "Brightness {brightness} is above {} for {}; indicator left unchanged",
            target.max_brightness(),
            target.name()
        );
    }

    let panel = open_session(config, store, printer_config)?;
    let status = store.apply(&panel, |panel| panel.set_brightness(target, brightness))?;
    println!(
        "{}: brightness {} (status {})",
        target.name(),
        panel.encoder().brightness(target),
        status
    );
    Ok(())
}
