//! Utility command handlers.

use super::CommandResult;
use beosound5::DriverConfig;
use beosound_panel::list_panels;
use beosound_transport::{PRODUCT_ID, VENDOR_ID};
use std::path::Path;

/// List connected panels
pub fn list() -> CommandResult {
    let panels = list_panels()?;
    if panels.is_empty() {
        println!("No BeoSound 5 panels found ({VENDOR_ID:04x}:{PRODUCT_ID:04x})");
        return Ok(());
    }

    println!("BeoSound 5 panels:");
    for panel in panels {
        let info = panel.info;
        println!(
            "  VID={:04x} PID={:04x} name={} serial={} path={}",
            info.vid,
            info.pid,
            info.product_name.as_deref().unwrap_or("-"),
            info.serial.as_deref().unwrap_or("-"),
            info.device_path,
        );
    }
    Ok(())
}

/// Write the default config file
pub fn init_config(path: &Path, force: bool) -> CommandResult {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    DriverConfig::default().save(path)?;
    println!("Wrote {}", path.display());
    Ok(())
}
