//! BeoSound 5 Linux Driver CLI
//!
//! Controls the panel's screen and indicator LED and forwards its input to a
//! virtual input device.

use clap::Parser;
use tracing::info;

use beosound5::{DriverConfig, StatusStore};

// CLI definitions
mod cli;
use cli::{Cli, Commands};

// Command handlers
mod commands;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.clone().unwrap_or_else(DriverConfig::default_path);
    let store = StatusStore::beside(&config_path);
    let load_config = || -> anyhow::Result<DriverConfig> {
        info!("Loading config from {:?}", config_path);
        DriverConfig::load(&config_path)
    };

    // Create printer config if monitoring is enabled
    let printer_config =
        commands::create_printer_config(cli.monitor, cli.hex, cli.filter.as_deref())?;

    match cli.command {
        None | Some(Commands::List) => commands::utility::list()?,
        Some(Commands::InitConfig { force }) => {
            commands::utility::init_config(&config_path, force)?;
        }

        // === Output Commands ===
        Some(Commands::Screen { state }) => {
            commands::status::screen(&load_config()?, &store, state.is_on(), printer_config)?;
        }
        Some(Commands::Indicator { mode }) => {
            commands::status::indicator(&load_config()?, &store, mode, printer_config)?;
        }
        Some(Commands::Led { name, brightness }) => {
            commands::status::led(&load_config()?, &store, &name, brightness, printer_config)?;
        }

        // === Input Commands ===
        Some(Commands::Watch { json }) => {
            commands::input::watch(&load_config()?, json, printer_config)?;
        }
        Some(Commands::Run) => {
            commands::input::run(&load_config()?, &store, printer_config)?;
        }
    }

    Ok(())
}
