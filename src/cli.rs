// CLI definitions using clap

use beosound_panel::IndicatorMode;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "beosound5")]
#[command(author, version, about = "Bang & Olufsen BeoSound 5 Linux Driver")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file path (default: ~/.config/beosound5/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Enable transport monitoring (logs all commands/reports)
    #[arg(long, global = true)]
    pub monitor: bool,

    /// Show raw hex dump alongside decoded monitor output
    #[arg(long, global = true)]
    pub hex: bool,

    /// Monitor filter (all, reports, commands)
    #[arg(long, global = true)]
    pub filter: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List connected panels
    #[command(visible_aliases = ["ls", "l"])]
    List,

    /// Turn the screen backlight on or off
    Screen {
        #[arg(value_enum)]
        state: Switch,
    },

    /// Set the indicator LED mode
    #[command(visible_alias = "ind")]
    Indicator {
        #[arg(value_parser = parse_indicator)]
        mode: IndicatorMode,
    },

    /// Set an LED by name and raw brightness (beosound5::backlight, beosound5::indicator)
    Led {
        /// LED name or short form (backlight, indicator)
        name: String,
        /// Brightness value (backlight 0-1, indicator 0-2; others are ignored)
        brightness: u32,
    },

    /// Print decoded input reports
    #[command(visible_alias = "w")]
    Watch {
        /// Print one JSON object per report
        #[arg(long)]
        json: bool,
    },

    /// Forward panel input to a virtual input device
    Run,

    /// Write the default config file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

impl Switch {
    pub fn is_on(self) -> bool {
        self == Switch::On
    }
}

fn parse_indicator(s: &str) -> Result<IndicatorMode, String> {
    s.parse()
}
