use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "trade-benefit")]
#[command(about = "Estimate the annual benefit of digitalising trade payments", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// State file to read and write instead of the platform config directory
    #[arg(long, value_name = "PATH", env = "TRADE_BENEFIT_STATE", global = true)]
    pub state_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute both payment scenarios for the current inputs
    Calculate {
        /// Read inputs from this JSON file instead of the saved state
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Print the effective input state as JSON
    Show,
    /// Update one input field, e.g. `set footprint.shipmentsPerYear 1200`
    Set {
        /// Field path as <record>.<field>
        path: String,
        value: String,
    },
    /// Add or remove an origin country code
    ToggleOrigin { iso: String },
    /// Forget the saved state and return to defaults
    Reset,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Summary,
}
