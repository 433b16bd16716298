//! CLI interface for bingx-monitor
//!
//! Provides subcommands for:
//! - `run`: Start the crossover monitor
//! - `check`: Verify the configuration is filled in
//! - `quote`: One-shot price fetch for the configured pairs
//! - `config`: Show current configuration

mod check;
mod quote;
mod run;

pub use check::CheckArgs;
pub use quote::QuoteArgs;
pub use run::RunArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bingx-monitor")]
#[command(about = "SMA crossover alert bot for BingX spot pairs")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the crossover monitor
    Run(RunArgs),
    /// Verify the configuration is filled in
    Check(CheckArgs),
    /// Fetch current prices once and exit
    Quote(QuoteArgs),
    /// Show current configuration
    Config,
}
