//! CLI interface for lot-sizer
//!
//! Provides subcommands for:
//! - `size`: Lot size for a risk budget and stop distance
//! - `symbols`: List catalog symbols
//! - `show`: Print one instrument spec
//! - `validate`: Check the instrument catalog
//! - `config`: Show configuration

mod show;
mod size;

pub use show::ShowArgs;
pub use size::{OutputFormat, SizeArgs};

use clap::{Parser, Subcommand};

use crate::instrument::InstrumentCatalog;

#[derive(Parser, Debug)]
#[command(name = "lot-sizer")]
#[command(about = "Risk-based lot sizing against instrument trading constraints")]
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
    /// Lot size for a risk budget and stop distance
    Size(SizeArgs),
    /// List catalog symbols in configuration order
    Symbols,
    /// Print one instrument spec
    Show(ShowArgs),
    /// Check every instrument spec for consistency
    Validate,
    /// Show configuration
    Config,
}

/// Print catalog symbols, one per line
pub fn print_symbols(catalog: &InstrumentCatalog) {
    for symbol in catalog.list_symbols() {
        println!("{symbol}");
    }
}

/// Run catalog validation and report the outcome
pub fn run_validate(catalog: &InstrumentCatalog) -> anyhow::Result<()> {
    catalog.validate()?;
    println!("{} instruments OK", catalog.len());
    Ok(())
}
