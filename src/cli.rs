//! CLI argument parsing for the medir demo driver

use clap::{Parser, ValueEnum};

/// Instrumentation scenario run by the demo driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// Default format with a selected variable and a "Starting" line
    Selected,
    /// Finish line only, no start, no variables
    Silent,
    /// Variadic sum with every extra positional rendered
    Variadic,
    /// Every declared parameter rendered, defaults included
    AllArgs,
    /// Custom message template interpolated from bound arguments
    CustomMessage,
}

#[derive(Parser, Debug)]
#[command(name = "medir")]
#[command(version)]
#[command(about = "Call instrumentation demo driver", long_about = None)]
pub struct Cli {
    /// Route instrumentation lines through the tracing subscriber instead
    /// of plain stdout
    #[arg(long)]
    pub tracing: bool,

    /// Enable debug output from medir itself
    #[arg(short, long)]
    pub debug: bool,

    /// Scenario to run (all scenarios when omitted)
    #[arg(value_enum)]
    pub scenario: Option<Scenario>,
}
