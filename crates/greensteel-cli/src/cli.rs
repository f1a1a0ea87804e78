//! CLI definition using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use greensteel_types::OutputFormat;

#[derive(Parser)]
#[command(name = "greensteel")]
#[command(version)]
#[command(about = "Project green steel production cost per ton and the subsidy needed to reach the traditional price")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json, report). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output (debug logging on stderr)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Where the scenario parameters come from
#[derive(Args, Debug, Clone)]
pub struct ScenarioArgs {
    /// Scenario TOML file. Uses the configured default, then built-in defaults.
    pub scenario: Option<PathBuf>,

    /// CSV price table overriding the scenario's price lists
    #[arg(long, short = 'p')]
    pub prices: Option<PathBuf>,

    /// Replace one resource's prices, e.g. --price hydrogen=10,9,9,8 (repeatable)
    #[arg(long = "price", value_name = "RESOURCE=PRICES")]
    pub price_lists: Vec<String>,

    /// Year index at which the required subsidy is evaluated
    #[arg(long, short = 't')]
    pub target_year: Option<usize>,

    /// Traditional steel price per ton
    #[arg(long)]
    pub traditional_price: Option<f64>,

    /// Tons produced per year
    #[arg(long)]
    pub production: Option<f64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a cost projection
    Project {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Export the projection to an Excel workbook
        #[arg(long, short = 'o')]
        export: Option<PathBuf>,

        /// Export the yearly projection to CSV
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Write the chart description as JSON
        #[arg(long)]
        chart: Option<PathBuf>,
    },

    /// Validate a scenario without printing the projection
    Check {
        #[command(flatten)]
        scenario: ScenarioArgs,
    },

    /// Write the built-in default scenario to a TOML file
    Init {
        /// Output path
        #[arg(default_value = "scenario.toml")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set currency symbol
        #[arg(long)]
        set_currency: Option<String>,

        /// Set default scenario file
        #[arg(long)]
        set_scenario: Option<PathBuf>,

        /// Forget the default scenario file
        #[arg(long)]
        clear_scenario: bool,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}
