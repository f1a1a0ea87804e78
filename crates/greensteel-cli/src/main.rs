//! Greensteel - green steel production cost projection
//!
//! A CLI tool that projects per-ton production cost over a multi-year
//! horizon and reports when it reaches the traditional steel price.

mod cli;
mod commands;
mod logging;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
