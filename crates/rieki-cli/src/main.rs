//! Rieki Checker - profit and shipping estimation for cross-border resale
//!
//! A CLI tool that picks the cheapest shipping method for a package and
//! computes the full US-marketplace fee/profit breakdown in USD and JPY.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
