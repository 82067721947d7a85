//! TajiCart CLI - Threshold management and quote simulation tools.
//!
//! # Usage
//!
//! ```bash
//! # Print the default tier threshold configuration
//! taji-cli thresholds defaults
//!
//! # Validate a threshold configuration file
//! taji-cli thresholds validate thresholds.json
//!
//! # Simulate a checkout quote from a scenario file
//! taji-cli quote scenario.json
//!
//! # Mint a demo loyalty card number for seed data
//! taji-cli card mint
//! ```
//!
//! # Commands
//!
//! - `thresholds` - Inspect and validate tier threshold configurations
//! - `quote` - Run a checkout scenario through the real pricing pipeline
//! - `card` - Seed-data helpers for loyalty cards

#![cfg_attr(not(test), forbid(unsafe_code))]
// A CLI's job is to print
#![allow(clippy::print_stdout)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "taji-cli")]
#[command(author, version, about = "TajiCart CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and validate tier threshold configurations
    Thresholds {
        #[command(subcommand)]
        action: ThresholdsAction,
    },
    /// Simulate a checkout quote from a scenario file
    Quote {
        /// Path to a JSON scenario (account, cart lines, reward, toggles)
        file: PathBuf,
    },
    /// Seed-data helpers for loyalty cards
    Card {
        #[command(subcommand)]
        action: CardAction,
    },
}

#[derive(Subcommand)]
enum ThresholdsAction {
    /// Print the default configuration as JSON
    Defaults,
    /// Validate a configuration file
    Validate {
        /// Path to a JSON threshold configuration
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum CardAction {
    /// Mint a demo card number
    Mint,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Thresholds { action } => match action {
            ThresholdsAction::Defaults => commands::thresholds::defaults()?,
            ThresholdsAction::Validate { file } => commands::thresholds::validate(&file)?,
        },
        Commands::Quote { file } => commands::quote::simulate(&file)?,
        Commands::Card { action } => match action {
            CardAction::Mint => commands::card::mint(),
        },
    }
    Ok(())
}
