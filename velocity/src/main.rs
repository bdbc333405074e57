//! # velocity
//!
//! Command-line host for the Velocity Bikes landing page.
//!
//! ## Usage
//!
//! ```bash
//! # Static page, guest viewer, to a file
//! velocity render --out index.html
//!
//! # Which identifier does the third stat card carry?
//! velocity resolve stat-card 2
//!
//! # Does .velocity/config.toml still fit the identifier tables?
//! velocity check
//! ```

mod cli;
mod commands;
mod config;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use cli::{Cli, Command};

fn run(cli: Cli) -> Result<()> {
    debug!(command = ?cli.command, "velocity starting");
    match cli.command {
        Command::Render(args) => commands::render(args),
        Command::Resolve { family, position } => commands::resolve(family, position),
        Command::Registry => commands::registry(),
        Command::Check(args) => commands::check(args),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the page or the query result
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[velocity] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
