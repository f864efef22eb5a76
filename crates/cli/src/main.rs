// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! gw - global workflow operational tools

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{post, setup_expt};
use std::process::ExitCode;

use crate::error::GwError;

#[derive(Parser)]
#[command(
    name = "gw",
    version,
    about = "Global workflow tools - experiment setup and post-processing"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create COMROT and EXPDIR for a new experiment
    #[command(name = "setup-expt", alias = "setup_expt")]
    SetupExpt(setup_expt::SetupExptArgs),
    /// Run UPP for one forecast hour
    Post(post::JobArgs),
    /// Send product generation alerts
    Prdgen(post::JobArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprint!("{}", GwError::from_anyhow(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::SetupExpt(args) => setup_expt::setup_expt(args).await,
        Commands::Post(args) => post::post(args).await,
        Commands::Prdgen(args) => post::prdgen(args).await,
    }
}

/// Log to stderr so stdout stays operator output
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
