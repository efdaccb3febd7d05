#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod command;
mod config;

use std::process;

use anyhow::Context;
use gauge_server::service::ServiceState;

use crate::config::Cli;

// Tracing target constants
pub const TRACING_TARGET_STARTUP: &str = "gauge_cli::startup";
pub const TRACING_TARGET_CONFIG: &str = "gauge_cli::config";
pub const TRACING_TARGET_COMMAND: &str = "gauge_cli::command";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        let error = format!("{error:#}");
        tracing::error!(
            target: TRACING_TARGET_STARTUP,
            error = %error,
            "command failed"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    Cli::init_tracing();
    log_startup_info();
    cli.log();
    cli.validate()?;

    let state = ServiceState::from_config(&cli.service)
        .await
        .context("failed to create service state")?;

    let output = command::execute(&state, cli.command).await?;
    println!("{output}");

    Ok(())
}

/// Logs startup information.
fn log_startup_info() {
    tracing::debug!(
        target: TRACING_TARGET_STARTUP,
        version = env!("CARGO_PKG_VERSION"),
        pid = process::id(),
        features = ?enabled_features(),
        "starting gauge"
    );
}

/// Returns a list of enabled compile-time features.
fn enabled_features() -> Vec<&'static str> {
    [cfg!(feature = "dotenv").then_some("dotenv")]
        .into_iter()
        .flatten()
        .collect()
}
