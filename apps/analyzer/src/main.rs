mod args;
mod config;
mod errors;
mod goals;
mod llm_client;
mod matcher;
mod models;
mod pacing;
mod pipeline;
mod report;
mod search_client;

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::args::Args;
use crate::config::Config;
use crate::pipeline::Pipeline;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    dotenvy::dotenv().ok(); // load .env if present; ignore if missing

    // The log is reset before anything else so every run starts with a fresh file.
    let rust_log = std::env::var("RUST_LOG").ok();
    init_debug_log(&args.log_file, rust_log.as_deref())?;
    info!("Starting decarb-analyzer v{}", env!("CARGO_PKG_VERSION"));

    // Missing keys are reported to the user and end the run without processing.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            println!("Error: {e}");
            println!("{}", e.remediation());
            return Ok(());
        }
    };

    let organizations = args.organizations()?;
    info!("Analyzing {} organizations", organizations.len());

    let pipeline = Pipeline::from_config(&config)?;
    pipeline
        .run(&organizations, &args.output)
        .await
        .with_context(|| format!("Failed to write report to '{}'", args.output.display()))?;

    Ok(())
}

/// Routes all tracing events to a fresh debug log file for this run.
fn init_debug_log(path: &Path, rust_log: Option<&str>) -> Result<()> {
    let file = create_debug_log(path)?;

    let filter = match rust_log {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("Invalid RUST_LOG filter '{directives}'"))?,
        None => EnvFilter::new(format!("{}=debug", env!("CARGO_CRATE_NAME"))),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();

    Ok(())
}

/// Creates the log file, truncating whatever a previous run left behind.
fn create_debug_log(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("Failed to create debug log '{}'", path.display()))
}
