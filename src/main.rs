//! # Joystick Event Inspector
//!
//! Reads a JSON Lines log of joystick events and prints a readable summary
//! of each one.
//!
//! # Examples
//!
//! ```bash
//! joystick-event --config inspector.toml captured.jsonl
//! cat captured.jsonl | joystick-event --lenient
//! ```
//!
//! Expected output:
//! ```text
//! BUTTON_ACTION,cmd=fire,when=1000,modifiers=Shift
//! INFO joystick_event: Inspected 1 events (0 rejected)
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio::io::{self, AsyncBufRead, BufReader};
use tracing::{debug, info};

use joystick_event::config::Config;
use joystick_event::inspect::{inspect, InspectSummary};

/// Print readable summaries of joystick event logs.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Turn debugging information on
    #[arg(short, long)]
    verbose: bool,

    /// Keep events with undefined ids instead of rejecting them
    #[arg(long)]
    lenient: bool,

    /// Event log to read; stdin when omitted
    input: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    if cli.lenient {
        config.inspector.strict_codes = false;
    }

    // Initialize logging
    let level = if cli.verbose { "debug" } else { config.logging.level.as_str() };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();

    debug!("Joystick event inspector v{} starting", env!("CARGO_PKG_VERSION"));

    let reader: Box<dyn AsyncBufRead + Unpin + Send> = match &cli.input {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("Failed to open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };
    let mut stdout = io::stdout();

    tokio::select! {
        result = inspect(reader, &mut stdout, &config.inspector) => {
            let summary: InspectSummary = result?;
            info!("Inspected {} events ({} rejected)", summary.accepted, summary.rejected);
            for (kind, count) in &summary.by_kind {
                debug!("  {}: {}", kind, count);
            }
        }

        // Handle Ctrl+C for graceful shutdown
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, stopping inspection");
        }
    }

    Ok(())
}
