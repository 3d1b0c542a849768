//! Replays recorded vehicle drag sessions and prints the resulting park.
mod replay;
mod scenario;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use editor_core::EditorConfig;
use editor_tool::ToolConfig;
use tracing::info;

use crate::replay::replay;
use crate::scenario::Scenario;

#[derive(Parser)]
#[command(name = "drag-replay")]
#[command(about = "Replay a vehicle drag session against an in-memory park", long_about = None)]
#[command(version)]
struct Cli {
    /// Scenario file (JSON) with the map, park, selected car and tool events
    scenario: PathBuf,

    /// Override the multiplayer move throttle interval in ticks
    #[arg(long)]
    throttle_interval: Option<u64>,

    /// Print only the authoritative commands instead of the full report
    #[arg(long)]
    commands_only: bool,
}

fn main() -> Result<()> {
    // Load .env file if it exists (for DRAG_THROTTLE_INTERVAL)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ToolConfig::from_env()?;
    if let Some(interval) = cli.throttle_interval {
        config = ToolConfig::new(EditorConfig::with_throttle_interval(interval));
    }

    let scenario = Scenario::load(&cli.scenario)?;
    info!(
        events = scenario.events.len(),
        cars = scenario.park.cars.len(),
        "replaying {}",
        cli.scenario.display()
    );

    let report = replay(&scenario, &config)?;

    let json = if cli.commands_only {
        serde_json::to_string_pretty(&report.executed)
    } else {
        serde_json::to_string_pretty(&report)
    }
    .context("failed to serialize replay report")?;
    println!("{json}");

    Ok(())
}
