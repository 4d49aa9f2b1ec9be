//! # Recorder Dashboard - Main Entry Point
//!
//! Polls the co-located recorder service once per refresh interval and
//! repaints the room and host-gauge tables in place. Fail-fast by design:
//! any transport or schema error aborts the process with a full report.

use chrono::Local;
use clap::Parser;
use color_eyre::Result;
use recorder_dashboard::{client::InfoClient, config, config::Config, display, host::HostMonitor, model};
use std::{io, thread};
use tracing::info;

#[derive(Parser)]
#[command(name = "recorder-dashboard")]
#[command(about = "Terminal status dashboard for a live-stream recording pipeline")]
#[command(version)]
struct Cli {
    /// Status endpoint of the co-located recorder service
    #[arg(long, env = "RECORDER_DASHBOARD_ENDPOINT", default_value = config::DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Refresh interval (e.g. "1s", "500ms")
    #[arg(long, default_value = "1s")]
    interval: String,

    /// Render a single frame and exit
    #[arg(long)]
    once: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Frames own stdout, so diagnostics go to stderr.
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(format!("recorder_dashboard={log_level}"))
        .with_writer(io::stderr)
        .init();

    color_eyre::install()?;

    let interval = humantime::parse_duration(&cli.interval)
        .map_err(|e| eyre::eyre!("invalid interval '{}': {}", cli.interval, e))?;
    let config = Config::new(&cli.endpoint, interval, cli.once)?;

    info!("polling {} every {:?}", config.endpoint, config.interval);
    run(config)
}

fn run(config: Config) -> Result<()> {
    let client = InfoClient::new(config.endpoint.clone());
    let mut monitor = HostMonitor::new();
    let mut stdout = io::stdout();

    loop {
        let mut records = client.fetch_rooms()?;
        model::sort_records(&mut records);

        let now = Local::now();
        let gauges = monitor.sample(now);
        display::paint(&mut stdout, now, &records, &gauges)?;

        if config.once {
            return Ok(());
        }
        thread::sleep(config.interval);
    }
}
