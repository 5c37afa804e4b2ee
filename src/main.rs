mod app;
mod catalog;
mod content;
mod logging;
mod session;
mod util;

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use app::{Location, ShellOptions};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Start location, e.g. `/`, `/projects` or `/#skills`.
    #[arg(long, default_value = "/")]
    location: Location,
    /// Load the project catalog from this JSON file instead of the built-in one.
    #[arg(long)]
    projects: Option<PathBuf>,
    /// Particle RNG seed; time-derived when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Tracing filter directive; falls back to DEVFOLIO_LOG, then `info`.
    #[arg(long)]
    log: Option<String>,
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.log.as_deref())?;

    let catalog = catalog::load_catalog(args.projects.as_deref())?;
    let options = ShellOptions {
        start: args.location,
        seed: args.seed.unwrap_or_else(time_seed),
    };
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        content::OWNER_NAME,
        native_options,
        Box::new(move |cc| Ok(Box::new(app::PortfolioApp::new(cc, options, catalog)))),
    )
    .map_err(|error| anyhow!("{error}"))
    .context("window event loop failed")
}
