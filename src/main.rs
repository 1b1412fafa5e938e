use anyhow::{Context, Result};
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use zzmenu::core::config;
use zzmenu::tui;

#[derive(Parser)]
#[command(name = "zzmenu", about = "Menu browser for the terminal")]
struct Args {
    /// Path to open, as in a browser location (e.g. "/")
    #[arg(short, long)]
    path: Option<String>,

    /// Config file (default: ~/.zzmenu/config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - the terminal belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("zzmenu.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("zzmenu v{} starting up", env!("CARGO_PKG_VERSION"));

    // Without a terminal there is no run, so no default config gets generated
    if let Err(e) = tui::root::locate_mount_point() {
        log::error!("Fatal: {}", e);
        return Err(e).context("zzmenu stopped");
    }

    let file_config = config::load_config(args.config.as_deref()).context("failed to load config")?;
    let resolved = config::resolve(&file_config, args.path.as_deref()).context("failed to resolve config")?;

    if let Err(e) = tui::run(resolved) {
        log::error!("Fatal: {}", e);
        return Err(e).context("zzmenu stopped");
    }
    Ok(())
}
