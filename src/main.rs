//! vrui - layout inspector for 3D UI panels
//!
//! Loads a TOML UI description and either prints the computed layout tree
//! or replays a pointer at a pixel and prints the events it fires.

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::UiConfig;
use std::path::PathBuf;
use tracing::info;
use vrui_input::PointerDispatcher;
use vrui_testkit::{canonical_json, EventLog, JsonlSink};

#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect vrui layouts and pointer events", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the computed layout tree of one page as JSON
    Layout {
        /// UI description file
        #[arg(long)]
        config: PathBuf,
        /// Page index
        #[arg(long, default_value_t = 0)]
        page: usize,
    },
    /// Aim the mouse at a pixel and print every fired event as JSON lines
    Pick {
        /// UI description file
        #[arg(long)]
        config: PathBuf,
        /// Cursor x in window pixels
        #[arg(long)]
        x: f64,
        /// Cursor y in window pixels
        #[arg(long)]
        y: f64,
        /// Hold the button on every tick but the last
        #[arg(long)]
        press: bool,
        /// Number of ticks to dispatch
        #[arg(long, default_value_t = 2)]
        ticks: u64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    info!("Starting vrui v{}", env!("CARGO_PKG_VERSION"));

    match Args::parse().command {
        Command::Layout { config, page } => layout(&UiConfig::load_from_path(&config)?, page),
        Command::Pick {
            config,
            x,
            y,
            press,
            ticks,
        } => pick(&UiConfig::load_from_path(&config)?, (x, y), press, ticks),
    }
}

fn layout(config: &UiConfig, page: usize) -> Result<()> {
    let manager = config.build_manager()?;
    let page = manager
        .page(page)
        .with_context(|| format!("No page {page}; the config has {}", manager.page_count()))?;
    print!("{}", canonical_json(&page.snapshot())?);
    Ok(())
}

fn pick(config: &UiConfig, cursor: (f64, f64), press: bool, ticks: u64) -> Result<()> {
    let mut manager = config.build_manager()?;
    let log = EventLog::new();
    for index in 0..manager.page_count() {
        if let Some(page) = manager.page_mut(index) {
            log.attach_page(page);
        }
    }

    let mut pointer = PointerDispatcher::new(config.camera.camera(), config.camera.viewport());
    pointer.enable_mouse();
    pointer.on_cursor_moved(cursor.0, cursor.1);
    info!(x = cursor.0, y = cursor.1, ticks, press, "dispatching pointer");

    let mut sink = JsonlSink::stdout();
    for tick in 0..ticks {
        log.set_tick(tick);
        pointer.set_pressed(press && tick + 1 < ticks);
        let hit = pointer.update(&mut manager);
        info!(tick, hit = hit.is_some(), "tick dispatched");
        sink.write_all(&log.take())?;
    }
    Ok(())
}
