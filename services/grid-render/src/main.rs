//! Grid rendering CLI.
//!
//! Loads ESRI ASCII grids and a colour scale, then writes a PNG of a map
//! overlay, a radial overlay, a vertical cross-section or contour bands.

mod commands;
mod config;
mod surface;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use config::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let builder = FmtSubscriber::builder()
        .with_max_level(cli.level())
        .with_target(true)
        .with_writer(std::io::stderr);

    if cli.log_json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }

    info!(command = cli.command.name(), "Starting grid-render");

    commands::run(&cli.command)
}
