//! Stitch a directory tree of images into a single grid image.
//!
//! Every subdirectory of the root becomes one column; its images are stacked
//! top to bottom in name order, and columns run left to right in path order.

mod config;
mod core;
mod error;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::StitchConfig;

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version,
    about = "Stitch folders of images into one grid, one column per folder",
    after_help = "Example: grid-stitch ./rootdir/ output.png"
)]
struct Cli {
    /// Directory whose subdirectories become columns.
    root: PathBuf,

    /// Output image; the format follows the extension (png, jpg, ...).
    output: PathBuf,
}

// ───────────────────────────────────────── main ─────────────

fn main() -> Result<()> {
    // Quiet unless RUST_LOG is set.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // stdout carries the status lines
        .init();

    let cli = Cli::parse();
    let config = StitchConfig::new(&cli.root, &cli.output)?;

    println!(
        "Building image using the provided information.\n- Directory: {}\n- Output: {}",
        config.root.display(),
        config.output.display()
    );

    let report = core::grid::build_image(&config)
        .with_context(|| format!("could not build image from {}", config.root.display()))?;

    println!(
        "Success. ({} columns, {} images, {}x{})",
        report.columns, report.images, report.width, report.height
    );
    Ok(())
}
