// In src/main.rs

// Declare modules
pub mod color;
pub mod colormap;
pub mod config;
pub mod emitter;
pub mod generator;
pub mod palettes;
pub mod registry;

use crate::{config::GeneratorConfig, registry::Registry};

use anyhow::Context; // For context on Results
use log::info;

/// Main entry point for the `cmap-extract` generator.
fn main() -> anyhow::Result<()> {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("Starting cmap-extract...");

    // No CLI arguments and no environment switches: a single generation
    // pass with the default configuration.
    let config = GeneratorConfig::default();
    info!("Configuration loaded (using default).");

    let registry = Registry::assemble();
    info!("Registry assembled: {} colormaps.", registry.len());

    let summary =
        generator::run(&registry, &config).context("Colormap extraction failed")?;
    info!(
        "Extracted {} listed and {} mesh colormaps.",
        summary.listed.len(),
        summary.mesh.len()
    );

    Ok(())
}
