mod cli;
mod commands;
mod logging;

use anyhow::{Context, Result};
use roadgrade::{FeatureCollection, ViewConfig};

use cli::{Cli, Commands};
use commands::{dimensions, render, summary};

pub fn run() -> Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = load_config(&cli)?;
    let stdout = &mut std::io::stdout().lock();
    match &cli.command {
        Commands::Dimensions(args) => dimensions::run(&config, args, stdout),
        Commands::Summary(args) => summary::run(&config, args, stdout),
        Commands::Render(args) => render::run(&config, args, stdout),
    }
}

fn load_config(cli: &Cli) -> Result<ViewConfig> {
    match &cli.config {
        Some(path) => ViewConfig::from_json_file(path),
        None => Ok(ViewConfig::default()),
    }
}

/// Read the roads file named on the command line.
pub(crate) fn read_roads(path: &std::path::Path, config: &ViewConfig) -> Result<FeatureCollection> {
    let roads = FeatureCollection::from_geojson_file(path, &config.bundle_property)
        .with_context(|| format!("[roads] Failed to read {}", path.display()))?;
    tracing::info!(features = roads.len(), path = %path.display(), "loaded roads");
    Ok(roads)
}

fn main() -> Result<()> { run() }
