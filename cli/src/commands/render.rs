use std::{fs::File, io::{BufWriter, Write}};

use anyhow::{Context, Result};
use roadgrade::{MemorySurface, RoadView, ViewConfig};

use crate::cli::RenderArgs;

pub fn run(config: &ViewConfig, args: &RenderArgs, out: &mut impl Write) -> Result<()> {
    let roads = crate::read_roads(&args.roads, config)?;
    let mut view = RoadView::new(MemorySurface::new(), roads, config.clone());

    if let Some(dimension) = &args.dimension {
        view.set_dimension(dimension);
    }
    if let Some(sub) = &args.sub {
        if !view.set_sub_dimension(sub) {
            tracing::warn!(
                sub = %sub,
                options = ?view.sub_dimension_options(),
                "sub-dimension not available for the selected dimension; ignored"
            );
        }
    }
    tracing::info!(
        dimension = view.selection().dimension(),
        sub_dimension = view.selection().sub_dimension().unwrap_or_default(),
        "rendering roads"
    );

    let geojson = view.surface().to_geojson();
    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("[render] Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, &geojson)?;
            writer.flush()?;
        }
        None => {
            serde_json::to_writer_pretty(&mut *out, &geojson)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
