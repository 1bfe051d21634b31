use std::io::Write;

use anyhow::Result;
use roadgrade::{selector_options, DiscoveryPolicy, ViewConfig};

use crate::cli::{DimensionsArgs, Policy};

pub fn run(config: &ViewConfig, args: &DimensionsArgs, out: &mut impl Write) -> Result<()> {
    let policy = match args.policy {
        Some(Policy::SampleFirst) => DiscoveryPolicy::SampleFirst,
        Some(Policy::UnionAll) => DiscoveryPolicy::UnionAll,
        None => config.discovery,
    };
    let roads = crate::read_roads(&args.roads, config)?;

    let options = selector_options(&roads, policy);
    let subs = policy.sub_dimensions(&roads);
    if options.is_empty() {
        tracing::warn!("no evaluation dimensions found; every road will render as unknown");
    }

    writeln!(out, "dimensions: {}", options.join(", "))?;
    writeln!(out, "sub-dimensions: {}", subs.join(", "))?;
    Ok(())
}
