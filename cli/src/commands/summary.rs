use std::io::Write;

use anyhow::Result;
use roadgrade::{aggregate_with, SubKeyNaming, ViewConfig};

use crate::cli::SummaryArgs;

pub fn run(config: &ViewConfig, args: &SummaryArgs, out: &mut impl Write) -> Result<()> {
    let naming = if args.namespaced { SubKeyNaming::Namespaced } else { config.sub_key_naming };
    let roads = crate::read_roads(&args.roads, config)?;

    let table = aggregate_with(&roads, naming);
    write!(out, "{table}")?;
    Ok(())
}
