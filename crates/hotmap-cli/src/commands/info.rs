use anyhow::{Context, Result};
use clap::Args;
use hotmap_core::source::HotspotSource;

use crate::summary::print_catalog_summary;

#[derive(Args)]
pub struct InfoArgs {
    /// Hotspot data file or http(s) URL
    pub data: String,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let source = HotspotSource::parse(&args.data);
    let catalog = source
        .load()
        .with_context(|| format!("Failed to load hotspot data from {source}"))?;

    print_catalog_summary(&source, &catalog);
    Ok(())
}
