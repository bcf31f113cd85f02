use anyhow::{bail, Context, Result};
use clap::Args;
use hotmap_core::consts::MARKER_SIZE;
use hotmap_core::layout::ImageSize;
use hotmap_core::render::MarkerLayer;
use hotmap_core::source::HotspotSource;

#[derive(Args)]
pub struct LayoutArgs {
    /// Hotspot data file or http(s) URL
    pub data: String,

    /// Rendered image width in pixels
    #[arg(long)]
    pub width: f32,

    /// Rendered image height in pixels
    #[arg(long)]
    pub height: f32,

    /// Marker edge length in pixels
    #[arg(long, default_value_t = MARKER_SIZE)]
    pub marker_size: f32,
}

pub fn run(args: &LayoutArgs) -> Result<()> {
    let size = ImageSize::new(args.width, args.height);
    if size.is_empty() {
        bail!("Image size must be positive, got {}x{}", args.width, args.height);
    }

    let source = HotspotSource::parse(&args.data);
    let catalog = source
        .load()
        .with_context(|| format!("Failed to load hotspot data from {source}"))?;

    let mut layer = MarkerLayer::new(args.marker_size);
    layer.rebuild(&catalog, size);

    if layer.is_empty() {
        println!("No hotspot data to display.");
        return Ok(());
    }

    println!(
        "{:<16} {:>10} {:>10} {:>10} {:>10}",
        "id", "center x", "center y", "left", "top"
    );
    for marker in layer.markers() {
        println!(
            "{:<16} {:>10.1} {:>10.1} {:>10.1} {:>10.1}",
            marker.hotspot_id, marker.center.x, marker.center.y, marker.rect.x, marker.rect.y
        );
    }
    Ok(())
}
