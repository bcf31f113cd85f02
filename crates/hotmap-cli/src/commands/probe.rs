use anyhow::{bail, Context, Result};
use clap::Args;
use hotmap_core::config::Labels;
use hotmap_core::consts::MARKER_SIZE;
use hotmap_core::layout::{ImageSize, PixelPoint};
use hotmap_core::readout::Readout;
use hotmap_core::render::MarkerLayer;
use hotmap_core::sanitize::to_plain_text;
use hotmap_core::source::HotspotSource;

#[derive(Args)]
pub struct ProbeArgs {
    /// Hotspot data file or http(s) URL
    pub data: String,

    /// Rendered image width in pixels
    #[arg(long)]
    pub width: f32,

    /// Rendered image height in pixels
    #[arg(long)]
    pub height: f32,

    /// Pointer x, relative to the image's left edge
    #[arg(short)]
    pub x: f32,

    /// Pointer y, relative to the image's top edge
    #[arg(short)]
    pub y: f32,
}

pub fn run(args: &ProbeArgs) -> Result<()> {
    let size = ImageSize::new(args.width, args.height);
    if size.is_empty() {
        bail!("Image size must be positive, got {}x{}", args.width, args.height);
    }

    let source = HotspotSource::parse(&args.data);
    let catalog = source
        .load()
        .with_context(|| format!("Failed to load hotspot data from {source}"))?;

    let mut layer = MarkerLayer::new(MARKER_SIZE);
    layer.rebuild(&catalog, size);

    let point = PixelPoint::new(args.x, args.y);
    println!("{}", Readout::at(point, size).text(&Labels::default()));

    match layer.hit_test(point).and_then(|m| catalog.get(&m.hotspot_id)) {
        Some(record) => {
            println!("Hotspot:     {}", record.id);
            println!("Location:    {}", to_plain_text(&record.location));
            println!("Description: {}", to_plain_text(&record.description));
        }
        None => println!("No hotspot at this position"),
    }
    Ok(())
}
