use crate::hotspot::HotspotCatalog;
use crate::layout::{hotspot_position, marker_rect, ImageSize, PixelPoint, PixelRect};

/// One placed marker.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub hotspot_id: String,
    pub center: PixelPoint,
    pub rect: PixelRect,
}

/// The set of markers currently laid out over the image.
#[derive(Debug)]
pub struct MarkerLayer {
    markers: Vec<Marker>,
    marker_size: f32,
    /// Size the markers were laid out against.
    laid_out_for: Option<ImageSize>,
    /// Bumped on every rebuild.
    generation: u64,
}

impl MarkerLayer {
    pub fn new(marker_size: f32) -> Self {
        Self {
            markers: Vec::new(),
            marker_size,
            laid_out_for: None,
            generation: 0,
        }
    }

    /// Drop every marker and build one per record against `size`.
    pub fn rebuild(&mut self, catalog: &HotspotCatalog, size: ImageSize) {
        self.markers.clear();
        self.generation += 1;
        self.laid_out_for = Some(size);

        if catalog.is_empty() {
            tracing::debug!("no hotspot data to display");
            return;
        }

        self.markers.extend(catalog.records().iter().map(|record| {
            let center = hotspot_position(record, size);
            Marker {
                hotspot_id: record.id.clone(),
                center,
                rect: marker_rect(center, self.marker_size),
            }
        }));
        tracing::debug!(
            count = self.markers.len(),
            width = size.width,
            height = size.height,
            "hotspots laid out"
        );
    }

    pub fn clear(&mut self) {
        self.markers.clear();
        self.laid_out_for = None;
        self.generation += 1;
    }

    /// Topmost marker under `point`. Later markers are painted above earlier ones.
    pub fn hit_test(&self, point: PixelPoint) -> Option<&Marker> {
        self.markers.iter().rev().find(|m| m.rect.contains(point))
    }

    pub fn marker(&self, hotspot_id: &str) -> Option<&Marker> {
        self.markers.iter().find(|m| m.hotspot_id == hotspot_id)
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn marker_size(&self) -> f32 {
        self.marker_size
    }

    pub fn laid_out_for(&self) -> Option<ImageSize> {
        self.laid_out_for
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
