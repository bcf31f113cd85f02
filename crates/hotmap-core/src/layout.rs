//! Percentage-to-pixel conversion against the rendered size of the base image.
//!
//! Percent coordinates are resolution independent; pixel positions are only
//! valid for the image size they were computed against, so callers recompute
//! them whenever the rendered size changes.

use crate::consts::TOOLTIP_GAP;
use crate::hotspot::HotspotRecord;

/// Rendered size of the base image in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ImageSize {
    pub width: f32,
    pub height: f32,
}

impl ImageSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Point in pixels, relative to the image's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PixelPoint {
    pub x: f32,
    pub y: f32,
}

impl PixelPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in image pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PixelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PixelRect {
    pub fn from_center(center: PixelPoint, width: f32, height: f32) -> Self {
        Self {
            x: center.x - width / 2.0,
            y: center.y - height / 2.0,
            width,
            height,
        }
    }

    pub fn center(&self) -> PixelPoint {
        PixelPoint::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, p: PixelPoint) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Point expressed as percentages of the image size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PercentPoint {
    pub x: f32,
    pub y: f32,
}

/// Pixel position of a percentage coordinate on an image of `size`.
pub fn to_pixels(x_percent: f32, y_percent: f32, size: ImageSize) -> PixelPoint {
    PixelPoint::new(x_percent / 100.0 * size.width, y_percent / 100.0 * size.height)
}

/// Inverse of [`to_pixels`]. `None` while the image has no area.
pub fn to_percent(point: PixelPoint, size: ImageSize) -> Option<PercentPoint> {
    if size.is_empty() {
        return None;
    }
    Some(PercentPoint {
        x: point.x / size.width * 100.0,
        y: point.y / size.height * 100.0,
    })
}

/// Pixel position of a hotspot on an image of `size`.
pub fn hotspot_position(record: &HotspotRecord, size: ImageSize) -> PixelPoint {
    to_pixels(record.x_percent, record.y_percent, size)
}

/// Square marker rect of edge `marker_size` centered on `center`.
pub fn marker_rect(center: PixelPoint, marker_size: f32) -> PixelRect {
    PixelRect::from_center(center, marker_size, marker_size)
}

/// Top-left corner for a tooltip of `tooltip` size next to `marker`.
///
/// Prefers the right side of the marker and flips to the left when it would
/// overflow; the result is clamped into `bounds` when the tooltip fits.
pub fn tooltip_anchor(marker: PixelRect, tooltip: ImageSize, bounds: ImageSize) -> PixelPoint {
    let mut x = marker.right() + TOOLTIP_GAP;
    if x + tooltip.width > bounds.width {
        x = marker.x - TOOLTIP_GAP - tooltip.width;
    }
    let mut y = marker.center().y - tooltip.height / 2.0;

    x = clamp_span(x, tooltip.width, bounds.width);
    y = clamp_span(y, tooltip.height, bounds.height);
    PixelPoint::new(x, y)
}

fn clamp_span(start: f32, len: f32, limit: f32) -> f32 {
    if len >= limit {
        0.0
    } else {
        start.clamp(0.0, limit - len)
    }
}
