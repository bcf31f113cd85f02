use crate::config::Labels;
use crate::layout::{to_percent, ImageSize, PercentPoint, PixelPoint};

/// Live pointer position over the base image.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Readout {
    /// Pointer is not over the image.
    #[default]
    Placeholder,
    At(PercentPoint),
}

impl Readout {
    /// Readout for a pointer at `pointer`, relative to the image's top-left corner.
    pub fn at(pointer: PixelPoint, size: ImageSize) -> Self {
        to_percent(pointer, size).map_or(Self::Placeholder, Self::At)
    }

    pub fn text(&self, labels: &Labels) -> String {
        match self {
            Self::Placeholder => labels.readout_placeholder.clone(),
            Self::At(p) => format_percent(*p),
        }
    }
}

pub fn format_percent(p: PercentPoint) -> String {
    format!("X: {:.2}%, Y: {:.2}%", p.x, p.y)
}
