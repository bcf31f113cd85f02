use crate::config::Labels;
use crate::error::{HotmapError, Result};

/// Cyclic index over a fixed list of zoom percentages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZoomCycle {
    levels: Vec<u32>,
    index: usize,
}

impl ZoomCycle {
    pub fn new(levels: Vec<u32>, initial_index: usize) -> Result<Self> {
        if levels.is_empty() {
            return Err(HotmapError::InvalidZoom("no zoom levels".into()));
        }
        if let Some(bad) = levels.iter().find(|&&l| l == 0 || l > 100) {
            return Err(HotmapError::InvalidZoom(format!(
                "{bad}% is outside 1-100%"
            )));
        }
        if initial_index >= levels.len() {
            return Err(HotmapError::InvalidZoom(format!(
                "initial index {initial_index} out of range (levels: {})",
                levels.len()
            )));
        }
        Ok(Self {
            levels,
            index: initial_index,
        })
    }

    pub fn levels(&self) -> &[u32] {
        &self.levels
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> u32 {
        self.levels[self.index]
    }

    /// Percentage the next activation moves to.
    pub fn next_level(&self) -> u32 {
        self.levels[(self.index + 1) % self.levels.len()]
    }

    /// Current percentage as a fraction of the available width.
    pub fn fraction(&self) -> f32 {
        self.current() as f32 / 100.0
    }

    pub fn is_at_max(&self) -> bool {
        self.levels.iter().max() == Some(&self.current())
    }

    /// Step to the next level, wrapping around. Returns the new percentage.
    pub fn advance(&mut self) -> u32 {
        self.index = (self.index + 1) % self.levels.len();
        self.current()
    }

    /// Button text describing what the next activation does.
    pub fn button_label(&self, labels: &Labels) -> String {
        let template = if self.is_at_max() {
            &labels.zoom_out
        } else {
            &labels.zoom_in
        };
        template.replace("{n}", &self.next_level().to_string())
    }
}
