use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_ZOOM_INDEX, DEFAULT_ZOOM_LEVELS, MARKER_SIZE, RESIZE_DEBOUNCE_MS, ZOOM_SETTLE_MS,
    ZOOM_TRANSITION_MS,
};
use crate::error::Result;
use crate::zoom::ZoomCycle;

/// Everything needed to open a map.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MapConfig {
    /// Base image.
    pub image: PathBuf,
    /// Hotspot data: a local path or an `http(s)://` URL.
    pub data: String,
    #[serde(default)]
    pub zoom: ZoomConfig,
    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: u64,
    #[serde(default = "default_marker_size")]
    pub marker_size: f32,
    /// Advance the zoom control once right after the data has loaded.
    #[serde(default)]
    pub auto_advance_zoom_on_load: bool,
    #[serde(default)]
    pub labels: Labels,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            image: PathBuf::from("map.png"),
            data: "data.json".into(),
            zoom: ZoomConfig::default(),
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            marker_size: MARKER_SIZE,
            auto_advance_zoom_on_load: false,
            labels: Labels::default(),
        }
    }
}

impl MapConfig {
    /// Parse a TOML config and check that its zoom section is usable.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.zoom.cycle()?;
        config.zoom.warn_if_settle_too_short();
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;
        config.resolve_relative_to(path.parent().unwrap_or(Path::new("")));
        Ok(config)
    }

    /// Make a relative image path (and a relative local data path) relative to `base`.
    fn resolve_relative_to(&mut self, base: &Path) {
        if self.image.is_relative() {
            self.image = base.join(&self.image);
        }
        if !is_url(&self.data) && Path::new(&self.data).is_relative() {
            self.data = base.join(&self.data).to_string_lossy().into_owned();
        }
    }
}

pub(crate) fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Container max width as a percentage of the available width.
    pub levels: Vec<u32>,
    pub initial_index: usize,
    /// Duration of the container width easing.
    pub transition_ms: u64,
    /// Fallback re-layout delay if the transition end is never observed.
    pub settle_ms: u64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            levels: DEFAULT_ZOOM_LEVELS.to_vec(),
            initial_index: DEFAULT_ZOOM_INDEX,
            transition_ms: ZOOM_TRANSITION_MS,
            settle_ms: ZOOM_SETTLE_MS,
        }
    }
}

impl ZoomConfig {
    pub fn cycle(&self) -> Result<ZoomCycle> {
        ZoomCycle::new(self.levels.clone(), self.initial_index)
    }

    fn warn_if_settle_too_short(&self) {
        if self.settle_ms <= self.transition_ms {
            tracing::warn!(
                settle_ms = self.settle_ms,
                transition_ms = self.transition_ms,
                "zoom settle delay does not exceed the transition; fallback re-layout may read stale sizes"
            );
        }
    }
}

/// Literal display strings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// `{n}` is replaced by the next zoom percentage.
    pub zoom_in: String,
    /// Used when the current level is the largest one.
    pub zoom_out: String,
    pub coordinates_prefix: String,
    pub view_details: String,
    pub readout_placeholder: String,
    pub load_error: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            zoom_in: "Phóng to lên {n}%".into(),
            zoom_out: "Thu nhỏ về {n}%".into(),
            coordinates_prefix: "Tọa độ: ".into(),
            view_details: "Click để xem chi tiết".into(),
            readout_placeholder: "Di chuyển chuột trên bản đồ để lấy tọa độ".into(),
            load_error: "Không thể tải dữ liệu điểm nóng. Vui lòng kiểm tra lại file data.json."
                .into(),
        }
    }
}

impl Labels {
    pub fn coordinates(&self, coordinates: &str) -> String {
        format!("{}{}", self.coordinates_prefix, coordinates)
    }
}

fn default_resize_debounce_ms() -> u64 {
    RESIZE_DEBOUNCE_MS
}

fn default_marker_size() -> f32 {
    MARKER_SIZE
}
