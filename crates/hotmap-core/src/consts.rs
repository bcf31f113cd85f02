/// Edge length of a hotspot marker in pixels.
pub const MARKER_SIZE: f32 = 40.0;

/// Discrete zoom percentages the zoom control cycles through.
pub const DEFAULT_ZOOM_LEVELS: [u32; 3] = [30, 50, 100];

/// Index into `DEFAULT_ZOOM_LEVELS` used at startup (50%).
pub const DEFAULT_ZOOM_INDEX: usize = 1;

/// Duration of the container width easing after a zoom change.
pub const ZOOM_TRANSITION_MS: u64 = 500;

/// Fallback delay before re-layout after a zoom change. Must stay larger
/// than `ZOOM_TRANSITION_MS`.
pub const ZOOM_SETTLE_MS: u64 = 550;

/// Quiet period after the last resize before hotspots are re-laid out.
pub const RESIZE_DEBOUNCE_MS: u64 = 250;

/// Gap between a marker's edge and its tooltip.
pub const TOOLTIP_GAP: f32 = 8.0;
