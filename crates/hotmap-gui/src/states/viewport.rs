/// Viewport display state.
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// Decoded image size in pixels.
    pub image_size: Option<[usize; 2]>,
    /// Why the base image could not be shown.
    pub image_error: Option<String>,
    /// Panel size seen last frame, for telling window resizes from zoom easing.
    pub last_panel_size: Option<egui::Vec2>,
    /// Zoom fraction the container is easing towards.
    pub zoom_target: Option<f32>,
    /// Easing is in progress and its end has not been reported yet.
    pub zoom_easing: bool,
    /// Screen rect of the basic tooltip drawn last frame.
    pub tooltip_rect: Option<egui::Rect>,
    /// Screen rect of the detail panel drawn last frame.
    pub detail_rect: Option<egui::Rect>,
    /// Measured tooltip size, used to place it next frame.
    pub tooltip_size: egui::Vec2,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            texture: None,
            image_size: None,
            image_error: None,
            last_panel_size: None,
            zoom_target: None,
            zoom_easing: false,
            tooltip_rect: None,
            detail_rect: None,
            tooltip_size: egui::vec2(260.0, 96.0),
        }
    }
}

impl ViewportState {
    pub fn clear_popups(&mut self) {
        self.tooltip_rect = None;
        self.detail_rect = None;
    }
}
