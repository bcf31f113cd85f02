use std::time::{Duration, Instant};

use crate::config::{Labels, MapConfig};
use crate::error::Result;
use crate::hotspot::HotspotCatalog;
use crate::interaction::{InteractionController, InteractionEvent, InteractionState, Outcome};
use crate::layout::{ImageSize, PixelPoint, PixelRect};
use crate::readout::Readout;
use crate::relayout::{RelayoutReason, RelayoutScheduler};
use crate::render::{Marker, MarkerLayer};
use crate::sanitize::to_plain_text;
use crate::zoom::ZoomCycle;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Pending,
    Ready,
    /// Holds the message shown next to the map.
    Failed(String),
}

/// What a primary click landed on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    Hotspot(String),
    Tooltip,
    DetailPanel,
    Outside,
}

/// Content of the basic tooltip.
#[derive(Clone, Debug, PartialEq)]
pub struct BasicTooltip {
    pub hotspot_id: String,
    pub title: String,
    pub coordinates: String,
    pub description: String,
    pub pinned: bool,
    /// Affordance text, only for a pinned hotspot that has detail.
    pub details_hint: Option<String>,
    /// Marker the tooltip is anchored to.
    pub anchor: PixelRect,
}

/// Content of the detail panel.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailPanel {
    pub hotspot_id: String,
    pub title: String,
    pub coordinates: String,
    pub body: String,
}

/// One open map: data, markers, interaction and zoom. All input goes through here.
#[derive(Debug)]
pub struct MapSession {
    labels: Labels,
    catalog: HotspotCatalog,
    load_state: LoadState,
    markers: MarkerLayer,
    interaction: InteractionController,
    zoom: ZoomCycle,
    scheduler: RelayoutScheduler,
    image_size: Option<ImageSize>,
    readout: Readout,
    auto_advance_zoom: bool,
}

impl MapSession {
    pub fn new(config: &MapConfig) -> Result<Self> {
        Ok(Self {
            labels: config.labels.clone(),
            catalog: HotspotCatalog::default(),
            load_state: LoadState::Pending,
            markers: MarkerLayer::new(config.marker_size),
            interaction: InteractionController::new(),
            zoom: config.zoom.cycle()?,
            scheduler: RelayoutScheduler::new(
                Duration::from_millis(config.zoom.settle_ms),
                Duration::from_millis(config.resize_debounce_ms),
            ),
            image_size: None,
            readout: Readout::Placeholder,
            auto_advance_zoom: config.auto_advance_zoom_on_load,
        })
    }

    /// Apply the result of loading the hotspot collection.
    pub fn data_loaded(&mut self, result: Result<HotspotCatalog>, now: Instant) {
        self.interaction.dispatch(InteractionEvent::Resize, &self.catalog);
        match result {
            Ok(catalog) => {
                self.catalog = catalog;
                self.load_state = LoadState::Ready;
                self.relayout();
                if self.auto_advance_zoom {
                    tracing::warn!("auto-advancing zoom after load");
                    self.zoom(now);
                }
            }
            Err(e) => {
                tracing::error!(failure = ?e.data_failure(), "error loading hotspot data: {e}");
                self.catalog = HotspotCatalog::default();
                self.markers.clear();
                self.load_state = LoadState::Failed(self.labels.load_error.clone());
            }
        }
    }

    /// Forget the loaded data before a reload.
    pub fn reset(&mut self) {
        self.interaction.dispatch(InteractionEvent::Resize, &self.catalog);
        self.catalog = HotspotCatalog::default();
        self.markers.clear();
        self.load_state = LoadState::Pending;
    }

    /// Record the current rendered image size. The first known size lays out
    /// the markers immediately; later changes wait for the scheduler.
    pub fn set_image_size(&mut self, size: ImageSize) {
        self.image_size = Some(size);
        if self.load_state == LoadState::Ready && self.markers.laid_out_for().is_none() {
            self.relayout();
        }
    }

    pub fn window_resized(&mut self, now: Instant) {
        self.scheduler.request_after_resize(now);
    }

    /// Advance the zoom cycle and schedule a re-layout. Returns the new percentage.
    pub fn zoom(&mut self, now: Instant) -> u32 {
        let level = self.zoom.advance();
        self.scheduler.request_after_zoom(now);
        tracing::debug!(level, "zoom changed");
        level
    }

    /// The container finished resizing after a zoom change.
    pub fn transition_finished(&mut self) {
        self.scheduler.transition_finished();
    }

    /// Run a due re-layout, if any.
    pub fn tick(&mut self, now: Instant) -> Option<RelayoutReason> {
        let reason = self.scheduler.poll(now)?;
        self.relayout();
        if reason == RelayoutReason::Resize {
            tracing::info!("window resized, adjusting hotspots");
            self.interaction.dispatch(InteractionEvent::Resize, &self.catalog);
        }
        Some(reason)
    }

    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        self.scheduler.next_wakeup(now)
    }

    /// Report which hotspot the pointer is over.
    pub fn hover(&mut self, hotspot_id: Option<&str>) -> Outcome {
        if self.interaction.state().hovered_id() == hotspot_id {
            return Outcome::Unchanged;
        }
        let event = match hotspot_id {
            Some(id) => InteractionEvent::Hover(id.to_string()),
            None => InteractionEvent::Unhover,
        };
        self.interaction.dispatch(event, &self.catalog)
    }

    pub fn click(&mut self, target: ClickTarget) -> Outcome {
        let event = match target {
            ClickTarget::Hotspot(id) => InteractionEvent::ClickHotspot(id),
            ClickTarget::Tooltip => InteractionEvent::ClickTooltip,
            ClickTarget::DetailPanel => return Outcome::Unchanged,
            ClickTarget::Outside => InteractionEvent::ClickOutside,
        };
        self.interaction.dispatch(event, &self.catalog)
    }

    /// Pointer moved to `pointer`, relative to the image's top-left corner.
    pub fn pointer_moved(&mut self, pointer: PixelPoint) {
        self.readout = match self.image_size {
            Some(size) => Readout::at(pointer, size),
            None => Readout::Placeholder,
        };
    }

    pub fn pointer_left(&mut self) {
        self.readout = Readout::Placeholder;
    }

    fn relayout(&mut self) {
        match self.image_size {
            Some(size) if !size.is_empty() => self.markers.rebuild(&self.catalog, size),
            _ => tracing::debug!("image size unknown, deferring hotspot layout"),
        }
    }

    pub fn basic_tooltip(&self) -> Option<BasicTooltip> {
        let state = self.interaction.state();
        let id = state.tooltip_id()?;
        let record = self.catalog.get(id)?;
        let anchor = self.markers.marker(id)?.rect;
        let pinned = state.is_pinned();
        Some(BasicTooltip {
            hotspot_id: record.id.clone(),
            title: to_plain_text(&record.location),
            coordinates: self.labels.coordinates(&to_plain_text(&record.coordinates)),
            description: to_plain_text(&record.description),
            pinned,
            details_hint: (pinned && record.has_detail()).then(|| self.labels.view_details.clone()),
            anchor,
        })
    }

    pub fn detail_panel(&self) -> Option<DetailPanel> {
        let id = self.interaction.state().detail_id()?;
        let record = self.catalog.get(id)?;
        Some(DetailPanel {
            hotspot_id: record.id.clone(),
            title: to_plain_text(&record.location),
            coordinates: self.labels.coordinates(&to_plain_text(&record.coordinates)),
            body: to_plain_text(record.detailed_description.as_deref().unwrap_or_default()),
        })
    }

    pub fn overlay_active(&self) -> bool {
        self.interaction.state().overlay_active()
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.load_state {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn readout_text(&self) -> String {
        self.readout.text(&self.labels)
    }

    pub fn readout(&self) -> Readout {
        self.readout
    }

    pub fn zoom_label(&self) -> String {
        self.zoom.button_label(&self.labels)
    }

    pub fn zoom_cycle(&self) -> &ZoomCycle {
        &self.zoom
    }

    pub fn markers(&self) -> &[Marker] {
        self.markers.markers()
    }

    pub fn marker_layer(&self) -> &MarkerLayer {
        &self.markers
    }

    pub fn interaction(&self) -> &InteractionState {
        self.interaction.state()
    }

    pub fn catalog(&self) -> &HotspotCatalog {
        &self.catalog
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }
}
