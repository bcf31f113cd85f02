//! Hover / pin / detail state machine.
//!
//! Every input is turned into an [`InteractionEvent`] and submitted through
//! [`InteractionController::dispatch`], which computes the successor with the
//! pure [`InteractionState::next`] and applies it. Each transition is "hide
//! everything, then show the new thing": the successor state is built from
//! scratch and never inherits tooltip content from the previous pin.

use std::fmt;

use crate::hotspot::HotspotCatalog;

/// Which tooltip surfaces are open, and for which hotspot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    /// Basic tooltip shown because the pointer is over the hotspot.
    Hovering(String),
    /// Basic tooltip held open by a click, overlay active.
    Pinned(String),
    /// Pinned, with the detail panel revealed as well.
    PinnedWithDetail(String),
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Hovering(id) => write!(f, "Hovering({id})"),
            Self::Pinned(id) => write!(f, "Pinned({id})"),
            Self::PinnedWithDetail(id) => write!(f, "PinnedWithDetail({id})"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InteractionEvent {
    /// Pointer entered a hotspot marker.
    Hover(String),
    /// Pointer left the hotspot it was over.
    Unhover,
    ClickHotspot(String),
    /// Click on the basic tooltip.
    ClickTooltip,
    /// Click anywhere that is not a marker, the basic tooltip or the detail panel.
    ClickOutside,
    /// Markers are being rebuilt after the window size settled.
    Resize,
}

/// Result of submitting one event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Changed,
    Unchanged,
    /// Tooltip clicked for a hotspot that has no detailed description.
    DetailUnavailable(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
    phase: Phase,
    /// Hotspot currently under the pointer, tracked independently of the pin.
    hovered: Option<String>,
}

impl InteractionState {
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Id of the pinned hotspot, if any.
    pub fn active_id(&self) -> Option<&str> {
        match &self.phase {
            Phase::Pinned(id) | Phase::PinnedWithDetail(id) => Some(id),
            Phase::Idle | Phase::Hovering(_) => None,
        }
    }

    pub fn hovered_id(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn is_pinned(&self) -> bool {
        self.active_id().is_some()
    }

    /// Hotspot whose basic tooltip is visible.
    pub fn tooltip_id(&self) -> Option<&str> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Hovering(id) | Phase::Pinned(id) | Phase::PinnedWithDetail(id) => Some(id),
        }
    }

    /// Hotspot whose detail panel is visible.
    pub fn detail_id(&self) -> Option<&str> {
        match &self.phase {
            Phase::PinnedWithDetail(id) => Some(id),
            _ => None,
        }
    }

    pub fn overlay_active(&self) -> bool {
        self.is_pinned()
    }

    /// Successor state for `event`. Pure; the receiver is left untouched.
    pub fn next(&self, event: &InteractionEvent, catalog: &HotspotCatalog) -> (Self, Outcome) {
        let next = match event {
            InteractionEvent::Hover(id) => {
                let phase = match &self.phase {
                    Phase::Pinned(active) | Phase::PinnedWithDetail(active) if active == id => {
                        self.phase.clone()
                    }
                    // Hovering another hotspot while pinned hides everything first,
                    // which drops the pin.
                    _ => Phase::Hovering(id.clone()),
                };
                Self {
                    phase,
                    hovered: Some(id.clone()),
                }
            }
            InteractionEvent::Unhover => {
                let phase = match &self.phase {
                    Phase::Hovering(_) => Phase::Idle,
                    other => other.clone(),
                };
                Self {
                    phase,
                    hovered: None,
                }
            }
            InteractionEvent::ClickHotspot(id) => {
                let phase = if self.active_id() == Some(id.as_str()) {
                    Phase::Idle
                } else {
                    Phase::Pinned(id.clone())
                };
                Self {
                    phase,
                    hovered: self.hovered.clone(),
                }
            }
            InteractionEvent::ClickTooltip => match &self.phase {
                Phase::Pinned(id) => {
                    let has_detail = catalog.get(id).is_some_and(|r| r.has_detail());
                    if !has_detail {
                        return (self.clone(), Outcome::DetailUnavailable(id.clone()));
                    }
                    Self {
                        phase: Phase::PinnedWithDetail(id.clone()),
                        hovered: self.hovered.clone(),
                    }
                }
                _ => self.clone(),
            },
            InteractionEvent::ClickOutside => {
                if self.is_pinned() {
                    Self {
                        phase: Phase::Idle,
                        hovered: self.hovered.clone(),
                    }
                } else {
                    self.clone()
                }
            }
            InteractionEvent::Resize => Self::default(),
        };

        let outcome = if next == *self {
            Outcome::Unchanged
        } else {
            Outcome::Changed
        };
        (next, outcome)
    }
}

/// Owns the interaction state and applies every transition to it.
#[derive(Debug, Default)]
pub struct InteractionController {
    state: InteractionState,
    revision: u64,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Number of state changes applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn dispatch(&mut self, event: InteractionEvent, catalog: &HotspotCatalog) -> Outcome {
        let (next, outcome) = self.state.next(&event, catalog);
        match &outcome {
            Outcome::Changed => {
                tracing::debug!(from = %self.state.phase, to = %next.phase, ?event, "interaction");
                self.state = next;
                self.revision += 1;
            }
            Outcome::DetailUnavailable(id) => {
                tracing::warn!(%id, "detailed description not found");
            }
            Outcome::Unchanged => {}
        }
        outcome
    }
}
