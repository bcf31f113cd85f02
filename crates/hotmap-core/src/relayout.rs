//! Deferred re-layout after zoom changes and window resizes.
//!
//! A zoom change resizes the image container through an easing; markers laid
//! out before it finishes would be placed against stale dimensions. The
//! scheduler fires as soon as the caller reports the end of the transition,
//! and falls back to a fixed deadline otherwise. Resizes are debounced.

use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelayoutReason {
    Zoom,
    Resize,
}

#[derive(Debug)]
pub struct RelayoutScheduler {
    zoom_settle: Duration,
    resize_debounce: Duration,
    zoom_deadline: Option<Instant>,
    zoom_settled: bool,
    resize_deadline: Option<Instant>,
}

impl RelayoutScheduler {
    pub fn new(zoom_settle: Duration, resize_debounce: Duration) -> Self {
        Self {
            zoom_settle,
            resize_debounce,
            zoom_deadline: None,
            zoom_settled: false,
            resize_deadline: None,
        }
    }

    /// Arm a re-layout for a zoom change started at `now`.
    pub fn request_after_zoom(&mut self, now: Instant) {
        self.zoom_deadline = Some(now + self.zoom_settle);
        self.zoom_settled = false;
    }

    /// The container transition finished; a pending zoom re-layout is due now.
    pub fn transition_finished(&mut self) {
        if self.zoom_deadline.is_some() {
            self.zoom_settled = true;
        }
    }

    /// Record a resize at `now`, pushing back any pending resize re-layout.
    pub fn request_after_resize(&mut self, now: Instant) {
        self.resize_deadline = Some(now + self.resize_debounce);
    }

    pub fn is_pending(&self) -> bool {
        self.zoom_deadline.is_some() || self.resize_deadline.is_some()
    }

    /// Take the re-layout due at `now`, if any. A due resize also clears a
    /// due zoom since one rebuild covers both.
    pub fn poll(&mut self, now: Instant) -> Option<RelayoutReason> {
        let zoom_due = self.zoom_settled || self.zoom_deadline.is_some_and(|d| now >= d);
        let resize_due = self.resize_deadline.is_some_and(|d| now >= d);

        if resize_due {
            self.resize_deadline = None;
            if zoom_due {
                self.clear_zoom();
            }
            return Some(RelayoutReason::Resize);
        }
        if zoom_due {
            self.clear_zoom();
            return Some(RelayoutReason::Zoom);
        }
        None
    }

    /// Time until the earliest pending deadline, for scheduling a wake-up.
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        if self.zoom_settled {
            return Some(Duration::ZERO);
        }
        [self.zoom_deadline, self.resize_deadline]
            .into_iter()
            .flatten()
            .min()
            .map(|d| d.saturating_duration_since(now))
    }

    fn clear_zoom(&mut self) {
        self.zoom_deadline = None;
        self.zoom_settled = false;
    }
}
