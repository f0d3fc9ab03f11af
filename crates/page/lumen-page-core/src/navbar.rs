//! Scroll-reactive navbar state.

use crate::config::{NavbarConfig, NavbarSkin};

/// Discrete skin for a scroll offset: raised past the threshold, base
/// otherwise.
pub fn skin_for_offset(cfg: &NavbarConfig, offset: f64) -> &NavbarSkin {
    if offset > cfg.threshold {
        &cfg.raised
    } else {
        &cfg.base
    }
}

/// Latest scroll offset plus the per-frame "update already queued" flag.
/// Scroll events can arrive far faster than frames; only the first per
/// frame queues a restyle, and the drain reads whatever offset is current
/// by then.
#[derive(Debug, Default)]
pub struct NavbarState {
    offset: f64,
    queued: bool,
}

impl NavbarState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a scroll event. True when a restyle op should be queued.
    pub fn scrolled(&mut self, offset: f64) -> bool {
        self.offset = offset;
        if self.queued {
            false
        } else {
            self.queued = true;
            true
        }
    }

    /// Clear the queued flag and hand back the offset to restyle from.
    pub fn drained(&mut self) -> f64 {
        self.queued = false;
        self.offset
    }
}
