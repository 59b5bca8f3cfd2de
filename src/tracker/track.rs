//! A single tracked identity.

use crate::tracker::rect::Rect;
use crate::tracker::track_state::TrackState;

/// Identity handed out by the tracker.
pub type TrackId = u32;

/// A live track: last known box plus consecutive miss count.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    id: TrackId,
    bbox: Rect,
    missed: u32,
}

impl Track {
    pub(crate) fn new(id: TrackId, bbox: Rect) -> Self {
        Self {
            id,
            bbox,
            missed: 0,
        }
    }

    pub fn id(&self) -> TrackId {
        self.id
    }

    /// Last matched bounding box.
    pub fn bbox(&self) -> Rect {
        self.bbox
    }

    /// Consecutive frames since the last match.
    pub fn missed(&self) -> u32 {
        self.missed
    }

    pub fn state(&self) -> TrackState {
        match self.missed {
            0 => TrackState::Active,
            k => TrackState::Missing(k),
        }
    }

    /// Refresh with a matched detection.
    pub(crate) fn update(&mut self, bbox: Rect) {
        self.bbox = bbox;
        self.missed = 0;
    }

    /// Count one more unmatched frame and return the new miss count.
    pub(crate) fn mark_missed(&mut self) -> u32 {
        self.missed = self.missed.saturating_add(1);
        self.missed
    }

    #[cfg(test)]
    pub(crate) fn set_missed(&mut self, missed: u32) {
        self.missed = missed;
    }
}
