//! Per-stream identity assignment.

use std::collections::{BTreeMap, HashSet};

use log::{debug, trace, warn};

use crate::error::Result;
use crate::tracker::config::TrackerConfig;
use crate::tracker::matching::{self, AssignmentResult};
use crate::tracker::rect::Rect;
use crate::tracker::similarity::{center_distance, distance_matrix, iou_matrix};
use crate::tracker::track::{Track, TrackId};
use crate::tracker::track_state::TrackState;

/// Assigns stable ids to per-frame detections.
///
/// Each call to [`IdTracker::update`] runs four phases in order:
///
/// 1. every live track (ascending id) greedily claims its best unmatched
///    detection by IoU, see [`matching::greedy_assignment`];
/// 2. leftover detections reuse the first recently lost track whose center
///    is within `dist_threshold`;
/// 3. anything still unmatched gets a fresh id while the id budget lasts;
/// 4. unmatched tracks age by one frame and expire once their miss count
///    exceeds `max_missing`.
///
/// Ids are never recycled. Once `max_ids` ids have been handed out, new
/// objects get `None` for the rest of the tracker's life.
#[derive(Debug, Clone)]
pub struct IdTracker {
    tracks: BTreeMap<TrackId, Track>,
    next_id: TrackId,
    config: TrackerConfig,
    exhausted_reported: bool,
}

impl Default for IdTracker {
    fn default() -> Self {
        Self::with_valid_config(TrackerConfig::default())
    }
}

impl IdTracker {
    pub fn new(config: TrackerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: TrackerConfig) -> Self {
        Self {
            tracks: BTreeMap::new(),
            next_id: 0,
            config,
            exhausted_reported: false,
        }
    }

    /// Assign ids to one frame of detections.
    ///
    /// The result lines up with `detections`; `None` means the detection got
    /// no identity because the id budget is spent.
    pub fn update(&mut self, detections: &[Rect]) -> Vec<Option<TrackId>> {
        let mut assigned: Vec<Option<TrackId>> = vec![None; detections.len()];

        let unmatched = self.match_tracks(detections, &mut assigned);
        self.reuse_lost_tracks(detections, &unmatched, &mut assigned);
        self.create_tracks(detections, &mut assigned);
        self.age_tracks(&assigned);

        assigned
    }

    /// Returns the detection indices left unmatched, in input order.
    fn match_tracks(
        &mut self,
        detections: &[Rect],
        assigned: &mut [Option<TrackId>],
    ) -> Vec<usize> {
        if self.tracks.is_empty() || detections.is_empty() {
            return (0..detections.len()).collect();
        }

        let ids: Vec<TrackId> = self.tracks.keys().copied().collect();
        let boxes: Vec<Rect> = self.tracks.values().map(Track::bbox).collect();
        // Tracks that reached max_missing expire this frame no matter what.
        let eligible: Vec<bool> = self
            .tracks
            .values()
            .map(|t| t.missed() < self.config.max_missing)
            .collect();

        let ious = iou_matrix(&boxes, detections);
        let dists = distance_matrix(&boxes, detections);

        let AssignmentResult {
            matches,
            unmatched_tracks,
            unmatched_detections,
        } = matching::greedy_assignment(
            &ious,
            &dists,
            &eligible,
            self.config.iou_threshold,
            self.config.dist_threshold,
        );

        for (row, col) in matches {
            let id = ids[row];
            if let Some(track) = self.tracks.get_mut(&id) {
                trace!(
                    "track {} matched detection {} (iou {:.3}, dist {:.1})",
                    id,
                    col,
                    ious[[row, col]],
                    dists[[row, col]]
                );
                track.update(detections[col]);
                assigned[col] = Some(id);
            }
        }
        trace!(
            "{} tracks and {} detections left unmatched",
            unmatched_tracks.len(),
            unmatched_detections.len()
        );

        unmatched_detections
    }

    fn reuse_lost_tracks(
        &mut self,
        detections: &[Rect],
        unmatched: &[usize],
        assigned: &mut [Option<TrackId>],
    ) {
        let max_missing = self.config.max_missing;
        let dist_threshold = self.config.dist_threshold;

        for &col in unmatched {
            let det = &detections[col];
            let reusable = self.tracks.values_mut().find(|t| {
                t.missed() > 0
                    && t.missed() < max_missing
                    && center_distance(&t.bbox(), det) < dist_threshold
            });
            if let Some(track) = reusable {
                trace!("track {} reused after {} missed frames", track.id(), track.missed());
                track.update(*det);
                assigned[col] = Some(track.id());
            }
        }
    }

    fn create_tracks(&mut self, detections: &[Rect], assigned: &mut [Option<TrackId>]) {
        for (det, slot) in detections.iter().zip(assigned.iter_mut()) {
            if slot.is_some() {
                continue;
            }
            if self.next_id >= self.config.max_ids {
                if !self.exhausted_reported {
                    warn!(
                        "id budget of {} exhausted, new detections will not be tracked",
                        self.config.max_ids
                    );
                    self.exhausted_reported = true;
                }
                continue;
            }

            let id = self.next_id;
            self.next_id += 1;
            debug!("new track {} at {:?}", id, det.to_tlbr());
            self.tracks.insert(id, Track::new(id, *det));
            *slot = Some(id);
        }
    }

    fn age_tracks(&mut self, assigned: &[Option<TrackId>]) {
        let active: HashSet<TrackId> = assigned.iter().flatten().copied().collect();
        let max_missing = self.config.max_missing;

        self.tracks.retain(|id, track| {
            if active.contains(id) {
                return true;
            }
            let missed = track.mark_missed();
            if missed > max_missing {
                debug!("track {} expired after {} missed frames", id, missed);
                false
            } else {
                true
            }
        });
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Live tracks in ascending id order.
    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.tracks.values()
    }

    pub fn track(&self, id: TrackId) -> Option<&Track> {
        self.tracks.get(&id)
    }

    /// The id the next new track would receive.
    pub fn next_id(&self) -> TrackId {
        self.next_id
    }

    /// Whether every id in the budget has been handed out.
    pub fn is_exhausted(&self) -> bool {
        self.next_id >= self.config.max_ids
    }

    /// Lifecycle state of `id`, or `None` if it was never handed out.
    pub fn state_of(&self, id: TrackId) -> Option<TrackState> {
        match self.tracks.get(&id) {
            Some(track) => Some(track.state()),
            None if id < self.next_id => Some(TrackState::Expired),
            None => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn track_mut(&mut self, id: TrackId) -> Option<&mut Track> {
        self.tracks.get_mut(&id)
    }
}

/// Convert tracker output to the integer form where `-1` marks "no identity".
pub fn ids_to_signed(ids: &[Option<TrackId>]) -> Vec<i64> {
    ids.iter()
        .map(|id| id.map_or(-1, i64::from))
        .collect()
}
