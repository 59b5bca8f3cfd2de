//! TrackerPipeline for combining detection with tracking.

use crate::error::Result;
use crate::tracker::{IdTracker, Rect, TrackId, TrackerConfig};

use super::{DetectionFilter, DetectionSource, IntoDetections};

/// A detection box together with the id the tracker gave it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackedBox {
    pub bbox: Rect,
    /// `None` when the id budget was spent before this object showed up.
    pub id: Option<TrackId>,
}

impl TrackedBox {
    /// Overlay text for the box, or `None` for boxes without an identity.
    pub fn label(&self) -> Option<String> {
        self.id.map(|id| format!("ID: {id}"))
    }
}

/// Bundles a [`DetectionSource`], a [`DetectionFilter`] and an [`IdTracker`]
/// for one video stream.
pub struct TrackerPipeline<D: DetectionSource> {
    detector: D,
    filter: DetectionFilter,
    tracker: IdTracker,
}

impl<D: DetectionSource> TrackerPipeline<D> {
    pub fn new(detector: D, config: TrackerConfig) -> Result<Self> {
        Ok(Self {
            detector,
            filter: DetectionFilter::default(),
            tracker: IdTracker::new(config)?,
        })
    }

    pub fn with_default_config(detector: D) -> Self {
        Self {
            detector,
            filter: DetectionFilter::default(),
            tracker: IdTracker::default(),
        }
    }

    pub fn with_filter(mut self, filter: DetectionFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Detect, filter and track a single frame.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    pub fn process_frame(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> std::result::Result<Vec<TrackedBox>, D::Error> {
        let detections = self.detector.detect(input, width, height)?;
        Ok(self.process_detections(detections))
    }

    /// Filter and track detections that were produced elsewhere.
    pub fn process_detections<I: IntoDetections>(&mut self, detections: I) -> Vec<TrackedBox> {
        let boxes = self.filter.apply(&detections.into_detections());
        let ids = self.tracker.update(&boxes);
        boxes
            .into_iter()
            .zip(ids)
            .map(|(bbox, id)| TrackedBox { bbox, id })
            .collect()
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }

    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    pub fn filter(&self) -> &DetectionFilter {
        &self.filter
    }

    pub fn tracker(&self) -> &IdTracker {
        &self.tracker
    }
}
