//! Online identity tracking for per-frame bounding box detections.
//!
//! [`IdTracker`] keeps a set of live tracks for one video stream and, for every
//! frame, maps the incoming detections onto stable ids using box overlap and
//! center distance. Detector backends plug in through [`DetectionSource`] and
//! [`TrackerPipeline`].
//!
//! ```
//! use idtrack_rs::{IdTracker, Rect};
//!
//! let mut tracker = IdTracker::default();
//! assert_eq!(tracker.update(&[Rect::new(0.0, 0.0, 10.0, 10.0)]), vec![Some(0)]);
//! assert_eq!(tracker.update(&[Rect::new(1.0, 1.0, 11.0, 11.0)]), vec![Some(0)]);
//! ```

mod error;
pub mod integration;
pub mod tracker;

pub use error::{Result, TrackerError};
pub use integration::{
    DetectionBuilder, DetectionFilter, DetectionSource, IntoDetections, RawDetection, TrackedBox,
    TrackerPipeline,
};
pub use tracker::{IdTracker, Rect, Track, TrackId, TrackState, TrackerConfig, ids_to_signed};
