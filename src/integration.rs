//! Integration module for connecting object detection backends with the tracker.
//!
//! The detector itself lives outside this crate. This module provides the
//! trait a backend implements, the filtering applied to raw model output, and
//! a pipeline that pairs every kept box with its tracked id.

mod builder;
mod detector;
mod filter;
mod pipeline;

pub use builder::DetectionBuilder;
pub use detector::{DetectionSource, IntoDetections, RawDetection};
pub use filter::DetectionFilter;
pub use pipeline::{TrackedBox, TrackerPipeline};
