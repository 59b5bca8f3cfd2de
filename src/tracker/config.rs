//! Tracker configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};

/// Configuration for the [`IdTracker`](crate::tracker::IdTracker).
///
/// Fixed for the lifetime of a tracker. Missing fields in a config file fall
/// back to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// A detection overlapping a track by more than this IoU is a candidate.
    pub iou_threshold: f32,
    /// Frames a track may go unmatched before it is dropped.
    pub max_missing: u32,
    /// A detection whose center lies closer than this (pixels) is a candidate.
    pub dist_threshold: f32,
    /// Total number of ids the tracker may ever hand out.
    pub max_ids: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            iou_threshold: 0.55,
            max_missing: 60,
            dist_threshold: 40.0,
            max_ids: 100,
        }
    }
}

impl TrackerConfig {
    pub fn with_iou_threshold(mut self, iou_threshold: f32) -> Self {
        self.iou_threshold = iou_threshold;
        self
    }

    pub fn with_max_missing(mut self, max_missing: u32) -> Self {
        self.max_missing = max_missing;
        self
    }

    pub fn with_dist_threshold(mut self, dist_threshold: f32) -> Self {
        self.dist_threshold = dist_threshold;
        self
    }

    pub fn with_max_ids(mut self, max_ids: u32) -> Self {
        self.max_ids = max_ids;
        self
    }

    /// Check that every field is in range.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.iou_threshold) {
            return Err(TrackerError::InvalidConfig {
                field: "iou_threshold",
                reason: format!("must be within [0, 1], got {}", self.iou_threshold),
            });
        }
        if !self.dist_threshold.is_finite() || self.dist_threshold < 0.0 {
            return Err(TrackerError::InvalidConfig {
                field: "dist_threshold",
                reason: format!("must be finite and non-negative, got {}", self.dist_threshold),
            });
        }
        if self.max_ids == 0 {
            return Err(TrackerError::InvalidConfig {
                field: "max_ids",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: TrackerConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}
