//! Upstream filtering of raw detector output.

use log::trace;

use super::RawDetection;
use crate::tracker::Rect;

/// Rounding finer than this is below f32 precision for pixel coordinates.
const MAX_ROUND_DECIMALS: u32 = 7;

/// Decides which raw detections reach the tracker and cleans up their boxes.
///
/// Kept detections have a score of at least `min_score`, match `class_id`
/// when one is set, and have finite coordinates. Their boxes get corner order
/// fixed and, when `round_decimals` is set, coordinates rounded
/// half-to-even to that many decimals (at most 7). Rounding never turns a
/// finite coordinate into a non-finite one.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionFilter {
    pub min_score: f32,
    pub class_id: Option<usize>,
    pub round_decimals: Option<u32>,
}

impl Default for DetectionFilter {
    fn default() -> Self {
        Self {
            min_score: 0.3,
            class_id: None,
            round_decimals: Some(1),
        }
    }
}

impl DetectionFilter {
    pub fn with_min_score(mut self, min_score: f32) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn with_class_id(mut self, class_id: usize) -> Self {
        self.class_id = Some(class_id);
        self
    }

    pub fn with_round_decimals(mut self, decimals: Option<u32>) -> Self {
        self.round_decimals = decimals;
        self
    }

    pub fn accepts(&self, det: &RawDetection) -> bool {
        if det.score < self.min_score {
            return false;
        }
        if self.class_id.is_some() && det.class_id != self.class_id {
            return false;
        }
        det.bbox.iter().all(|v| v.is_finite())
    }

    /// Filter `detections` and convert the survivors to tracker boxes,
    /// preserving their relative order.
    pub fn apply(&self, detections: &[RawDetection]) -> Vec<Rect> {
        let kept: Vec<Rect> = detections
            .iter()
            .filter(|det| self.accepts(det))
            .map(|det| self.clean(det.bbox))
            .collect();
        trace!("kept {} of {} detections", kept.len(), detections.len());
        kept
    }

    fn clean(&self, bbox: [f32; 4]) -> Rect {
        let bbox = match self.round_decimals {
            Some(decimals) => {
                let scale = 10f32.powi(decimals.min(MAX_ROUND_DECIMALS) as i32);
                bbox.map(|v| {
                    let scaled = v * scale;
                    if scaled.is_finite() {
                        scaled.round_ties_even() / scale
                    } else {
                        v
                    }
                })
            }
            None => bbox,
        };
        Rect::from(bbox).normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn det(bbox: [f32; 4], score: f32, class_id: Option<usize>) -> RawDetection {
        RawDetection::new(bbox, score, class_id)
    }

    #[test]
    fn test_score_threshold() {
        let filter = DetectionFilter::default().with_round_decimals(None);
        let dets = [
            det([0.0, 0.0, 10.0, 10.0], 0.9, None),
            det([20.0, 0.0, 30.0, 10.0], 0.1, None),
            det([40.0, 0.0, 50.0, 10.0], 0.3, None),
        ];
        let kept = filter.apply(&dets);
        assert_eq!(
            kept,
            vec![Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(40.0, 0.0, 50.0, 10.0)]
        );
    }

    #[test]
    fn test_class_filter() {
        let filter = DetectionFilter::default().with_class_id(2);
        assert!(filter.accepts(&det([0.0, 0.0, 1.0, 1.0], 0.9, Some(2))));
        assert!(!filter.accepts(&det([0.0, 0.0, 1.0, 1.0], 0.9, Some(0))));
        assert!(!filter.accepts(&det([0.0, 0.0, 1.0, 1.0], 0.9, None)));

        let any_class = DetectionFilter::default();
        assert!(any_class.accepts(&det([0.0, 0.0, 1.0, 1.0], 0.9, Some(7))));
    }

    #[test]
    fn test_drops_non_finite() {
        let filter = DetectionFilter::default();
        assert!(!filter.accepts(&det([0.0, f32::NAN, 1.0, 1.0], 0.9, None)));
        assert!(filter.apply(&[det([f32::INFINITY, 0.0, 1.0, 1.0], 0.9, None)]).is_empty());
    }

    #[test]
    fn test_rounding_and_normalizing() {
        let filter = DetectionFilter::default();
        let kept = filter.apply(&[det([10.04, 20.0, 0.0, 5.26], 0.9, None)]);
        assert_eq!(kept.len(), 1);
        let r = kept[0];
        assert_eq!(r.x1, 0.0);
        assert!((r.x2 - 10.0).abs() < 1e-4);
        assert!((r.y1 - 5.3).abs() < 1e-4);
        assert_eq!(r.y2, 20.0);
    }

    #[test]
    fn test_large_round_decimals_keep_boxes_finite() {
        let dets = [det([0.0, 10.5, 20.0, 30.0], 0.9, None)];
        for decimals in [7, 8, 39, 1000, u32::MAX] {
            let filter = DetectionFilter::default().with_round_decimals(Some(decimals));
            let kept = filter.apply(&dets);
            assert_eq!(kept.len(), 1);
            assert!(kept[0].is_finite(), "non-finite box for {decimals} decimals");
            assert_eq!(kept[0], Rect::new(0.0, 10.5, 20.0, 30.0));
        }
    }

    #[test]
    fn test_rounding_huge_coordinates_stays_finite() {
        let filter = DetectionFilter::default().with_round_decimals(Some(7));
        let kept = filter.apply(&[det([0.0, 0.0, 1.0e35, 1.0e35], 0.9, None)]);
        assert_eq!(kept, vec![Rect::new(0.0, 0.0, 1.0e35, 1.0e35)]);
    }
}
