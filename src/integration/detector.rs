//! Trait for object detection inference backends.

/// Raw detection output from a model, before filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDetection {
    /// Bounding box: [x1, y1, x2, y2]
    pub bbox: [f32; 4],
    /// Confidence score
    pub score: f32,
    /// Class ID, if the model is multi-class
    pub class_id: Option<usize>,
}

impl RawDetection {
    pub fn new(bbox: [f32; 4], score: f32, class_id: Option<usize>) -> Self {
        Self {
            bbox,
            score,
            class_id,
        }
    }
}

/// Trait for object detection inference backends.
///
/// Implement this trait to feed any detection model into a
/// [`TrackerPipeline`](super::TrackerPipeline).
///
/// # Example
///
/// ```
/// use idtrack_rs::{DetectionSource, RawDetection};
///
/// struct FixedDetector;
///
/// impl DetectionSource for FixedDetector {
///     type Error = std::io::Error;
///
///     fn detect(&mut self, _input: &[u8], _width: u32, _height: u32) -> Result<Vec<RawDetection>, Self::Error> {
///         Ok(vec![RawDetection::new([0.0, 0.0, 10.0, 10.0], 0.9, Some(2))])
///     }
/// }
/// ```
pub trait DetectionSource {
    /// Error type for detection failures.
    type Error;

    /// Run inference on raw image data and return detections.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes (format depends on implementation)
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    fn detect(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<RawDetection>, Self::Error>;
}

/// Helper trait for converting model-specific outputs to [`RawDetection`]s.
pub trait IntoDetections {
    fn into_detections(self) -> Vec<RawDetection>;
}

impl IntoDetections for Vec<RawDetection> {
    fn into_detections(self) -> Vec<RawDetection> {
        self
    }
}

impl IntoDetections for &[RawDetection] {
    fn into_detections(self) -> Vec<RawDetection> {
        self.to_vec()
    }
}
