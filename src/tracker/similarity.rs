//! Geometric similarity between bounding boxes.

use ndarray::Array2;

use crate::tracker::rect::Rect;

/// Added to the IoU denominator so degenerate boxes never divide by zero.
pub const IOU_EPSILON: f32 = 1e-5;

/// Intersection over Union of two boxes.
///
/// Negative overlaps are clamped to zero, so disjoint boxes score 0 and
/// zero-area boxes fall back to 0 through [`IOU_EPSILON`].
pub fn iou(a: &Rect, b: &Rect) -> f32 {
    let inter_width = (a.x2.min(b.x2) - a.x1.max(b.x1)).max(0.0);
    let inter_height = (a.y2.min(b.y2) - a.y1.max(b.y1)).max(0.0);
    let inter_area = inter_width * inter_height;

    inter_area / (a.area() + b.area() - inter_area + IOU_EPSILON)
}

/// Euclidean distance between box centers.
pub fn center_distance(a: &Rect, b: &Rect) -> f32 {
    nalgebra::distance(&a.center(), &b.center())
}

/// Calculate IoU matrix between two sets of bounding boxes.
///
/// Returns a matrix of shape (M, N) where M is the length of `boxes_a`
/// and N is the length of `boxes_b`.
pub fn iou_matrix(boxes_a: &[Rect], boxes_b: &[Rect]) -> Array2<f32> {
    Array2::from_shape_fn((boxes_a.len(), boxes_b.len()), |(i, j)| {
        iou(&boxes_a[i], &boxes_b[j])
    })
}

/// Calculate center distance matrix between two sets of bounding boxes.
pub fn distance_matrix(boxes_a: &[Rect], boxes_b: &[Rect]) -> Array2<f32> {
    Array2::from_shape_fn((boxes_a.len(), boxes_b.len()), |(i, j)| {
        center_distance(&boxes_a[i], &boxes_b[j])
    })
}
