//! Greedy association between live tracks and detections.

use ndarray::Array2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentResult {
    /// (track row, detection column) pairs, in track row order.
    pub matches: Vec<(usize, usize)>,
    pub unmatched_tracks: Vec<usize>,
    pub unmatched_detections: Vec<usize>,
}

/// Greedily assign detections to tracks, one track at a time.
///
/// Rows of `ious`/`dists` are tracks in scan order, columns are detections in
/// input order. A detection is a candidate for a track when its IoU exceeds
/// `iou_threshold` or its center distance is below `dist_threshold`. The
/// candidate with the strictly highest IoU wins, measured against a running
/// best that starts at 0, so a candidate with zero overlap is never picked
/// even when it qualified on distance alone. Rows with `eligible[row] ==
/// false` are reported unmatched without consuming any detection.
pub fn greedy_assignment(
    ious: &Array2<f32>,
    dists: &Array2<f32>,
    eligible: &[bool],
    iou_threshold: f32,
    dist_threshold: f32,
) -> AssignmentResult {
    debug_assert_eq!(ious.dim(), dists.dim());
    let (num_rows, num_cols) = ious.dim();

    let mut taken = vec![false; num_cols];
    let mut matches = Vec::new();
    let mut unmatched_tracks = Vec::new();

    for row in 0..num_rows {
        if !eligible.get(row).copied().unwrap_or(false) {
            unmatched_tracks.push(row);
            continue;
        }

        let mut best_col = None;
        let mut best_score = 0.0_f32;
        for col in (0..num_cols).filter(|&col| !taken[col]) {
            let overlap = ious[[row, col]];
            let is_candidate = overlap > iou_threshold || dists[[row, col]] < dist_threshold;
            if is_candidate && overlap > best_score {
                best_score = overlap;
                best_col = Some(col);
            }
        }

        match best_col {
            Some(col) => {
                taken[col] = true;
                matches.push((row, col));
            }
            None => unmatched_tracks.push(row),
        }
    }

    let unmatched_detections = taken
        .iter()
        .enumerate()
        .filter_map(|(col, &t)| if t { None } else { Some(col) })
        .collect();

    AssignmentResult {
        matches,
        unmatched_tracks,
        unmatched_detections,
    }
}
