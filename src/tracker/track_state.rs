/// Lifecycle state of a tracked identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackState {
    /// Matched in the most recent frame
    Active,
    /// Unmatched for this many consecutive frames, not yet expired
    Missing(u32),
    /// Removed after exceeding the miss budget; the id is never handed out again
    Expired,
}

