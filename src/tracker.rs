mod config;
mod id_tracker;
mod matching;
mod rect;
pub mod similarity;
mod track;
mod track_state;

pub use config::TrackerConfig;
pub use id_tracker::{IdTracker, ids_to_signed};
pub use matching::{AssignmentResult, greedy_assignment};
pub use rect::Rect;
pub use track::{Track, TrackId};
pub use track_state::TrackState;
