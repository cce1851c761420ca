//! Synchronized radio position.
//!
//! Every listener sharing a playlist and a loop epoch computes the same
//! `RadioState` from their own clock, so playback stays in sync without any
//! coordination. The calculator is pure: the caller supplies "now".

mod position;
mod station;
mod video_id;

pub use position::{FALLBACK_DURATION_SECS, RadioState, compute_radio_state, effective_duration};
pub use station::{Station, UpNext};
pub use video_id::extract_video_id;

#[cfg(test)]
mod tests;
