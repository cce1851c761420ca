use crate::library::Track;

use super::position::{RadioState, normalize_duration, position_in_loop};

/// A track that will start after the current one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpNext<'a> {
    pub track: &'a Track,
    pub index: usize,
    /// Seconds from "now" until this track begins.
    pub starts_in_secs: f64,
}

/// A playlist bound to its loop epoch, with durations resolved up front.
///
/// Owned by whoever drives the display and passed around by reference; it is
/// never mutated after construction, so every lookup is a pure function of
/// the instant.
#[derive(Debug, Clone)]
pub struct Station {
    tracks: Vec<Track>,
    loop_epoch: f64,
    durations: Vec<f64>,
    /// `ends[i]` is the loop position at which track `i` stops playing.
    ends: Vec<f64>,
}

impl Station {
    pub fn new(tracks: Vec<Track>, loop_epoch: f64) -> Self {
        let durations: Vec<f64> = tracks.iter().map(|t| normalize_duration(t.duration_secs)).collect();
        let mut ends = Vec::with_capacity(durations.len());
        let mut accumulated = 0.0;
        for d in &durations {
            accumulated += d;
            ends.push(accumulated);
        }

        Self {
            tracks,
            loop_epoch,
            durations,
            ends,
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn loop_epoch(&self) -> f64 {
        self.loop_epoch
    }

    pub fn loop_duration_secs(&self) -> f64 {
        self.ends.last().copied().unwrap_or(0.0)
    }

    /// Effective duration of the track at `index`.
    pub fn duration_of(&self, index: usize) -> Option<f64> {
        self.durations.get(index).copied()
    }

    fn start_of(&self, index: usize) -> f64 {
        if index == 0 { 0.0 } else { self.ends[index - 1] }
    }

    /// Same result as [`super::compute_radio_state`] over this playlist and epoch.
    pub fn state_at(&self, now_secs: f64) -> Option<RadioState<'_>> {
        let loop_duration_secs = self.loop_duration_secs();
        if loop_duration_secs <= 0.0 {
            return None;
        }

        let position = position_in_loop(now_secs - self.loop_epoch, loop_duration_secs);
        let index = self.ends.partition_point(|&end| end <= position);

        if index < self.tracks.len() && !position.is_nan() {
            Some(RadioState {
                active_track: &self.tracks[index],
                active_track_index: index,
                offset_secs: position - self.start_of(index),
                loop_duration_secs,
            })
        } else {
            Some(RadioState {
                active_track: &self.tracks[0],
                active_track_index: 0,
                offset_secs: 0.0,
                loop_duration_secs,
            })
        }
    }

    /// The `count` tracks that follow the active one, in loop order.
    ///
    /// Wraps around the playlist, so a single-track station lists itself.
    pub fn upcoming(&self, now_secs: f64, count: usize) -> Vec<UpNext<'_>> {
        let Some(state) = self.state_at(now_secs) else {
            return Vec::new();
        };

        let len = self.tracks.len();
        let mut starts_in = state.remaining_secs();
        let mut out = Vec::with_capacity(count);
        for step in 1..=count {
            let index = (state.active_track_index + step) % len;
            out.push(UpNext {
                track: &self.tracks[index],
                index,
                starts_in_secs: starts_in,
            });
            starts_in += self.durations[index];
        }
        out
    }
}
