use crate::library::Track;

/// Duration used for tracks that report none, or a non-positive one.
pub const FALLBACK_DURATION_SECS: f64 = 180.0;

/// Where the radio is at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadioState<'a> {
    pub active_track: &'a Track,
    /// Zero-based position of `active_track` in the playlist.
    pub active_track_index: usize,
    /// Seconds elapsed inside `active_track`.
    pub offset_secs: f64,
    /// Sum of all effective durations.
    pub loop_duration_secs: f64,
}

impl RadioState<'_> {
    /// Effective duration of the active track.
    pub fn track_duration_secs(&self) -> f64 {
        effective_duration(self.active_track)
    }

    /// Seconds left in the active track.
    pub fn remaining_secs(&self) -> f64 {
        (self.track_duration_secs() - self.offset_secs).max(0.0)
    }

    /// Fraction of the active track already played, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        let ratio = self.offset_secs / self.track_duration_secs();
        if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) }
    }
}

/// Duration of `track` with the fallback applied.
pub fn effective_duration(track: &Track) -> f64 {
    normalize_duration(track.duration_secs)
}

pub(super) fn normalize_duration(duration: Option<f64>) -> f64 {
    match duration {
        Some(d) if d.is_finite() && d > 0.0 => d,
        _ => FALLBACK_DURATION_SECS,
    }
}

/// Reduce `elapsed` into `[0, loop_duration)`.
///
/// `rem_euclid` may round up to exactly `loop_duration` for tiny negative
/// inputs; the track walk then falls through to the boundary case.
pub(super) fn position_in_loop(elapsed: f64, loop_duration: f64) -> f64 {
    elapsed.rem_euclid(loop_duration)
}

/// Compute which track is playing at `now_secs` and how far into it.
///
/// Returns `None` only when there is nothing to play (empty playlist). Every
/// other input, including epochs in the future or far in the past, yields a
/// state. If rounding leaves the position past the last track, the loop is
/// treated as starting over: index 0, offset 0.
pub fn compute_radio_state(
    playlist: &[Track],
    loop_epoch_secs: f64,
    now_secs: f64,
) -> Option<RadioState<'_>> {
    let durations: Vec<f64> = playlist.iter().map(effective_duration).collect();
    let loop_duration_secs: f64 = durations.iter().sum();
    if loop_duration_secs <= 0.0 {
        return None;
    }

    let position = position_in_loop(now_secs - loop_epoch_secs, loop_duration_secs);

    let mut accumulated = 0.0;
    for (index, (track, duration)) in playlist.iter().zip(&durations).enumerate() {
        if accumulated + duration > position {
            return Some(RadioState {
                active_track: track,
                active_track_index: index,
                offset_secs: position - accumulated,
                loop_duration_secs,
            });
        }
        accumulated += duration;
    }

    Some(RadioState {
        active_track: &playlist[0],
        active_track_index: 0,
        offset_secs: 0.0,
        loop_duration_secs,
    })
}
