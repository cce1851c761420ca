//! Application model: the station being displayed plus cursor state.

use crate::radio::{RadioState, Station, UpNext};

/// The main application model.
pub struct App {
    pub station: Station,
    /// Name of the playlist source, shown in the status line.
    pub source_name: String,
    /// Instant (Unix seconds) of the last tick.
    pub now_secs: f64,
    pub selected: usize,
    pub follow_playback: bool,
    pub metadata_window: bool,
}

impl App {
    /// Create a new `App` around `station`.
    pub fn new(station: Station, source_name: String) -> Self {
        Self {
            station,
            source_name,
            now_secs: 0.0,
            selected: 0,
            follow_playback: true,
            metadata_window: false,
        }
    }

    /// Advance to `now_secs`, moving the cursor along when following playback.
    pub fn tick(&mut self, now_secs: f64) {
        self.now_secs = now_secs;
        if !self.follow_playback {
            return;
        }
        if let Some(idx) = self.radio_state().map(|s| s.active_track_index) {
            self.selected = idx;
        }
    }

    /// What is playing at the last ticked instant.
    pub fn radio_state(&self) -> Option<RadioState<'_>> {
        self.station.state_at(self.now_secs)
    }

    pub fn upcoming(&self, count: usize) -> Vec<UpNext<'_>> {
        self.station.upcoming(self.now_secs, count)
    }

    pub fn has_tracks(&self) -> bool {
        !self.station.is_empty()
    }

    pub fn toggle_metadata_window(&mut self) {
        self.metadata_window = !self.metadata_window;
    }

    /// Resume following the active track and jump to it.
    pub fn follow_playback_on(&mut self) {
        self.follow_playback = true;
        let now = self.now_secs;
        self.tick(now);
    }

    pub fn follow_playback_off(&mut self) {
        self.follow_playback = false;
    }

    /// Move the cursor down, wrapping at the end.
    pub fn next(&mut self) {
        let len = self.station.len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// Move the cursor up, wrapping at the top.
    pub fn prev(&mut self) {
        let len = self.station.len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.station.len().saturating_sub(1);
    }
}
