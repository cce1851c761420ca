//! Playlist sources for the radio.
//!
//! A playlist comes either from a TOML playlist file or from scanning a local
//! music directory. Either way the result is an ordered `Vec<Track>`; the radio
//! core never fetches or validates anything itself.

use std::path::Path;

use crate::config::LibrarySettings;

mod display;
mod model;
mod playlist;
mod scan;

pub use model::{Location, Track};
pub use playlist::{PlaylistError, PlaylistFile, load_playlist, parse_playlist};
pub use scan::scan;

/// Tracks plus whatever the source says about how to loop them.
#[derive(Debug, Clone)]
pub struct Source {
    pub name: String,
    pub loop_epoch: Option<f64>,
    pub tracks: Vec<Track>,
}

/// Load a playlist from `path`: directories are scanned, anything else is
/// parsed as a playlist file.
pub fn load_source(path: &Path, settings: &LibrarySettings) -> Result<Source, PlaylistError> {
    if path.is_dir() {
        return Ok(Source {
            name: path.display().to_string(),
            loop_epoch: None,
            tracks: scan(path, settings),
        });
    }

    let file = load_playlist(path, settings)?;
    Ok(Source {
        name: file.name.unwrap_or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("playlist")
                .to_string()
        }),
        loop_epoch: file.loop_epoch,
        tracks: file.tracks,
    })
}
