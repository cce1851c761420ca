//! Playlist files: an ordered list of tracks in TOML, optionally carrying the
//! loop epoch every listener should share.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use log::warn;
use serde::Deserialize;

use crate::config::LibrarySettings;
use crate::radio::extract_video_id;

use super::display::display_from_fields;
use super::model::{Location, Track};

#[derive(Debug, thiserror::Error)]
pub enum PlaylistError {
    #[error("failed to read playlist {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid playlist: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize)]
struct RawPlaylist {
    name: Option<String>,
    loop_epoch: Option<f64>,
    #[serde(default, rename = "track")]
    tracks: Vec<RawTrack>,
}

#[derive(Debug, Deserialize)]
struct RawTrack {
    id: Option<String>,
    title: Option<String>,
    artist: Option<String>,
    album: Option<String>,
    url: Option<String>,
    duration: Option<f64>,
}

/// A parsed playlist file.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistFile {
    pub name: Option<String>,
    /// Overrides the configured loop epoch when present.
    pub loop_epoch: Option<f64>,
    pub tracks: Vec<Track>,
}

/// Read and parse a playlist file from disk.
pub fn load_playlist(path: &Path, settings: &LibrarySettings) -> Result<PlaylistFile, PlaylistError> {
    let text = std::fs::read_to_string(path).map_err(|source| PlaylistError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_playlist(&text, settings)
}

/// Parse playlist TOML. Track order is the order of the `[[track]]` tables.
pub fn parse_playlist(text: &str, settings: &LibrarySettings) -> Result<PlaylistFile, PlaylistError> {
    let raw: RawPlaylist = toml::from_str(text)?;

    let mut seen: HashSet<String> = HashSet::new();
    let tracks: Vec<Track> = raw
        .tracks
        .into_iter()
        .enumerate()
        .map(|(i, t)| {
            let track = into_track(i, t, settings);
            if !seen.insert(track.id.clone()) {
                warn!("duplicate track id {:?} at position {}", track.id, i + 1);
            }
            track
        })
        .collect();

    Ok(PlaylistFile {
        name: raw.name.filter(|n| !n.trim().is_empty()),
        loop_epoch: raw.loop_epoch,
        tracks,
    })
}

fn resolve_id(index: usize, id: Option<&str>, url: Option<&str>) -> String {
    if let Some(id) = id.map(str::trim).filter(|s| !s.is_empty()) {
        return id.to_string();
    }
    if let Some(url) = url.map(str::trim).filter(|s| !s.is_empty()) {
        return extract_video_id(url).unwrap_or(url).to_string();
    }
    format!("track-{}", index + 1)
}

fn into_track(index: usize, raw: RawTrack, settings: &LibrarySettings) -> Track {
    let id = resolve_id(index, raw.id.as_deref(), raw.url.as_deref());
    let location = match raw.url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) {
        Some(u) => Location::Url(u),
        None => Location::Unknown,
    };
    let title = raw
        .title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| id.clone());
    let artist = raw.artist.map(|a| a.trim().to_string()).filter(|a| !a.is_empty());
    let album = raw.album.map(|a| a.trim().to_string()).filter(|a| !a.is_empty());

    let display = display_from_fields(
        &location,
        &title,
        artist.as_deref(),
        album.as_deref(),
        &settings.display_fields,
        &settings.display_separator,
    );

    Track {
        id,
        title,
        artist,
        album,
        location,
        duration_secs: raw.duration,
        display,
    }
}
