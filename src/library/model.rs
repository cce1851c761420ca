use std::path::PathBuf;

/// One entry of a radio playlist.
///
/// `duration_secs` is kept exactly as the source reported it; the radio core
/// substitutes its fallback for missing or non-positive values.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    /// Opaque identifier, unique within a playlist.
    pub id: String,
    pub title: String,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub location: Location,
    pub duration_secs: Option<f64>,
    pub display: String,
}

/// Where a track can be found. Irrelevant to position math.
#[derive(Clone, Debug, PartialEq)]
pub enum Location {
    Url(String),
    File(PathBuf),
    Unknown,
}

impl Location {
    /// Human readable form used by the UI.
    pub fn describe(&self) -> String {
        match self {
            Location::Url(u) => u.clone(),
            Location::File(p) => p.display().to_string(),
            Location::Unknown => "-".to_string(),
        }
    }

    /// File stem or last URL segment, used for the `filename` display field.
    pub fn stem(&self) -> Option<&str> {
        match self {
            Location::File(p) => p.file_stem().and_then(|s| s.to_str()),
            Location::Url(u) => u
                .trim_end_matches('/')
                .rsplit('/')
                .next()
                .filter(|s| !s.is_empty()),
            Location::Unknown => None,
        }
    }
}
