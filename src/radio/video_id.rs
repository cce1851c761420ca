use std::sync::LazyLock;

use regex::Regex;

/// URL shapes that carry a video id, tried in order. The last one accepts a
/// bare id with nothing around it.
static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"youtube\.com/watch\?v=([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)",
        r"youtu\.be/([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)",
        r"youtube\.com/embed/([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)",
        r"^([A-Za-z0-9_-]{11})$",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

/// Pull the 11-character video id out of a watch URL, a short link, an embed
/// URL, or a bare id. The first matching shape wins.
pub fn extract_video_id(input: &str) -> Option<&str> {
    let input = input.trim();
    PATTERNS
        .iter()
        .find_map(|re| re.captures(input).and_then(|c| c.get(1)))
        .map(|m| m.as_str())
}
