//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::config::{TimeField, TrackDisplayField, UiSettings};
use crate::library::Track;
use crate::radio::{RadioState, effective_duration};

const CONTROLS: [(&str, &str); 6] = [
    ("j/k", "up/down"),
    ("gg/G", "top/bottom"),
    ("f/enter", "follow now playing"),
    ("K", "metadata"),
    ("q", "quit"),
    ("esc", "quit"),
];

fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{}] {}", k, v))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Format whole seconds as `MM:SS` (or `H:MM:SS` past an hour).
pub fn format_mmss(secs: f64) -> String {
    let secs = if secs.is_finite() && secs > 0.0 {
        secs.floor() as u64
    } else {
        0
    };
    if secs >= 3600 {
        format!("{}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
    } else {
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}

/// Build the "now playing" track text according to `ui` settings.
pub fn now_playing_track_text(track: &Track, ui: &UiSettings) -> String {
    let mut parts: Vec<String> = Vec::new();

    for f in &ui.now_playing_track_fields {
        match f {
            TrackDisplayField::Display => {
                if !track.display.trim().is_empty() {
                    parts.push(track.display.clone());
                }
            }
            TrackDisplayField::Title => {
                if !track.title.trim().is_empty() {
                    parts.push(track.title.clone());
                }
            }
            TrackDisplayField::Artist => {
                if let Some(a) = track.artist.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
                    parts.push(a.to_string());
                }
            }
            TrackDisplayField::Album => {
                if let Some(a) = track.album.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
                    parts.push(a.to_string());
                }
            }
            TrackDisplayField::Filename => {
                if let Some(stem) = track.location.stem().filter(|s| !s.trim().is_empty()) {
                    parts.push(stem.to_string());
                }
            }
            TrackDisplayField::Location => parts.push(track.location.describe()),
        }
    }

    if parts.is_empty() {
        track.display.clone()
    } else {
        parts.join(&ui.now_playing_track_separator)
    }
}

/// Build the now-playing time text (elapsed/total/remaining) per `UiSettings`.
pub fn now_playing_time_text(state: &RadioState<'_>, ui: &UiSettings) -> Option<String> {
    let parts: Vec<String> = ui
        .now_playing_time_fields
        .iter()
        .map(|f| match f {
            TimeField::Elapsed => format_mmss(state.offset_secs),
            TimeField::Total => format_mmss(state.track_duration_secs()),
            TimeField::Remaining => format!("-{}", format_mmss(state.remaining_secs())),
        })
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(&ui.now_playing_time_separator))
    }
}

/// One-line summary used by the status box and by `--now`.
pub fn now_playing_line(app: &App, ui: &UiSettings) -> String {
    match app.radio_state() {
        Some(state) => {
            let song = now_playing_track_text(state.active_track, ui);
            let position = format!("{}/{}", state.active_track_index + 1, app.station.len());
            match now_playing_time_text(&state, ui) {
                Some(time) => format!("{} {} [{}]", position, song, time),
                None => format!("{} {}", position, song),
            }
        }
        None => "nothing to play".to_string(),
    }
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn left_padding() -> Padding {
    Padding {
        left: 1,
        right: 0,
        top: 0,
        bottom: 0,
    }
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings, upcoming_count: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" radiosync ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let state = app.radio_state();

    // Status box
    let status = {
        let mut parts: Vec<String> = vec![format!("Song: {}", now_playing_line(app, ui_settings))];
        if let Some(s) = &state {
            parts.push(format!("Loop: {}", format_mmss(s.loop_duration_secs)));
        }
        parts.push(if app.follow_playback {
            "CURSOR: Follow".to_string()
        } else {
            "CURSOR: Free-roam".to_string()
        });
        parts.push(format!("Source: {}", app.source_name));
        parts.join(" • ")
    };
    let status_par = Paragraph::new(status)
        .block(Block::bordered().padding(left_padding()).title(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[1]);

    // Progress through the active track
    let (ratio, label) = match &state {
        Some(s) => (
            s.progress(),
            format!("{} / {}", format_mmss(s.offset_secs), format_mmss(s.track_duration_secs())),
        ),
        None => (0.0, "--:--".to_string()),
    };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" now playing "))
        .gauge_style(Style::default().add_modifier(Modifier::BOLD))
        .ratio(ratio)
        .label(label);
    frame.render_widget(gauge, chunks[2]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[3]);

    // Playlist, windowed around the cursor.
    {
        let tracks = app.station.tracks();
        let active = state.as_ref().map(|s| s.active_track_index);
        let total = tracks.len();
        let list_height = body[0].height.saturating_sub(2) as usize;
        let (start, end) = if total <= list_height || list_height == 0 {
            (0, total)
        } else {
            let half = list_height / 2;
            let mut start = app.selected.saturating_sub(half);
            if start + list_height > total {
                start = total - list_height;
            }
            (start, start + list_height)
        };

        let visible_items: Vec<ListItem> = tracks[start..end]
            .iter()
            .enumerate()
            .map(|(offset, track)| {
                let i = start + offset;
                let marker = if Some(i) == active { "♪ " } else { "  " };
                ListItem::new(format!(
                    "{}{} ({})",
                    marker,
                    track.display,
                    format_mmss(effective_duration(track))
                ))
            })
            .collect();

        let list = List::new(visible_items)
            .block(Block::default().borders(Borders::ALL).title(" playlist "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut list_state = ratatui::widgets::ListState::default();
        if total > 0 {
            list_state.select(Some(app.selected.saturating_sub(start)));
        }
        frame.render_stateful_widget(list, body[0], &mut list_state);
    }

    let upcoming_items: Vec<ListItem> = app
        .upcoming(upcoming_count)
        .iter()
        .map(|u| ListItem::new(format!("in {}  {}", format_mmss(u.starts_in_secs), u.track.display)))
        .collect();
    let upcoming = List::new(upcoming_items)
        .block(Block::default().borders(Borders::ALL).title(" up next "));
    frame.render_widget(upcoming, body[1]);

    if app.metadata_window {
        let popup_area = centered_rect_sized(72, 9, body[0]);
        frame.render_widget(Clear, popup_area);

        let meta = match app.station.tracks().get(app.selected) {
            Some(track) => format!(
                "Title: {}\nArtist: {}\nAlbum: {}\nDuration: {}\nId: {}\nLocation: {}",
                track.title,
                track.artist.as_deref().unwrap_or("-"),
                track.album.as_deref().unwrap_or("-"),
                match track.duration_secs {
                    Some(d) if d > 0.0 => format_mmss(d),
                    _ => format!("{} (fallback)", format_mmss(effective_duration(track))),
                },
                track.id,
                track.location.describe()
            ),
            None => "No track selected".to_string(),
        };
        let meta_paragraph = Paragraph::new(meta)
            .block(
                Block::default()
                    .padding(left_padding())
                    .borders(Borders::ALL)
                    .title(" metadata (K closes) "),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(meta_paragraph, popup_area);
    }

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(left_padding()),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::Location;
    use crate::radio::Station;

    fn track(title: &str, artist: Option<&str>, duration: Option<f64>) -> Track {
        Track {
            id: title.into(),
            title: title.into(),
            artist: artist.map(Into::into),
            album: None,
            location: Location::Url(format!("https://youtu.be/{title}")),
            duration_secs: duration,
            display: title.into(),
        }
    }

    #[test]
    fn format_mmss_handles_minutes_hours_and_junk() {
        assert_eq!(format_mmss(0.0), "00:00");
        assert_eq!(format_mmss(59.9), "00:59");
        assert_eq!(format_mmss(213.0), "03:33");
        assert_eq!(format_mmss(3725.0), "1:02:05");
        assert_eq!(format_mmss(-4.0), "00:00");
        assert_eq!(format_mmss(f64::NAN), "00:00");
    }

    #[test]
    fn now_playing_track_text_joins_configured_fields() {
        let t = track("Song", Some(" Artist "), None);
        let ui = UiSettings {
            now_playing_track_fields: vec![TrackDisplayField::Artist, TrackDisplayField::Title],
            now_playing_track_separator: " ~ ".into(),
            ..UiSettings::default()
        };
        assert_eq!(now_playing_track_text(&t, &ui), "Artist ~ Song");

        let ui = UiSettings {
            now_playing_track_fields: vec![TrackDisplayField::Album],
            ..UiSettings::default()
        };
        assert_eq!(now_playing_track_text(&t, &ui), "Song");
    }

    #[test]
    fn now_playing_line_reports_position_and_times() {
        let station = Station::new(vec![track("A", None, Some(100.0)), track("B", None, None)], 0.0);
        let mut app = App::new(station, "test".into());
        app.tick(130.0);
        assert_eq!(
            now_playing_line(&app, &UiSettings::default()),
            "2/2 B [00:30 / 03:00 / -02:30]"
        );

        let ui = UiSettings {
            now_playing_time_fields: Vec::new(),
            ..UiSettings::default()
        };
        assert_eq!(now_playing_line(&app, &ui), "2/2 B");
    }

    #[test]
    fn now_playing_line_for_empty_station() {
        let app = App::new(Station::new(Vec::new(), 0.0), "none".into());
        assert_eq!(now_playing_line(&app, &UiSettings::default()), "nothing to play");
    }

    #[test]
    fn controls_text_lists_every_binding() {
        let text = controls_text();
        assert!(text.starts_with("[j/k] up/down"));
        assert!(text.contains("[K] metadata"));
    }
}
