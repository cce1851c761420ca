use super::*;
use crate::library::{Location, Track};
use crate::radio::Station;

fn t(title: &str, duration: f64) -> Track {
    Track {
        id: title.into(),
        title: title.into(),
        artist: None,
        album: None,
        location: Location::Unknown,
        duration_secs: Some(duration),
        display: title.into(),
    }
}

fn app() -> App {
    let station = Station::new(vec![t("Alpha", 100.0), t("Beta", 50.0), t("Gamma", 10.0)], 0.0);
    App::new(station, "test".into())
}

#[test]
fn tick_follows_active_track() {
    let mut app = app();
    app.tick(120.0);
    assert_eq!(app.selected, 1);
    assert_eq!(app.radio_state().unwrap().offset_secs, 20.0);

    app.tick(155.0);
    assert_eq!(app.selected, 2);
}

#[test]
fn moving_the_cursor_stops_following_until_re_enabled() {
    let mut app = app();
    app.tick(10.0);
    app.follow_playback_off();
    app.next();
    app.next();
    assert_eq!(app.selected, 2);

    app.tick(11.0);
    assert_eq!(app.selected, 2);

    app.follow_playback_on();
    assert_eq!(app.selected, 0);
}

#[test]
fn cursor_wraps_both_ways() {
    let mut app = app();
    app.prev();
    assert_eq!(app.selected, 2);
    app.next();
    assert_eq!(app.selected, 0);
    app.select_last();
    assert_eq!(app.selected, 2);
    app.select_first();
    assert_eq!(app.selected, 0);
}

#[test]
fn empty_station_is_harmless() {
    let mut app = App::new(Station::new(Vec::new(), 0.0), "empty".into());
    app.tick(1000.0);
    app.next();
    app.prev();
    app.select_last();
    assert_eq!(app.selected, 0);
    assert!(!app.has_tracks());
    assert!(app.radio_state().is_none());
    assert!(app.upcoming(3).is_empty());
}

#[test]
fn upcoming_uses_last_tick() {
    let mut app = app();
    app.tick(95.0);
    let upcoming = app.upcoming(2);
    let next: Vec<&str> = upcoming.iter().map(|u| u.track.id.as_str()).collect();
    assert_eq!(next, vec!["Beta", "Gamma"]);
}
