use super::*;
use crate::library::{Location, Track};

fn t(id: &str, duration: Option<f64>) -> Track {
    Track {
        id: id.into(),
        title: id.into(),
        artist: None,
        album: None,
        location: Location::Unknown,
        duration_secs: duration,
        display: id.into(),
    }
}

fn ab() -> Vec<Track> {
    vec![t("A", Some(100.0)), t("B", Some(50.0))]
}

fn summary(state: Option<RadioState<'_>>) -> Option<(&str, usize, f64)> {
    state.map(|s| (s.active_track.id.as_str(), s.active_track_index, s.offset_secs))
}

#[test]
fn two_track_loop_scenario() {
    let playlist = ab();
    assert_eq!(summary(compute_radio_state(&playlist, 0.0, 30.0)), Some(("A", 0, 30.0)));
    assert_eq!(summary(compute_radio_state(&playlist, 0.0, 120.0)), Some(("B", 1, 20.0)));
    assert_eq!(summary(compute_radio_state(&playlist, 0.0, 150.0)), Some(("A", 0, 0.0)));
    assert_eq!(summary(compute_radio_state(&playlist, 0.0, -20.0)), Some(("B", 1, 30.0)));

    let state = compute_radio_state(&playlist, 0.0, 30.0).unwrap();
    assert_eq!(state.loop_duration_secs, 150.0);
}

#[test]
fn empty_playlist_has_no_state() {
    assert!(compute_radio_state(&[], 0.0, 1234.0).is_none());
    let station = Station::new(Vec::new(), 0.0);
    assert!(station.state_at(1234.0).is_none());
    assert!(station.upcoming(1234.0, 3).is_empty());
    assert_eq!(station.loop_duration_secs(), 0.0);
}

#[test]
fn missing_zero_and_negative_durations_fall_back_to_180() {
    let playlist = vec![
        t("none", None),
        t("zero", Some(0.0)),
        t("neg", Some(-5.0)),
        t("nan", Some(f64::NAN)),
    ];
    for track in &playlist {
        assert_eq!(effective_duration(track), FALLBACK_DURATION_SECS);
    }

    let s = compute_radio_state(&playlist, 0.0, 200.0).unwrap();
    assert_eq!(s.loop_duration_secs, 720.0);
    assert_eq!(s.active_track_index, 1);
    assert_eq!(s.offset_secs, 20.0);
}

#[test]
fn non_empty_playlists_always_have_a_state_within_the_track() {
    let playlist = vec![
        t("a", Some(3.5)),
        t("b", None),
        t("c", Some(61.25)),
        t("d", Some(0.0)),
        t("e", Some(1.0)),
    ];
    let epochs = [0.0, -1.0e9, 1.0e9, 1_704_067_200.0, 42.75];
    for epoch in epochs {
        for now in (-2_000..2_000).map(|n| n as f64 * 7.3) {
            let s = compute_radio_state(&playlist, epoch, now).expect("state");
            assert!(s.offset_secs >= 0.0, "offset {} at now={now}", s.offset_secs);
            assert!(s.offset_secs < s.track_duration_secs());
            assert!(s.offset_secs < s.loop_duration_secs);
        }
    }
}

#[test]
fn state_repeats_every_loop() {
    let playlist = vec![t("a", Some(100.0)), t("b", Some(50.0)), t("c", None)];
    let loop_len = 330.0;
    for now in [0.0, 17.0, 99.0, 100.0, 149.0, 329.0, -1.0] {
        let base = summary(compute_radio_state(&playlist, 5.0, now));
        for k in [-3.0, -1.0, 1.0, 2.0, 1000.0] {
            assert_eq!(
                summary(compute_radio_state(&playlist, 5.0, now + k * loop_len)),
                base,
                "now={now} k={k}"
            );
        }
    }
}

#[test]
fn offset_advances_one_second_per_second_inside_a_track() {
    let playlist = ab();
    let mut prev = compute_radio_state(&playlist, 0.0, 0.0).unwrap();
    for now in 1..100 {
        let s = compute_radio_state(&playlist, 0.0, now as f64).unwrap();
        assert_eq!(s.active_track_index, prev.active_track_index);
        assert_eq!(s.offset_secs, prev.offset_secs + 1.0);
        prev = s;
    }
    let next = compute_radio_state(&playlist, 0.0, 100.0).unwrap();
    assert_eq!((next.active_track_index, next.offset_secs), (1, 0.0));
}

#[test]
fn single_track_and_fractional_durations() {
    let single = vec![t("only", Some(10.0))];
    let s = compute_radio_state(&single, 0.0, 25.0).unwrap();
    assert_eq!((s.active_track_index, s.offset_secs), (0, 5.0));

    let fractional = vec![t("x", Some(0.5)), t("y", Some(0.25))];
    let s = compute_radio_state(&fractional, 0.0, 0.625).unwrap();
    assert_eq!((s.active_track_index, s.offset_secs), (1, 0.125));
}

#[test]
fn walk_fall_through_resets_to_first_track() {
    // rem_euclid of a tiny negative elapsed rounds up to the full loop length.
    let playlist = vec![t("a", Some(0.1)), t("b", Some(0.2))];
    let s = compute_radio_state(&playlist, 1e-17, 0.0).unwrap();
    assert_eq!(s.active_track_index, 0);
    assert!(s.offset_secs >= 0.0 && s.offset_secs < 0.1);
}

#[test]
fn does_not_mutate_inputs() {
    let playlist = vec![t("a", None), t("b", Some(-1.0))];
    let before = playlist.clone();
    let _ = compute_radio_state(&playlist, 0.0, 999.0);
    assert_eq!(playlist, before);
}

#[test]
fn progress_and_remaining() {
    let playlist = ab();
    let s = compute_radio_state(&playlist, 0.0, 125.0).unwrap();
    assert_eq!(s.remaining_secs(), 25.0);
    assert_eq!(s.progress(), 0.5);
}

#[test]
fn station_matches_free_function() {
    let tracks = vec![
        t("a", Some(12.5)),
        t("b", None),
        t("c", Some(0.0)),
        t("d", Some(33.3)),
        t("e", Some(0.7)),
    ];
    let epoch = 1_704_067_200.0;
    let station = Station::new(tracks.clone(), epoch);
    assert_eq!(station.len(), 5);
    assert_eq!(station.duration_of(2), Some(180.0));
    assert_eq!(station.duration_of(9), None);

    for n in -500..3_000 {
        let now = epoch + n as f64 * 0.9;
        let expected = compute_radio_state(&tracks, epoch, now);
        assert_eq!(station.state_at(now), expected, "now={now}");
    }
}

#[test]
fn station_upcoming_wraps_and_counts_down() {
    let station = Station::new(ab(), 0.0);

    let next = station.upcoming(30.0, 3);
    let got: Vec<(usize, f64)> = next.iter().map(|u| (u.index, u.starts_in_secs)).collect();
    assert_eq!(got, vec![(1, 70.0), (0, 120.0), (1, 220.0)]);

    let single = Station::new(vec![t("only", Some(10.0))], 0.0);
    let next = single.upcoming(4.0, 1);
    assert_eq!(next.len(), 1);
    assert_eq!(next[0].track.id, "only");
    assert_eq!(next[0].starts_in_secs, 6.0);
}

#[test]
fn extract_video_id_recognizes_known_shapes() {
    assert_eq!(extract_video_id("https://youtu.be/dQw4w9WgXcQ"), Some("dQw4w9WgXcQ"));
    assert_eq!(extract_video_id("dQw4w9WgXcQ"), Some("dQw4w9WgXcQ"));
    assert_eq!(extract_video_id("  dQw4w9WgXcQ\n"), Some("dQw4w9WgXcQ"));
    assert_eq!(
        extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s"),
        Some("dQw4w9WgXcQ")
    );
    assert_eq!(
        extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1"),
        Some("dQw4w9WgXcQ")
    );
    assert_eq!(extract_video_id("youtu.be/a_b-c1234XY"), Some("a_b-c1234XY"));
}

#[test]
fn extract_video_id_rejects_everything_else() {
    assert_eq!(extract_video_id("not a url"), None);
    assert_eq!(extract_video_id(""), None);
    assert_eq!(extract_video_id("dQw4w9WgXc"), None);
    assert_eq!(extract_video_id("dQw4w9WgXcQQ"), None);
    assert_eq!(extract_video_id("https://youtu.be/short"), None);
    assert_eq!(extract_video_id("https://vimeo.com/dQw4w9WgXcQ"), None);
}

#[test]
fn extract_video_id_prefers_watch_form() {
    let both = "https://youtube.com/watch?v=AAAAAAAAAAA https://youtu.be/BBBBBBBBBBB";
    assert_eq!(extract_video_id(both), Some("AAAAAAAAAAA"));
}
