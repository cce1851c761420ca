use std::env;
use std::path::PathBuf;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use log::{info, warn};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::config;
use crate::library::{Track, load_source};
use crate::logging;
use crate::radio::Station;
use crate::ui;

mod args;
mod clock;
mod event_loop;
mod settings;

use args::{Args, USAGE};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse(env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let settings = settings::load_settings();
    logging::init_logger(&settings.logging, args.once);

    let path = args
        .path
        .or_else(|| settings.radio.playlist.clone())
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    let source = load_source(&path, &settings.library)?;
    let station = build_station(source.tracks, source.loop_epoch, &settings);
    info!(
        "loaded {:?}: {} tracks, loop of {:.0}s",
        source.name,
        station.len(),
        station.loop_duration_secs()
    );

    let mut app = App::new(station, source.name);
    app.follow_playback = settings.ui.follow_playback;

    if args.once {
        app.tick(clock::now_secs());
        println!("{}", ui::now_playing_line(&app, &settings.ui));
        return Ok(());
    }

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = {
        let mut state = event_loop::EventLoopState::default();
        event_loop::run(&mut terminal, &settings, &mut app, &mut state)
    };

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}

/// Bind tracks to the loop epoch: the source's own epoch wins over the
/// configured one, unless it is not a usable number.
fn build_station(
    tracks: Vec<Track>,
    source_epoch: Option<f64>,
    settings: &config::Settings,
) -> Station {
    let epoch = match source_epoch {
        Some(e) if e.is_finite() => e,
        Some(e) => {
            warn!("ignoring playlist loop_epoch {e}, using {}", settings.radio.loop_epoch);
            settings.radio.loop_epoch
        }
        None => settings.radio.loop_epoch,
    };
    if tracks.is_empty() {
        warn!("playlist is empty, nothing to play");
    }
    Station::new(tracks, epoch)
}
