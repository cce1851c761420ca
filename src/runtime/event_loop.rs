use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::config;
use crate::ui;

use super::clock;

/// State tracked by the runtime event loop across iterations.
#[derive(Default)]
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
    /// Index of the active track at the previous tick, for change logging.
    last_active: Option<usize>,
}

/// Main terminal event loop: recomputes the radio position every tick,
/// redraws, and handles input. Returns `Ok(())` when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    let tick = Duration::from_millis(settings.radio.tick_ms);

    loop {
        app.tick(clock::now_secs());

        let active = app.radio_state().map(|s| s.active_track_index);
        if active != state.last_active {
            if let Some(s) = app.radio_state() {
                debug!(
                    "now playing #{} {:?} at {:.0}s",
                    s.active_track_index + 1,
                    s.active_track.id,
                    s.offset_secs
                );
            }
            state.last_active = active;
        }

        terminal.draw(|f| ui::draw(f, app, &settings.ui, settings.radio.upcoming_count))?;

        // Sleep until the next tick unless a key arrives first.
        if event::poll(clock::until_next_tick(tick))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, app, state) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Apply one key press. Returns `true` when the app should quit.
pub fn handle_key_event(key: KeyEvent, app: &mut App, state: &mut EventLoopState) -> bool {
    let was_pending_gg = std::mem::take(&mut state.pending_gg);

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('j') | KeyCode::Down => {
            app.follow_playback_off();
            app.next();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.follow_playback_off();
            app.prev();
        }
        KeyCode::Char('g') => {
            if was_pending_gg {
                app.follow_playback_off();
                app.select_first();
            } else {
                state.pending_gg = true;
            }
        }
        KeyCode::Char('G') => {
            app.follow_playback_off();
            app.select_last();
        }
        KeyCode::Char('f') | KeyCode::Enter => app.follow_playback_on(),
        KeyCode::Char('K') => app.toggle_metadata_window(),
        _ => {}
    }

    false
}
