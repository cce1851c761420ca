use log::{Level, LevelFilter};

use crate::config::LoggingSettings;

/// External crates only need to log warnings and errors
const ALLOWED_EXTERNAL_LEVELS: [Level; 2] = [Level::Warn, Level::Error];

/// Install the global logger.
///
/// Records go to the configured log file, and to stderr when `console` is set
/// (the one-shot `--now` mode). With neither, logging stays off so nothing
/// scribbles over the TUI.
pub fn init_logger(settings: &LoggingSettings, console: bool) {
    let level = match settings.level_filter() {
        Ok(level) => level,
        Err(msg) => {
            eprintln!("radiosync: {msg}, using info");
            LevelFilter::Info
        }
    };

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{:<5} {} {} {}",
                record.level(),
                chrono::Local::now().format("%H:%M:%S"),
                record.target(),
                message
            ))
        })
        .filter(move |meta| {
            if is_local(meta.target()) {
                meta.level() <= level
            } else {
                ALLOWED_EXTERNAL_LEVELS.contains(&meta.level())
            }
        });

    let mut has_output = false;
    if let Some(path) = &settings.file {
        match fern::log_file(path) {
            Ok(file) => {
                dispatch = dispatch.chain(file);
                has_output = true;
            }
            Err(e) => eprintln!("radiosync: cannot open log file {}: {e}", path.display()),
        }
    }
    if console {
        dispatch = dispatch.chain(std::io::stderr());
        has_output = true;
    }
    if !has_output {
        return;
    }

    if let Err(e) = dispatch.apply() {
        eprintln!("radiosync: logger already initialized: {e}");
    }
}

fn is_local(target: &str) -> bool {
    target.split("::").next() == Some(env!("CARGO_CRATE_NAME"))
}
