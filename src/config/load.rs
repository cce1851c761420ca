use std::{env, path::PathBuf, str::FromStr};

use log::LevelFilter;

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then lets environment
/// variables (prefix `RADIOSYNC__`) override it, and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("RADIOSYNC")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if !self.radio.loop_epoch.is_finite() {
            return Err("radio.loop_epoch must be a finite number".to_string());
        }
        if self.radio.tick_ms == 0 {
            return Err("radio.tick_ms must be >= 1".to_string());
        }
        if self.radio.upcoming_count > 50 {
            return Err("radio.upcoming_count must be <= 50".to_string());
        }
        self.logging.level_filter()?;
        Ok(())
    }
}

impl super::schema::LoggingSettings {
    /// Parse `level` into a `log` filter.
    pub fn level_filter(&self) -> Result<LevelFilter, String> {
        LevelFilter::from_str(self.level.trim())
            .map_err(|_| format!("logging.level {:?} is not a log level", self.level))
    }
}

/// Resolve the config path from `RADIOSYNC_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("RADIOSYNC_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/radiosync/config.toml`
/// or `~/.config/radiosync/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("radiosync").join("config.toml"))
}
