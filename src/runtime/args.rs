use std::path::PathBuf;

/// Command line: `radiosync [--now] [PATH]`.
#[derive(Debug, Default, PartialEq)]
pub struct Args {
    /// Print the current state once and exit instead of starting the TUI.
    pub once: bool,
    pub help: bool,
    /// Playlist file or music directory.
    pub path: Option<PathBuf>,
}

pub const USAGE: &str = "usage: radiosync [--now] [PLAYLIST.toml | MUSIC_DIR]";

impl Args {
    pub fn parse<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut out = Args::default();
        for arg in args {
            match arg.as_str() {
                "--now" => out.once = true,
                "-h" | "--help" => out.help = true,
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(format!("unknown option {flag}"));
                }
                _ if out.path.is_some() => return Err(format!("unexpected argument {arg}")),
                _ => out.path = Some(PathBuf::from(arg)),
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, String> {
        Args::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parses_flags_and_path_in_any_order() {
        assert_eq!(parse(&[]).unwrap(), Args::default());
        let a = parse(&["--now", "radio.toml"]).unwrap();
        assert!(a.once);
        assert_eq!(a.path, Some(PathBuf::from("radio.toml")));
        let b = parse(&["music", "--now"]).unwrap();
        assert!(b.once);
        assert_eq!(b.path, Some(PathBuf::from("music")));
        assert!(parse(&["-h"]).unwrap().help);
    }

    #[test]
    fn rejects_unknown_flags_and_extra_paths() {
        assert!(parse(&["--loud"]).is_err());
        assert!(parse(&["a", "b"]).is_err());
    }
}
