//! Default pgpass file location.
//!
//! Resolution follows the standard PostgreSQL cascade: the `PGPASSFILE`
//! environment variable wins, otherwise a platform default applies.

use std::env;
use std::path::PathBuf;

/// Environment variable overriding the default pgpass location.
const PGPASSFILE: &str = "PGPASSFILE";

/// Platform path template for the default pgpass location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PathTemplate {
    /// `%APPDATA%/postgresql/pgpass.conf`
    Windows,
    /// `~/.pgpass`
    Unix,
}

impl PathTemplate {
    /// Classify an OS identifier. An identifier containing `win` selects
    /// the Windows template; everything else, including unrecognized
    /// systems, falls back to the Unix one.
    fn from_os_name(os: &str) -> Self {
        if os.to_lowercase().contains("win") {
            PathTemplate::Windows
        } else {
            PathTemplate::Unix
        }
    }

    /// Build the default path, or `None` when the base directory cannot
    /// be determined.
    fn resolve(self) -> Option<PathBuf> {
        match self {
            PathTemplate::Windows => env::var_os("APPDATA")
                .map(|appdata| PathBuf::from(appdata).join("postgresql").join("pgpass.conf")),
            PathTemplate::Unix => dirs::home_dir().map(|home| home.join(".pgpass")),
        }
    }
}

/// Resolve the default pgpass location.
///
/// A non-empty `PGPASSFILE` is returned verbatim, with no further
/// interpretation. Otherwise the platform default applies:
/// `%APPDATA%/postgresql/pgpass.conf` on Windows, `~/.pgpass` everywhere
/// else. Returns `None` when neither can be determined.
///
/// The resolved path is not checked for existence; a lookup against a
/// path that turns out not to exist fails at the read step.
pub fn default_path() -> Option<PathBuf> {
    resolve_default(env::consts::OS)
}

fn resolve_default(os: &str) -> Option<PathBuf> {
    match env::var(PGPASSFILE) {
        Ok(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => PathTemplate::from_os_name(os).resolve(),
    }
}
