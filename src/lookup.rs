//! Password lookup over parsed pgpass entries.
//!
//! Every call re-reads and re-parses the file; nothing is cached between
//! calls, so external changes to the file show up on the next lookup.

use crate::entry::PgPassEntry;
use crate::error::{Error, Result};
use crate::parser::parse_pgpass;
use crate::paths::default_path;
use std::path::Path;

/// Read the password for a connection tuple from the default pgpass
/// location.
///
/// Returns `Ok(None)` when no entry matches. Fails with
/// [`Error::DefaultPathUnavailable`] when no default location can be
/// resolved, and like [`get_from_file`] otherwise.
pub fn get(host: &str, port: &str, db_name: &str, user: &str) -> Result<Option<String>> {
    let path = default_path().ok_or(Error::DefaultPathUnavailable)?;
    get_from_file(&path, host, port, db_name, user)
}

/// Read the password for a connection tuple from the pgpass file at
/// `path`.
///
/// Entries are scanned in file order and the first match wins, so more
/// specific entries should come earlier in the file. Entry fields holding
/// the literal `*` match any query value; query values are compared
/// exactly. Returns `Ok(None)` when no entry matches; absence is not an
/// error, unlike a missing or unreadable file.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
///
/// let password = pgpass_rs::get_from_file(
///     Path::new("/run/secrets/pgpass"),
///     "db.example.com",
///     "5432",
///     "orders",
///     "app",
/// )?;
/// # Ok::<(), pgpass_rs::Error>(())
/// ```
pub fn get_from_file(
    path: &Path,
    host: &str,
    port: &str,
    db_name: &str,
    user: &str,
) -> Result<Option<String>> {
    Ok(get_all_from_file(path)?
        .into_iter()
        .find(|entry| entry.matches(host, port, db_name, user))
        .map(|entry| entry.pass))
}

/// Return every entry from the default pgpass location, in file order.
pub fn get_all() -> Result<Vec<PgPassEntry>> {
    let path = default_path().ok_or(Error::DefaultPathUnavailable)?;
    get_all_from_file(&path)
}

/// Return every entry from the pgpass file at `path`, in file order.
///
/// Comment lines and malformed lines are skipped; no matching is
/// performed. Fails with [`Error::FileNotFound`] when the file does not
/// exist and [`Error::ReadFile`] for any other I/O failure.
pub fn get_all_from_file(path: &Path) -> Result<Vec<PgPassEntry>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| Error::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(parse_pgpass(&content))
}
