//! The pgpass entry value type.

use std::fmt;

/// Entry-side wildcard matching any query value.
const ANY: &str = "*";

/// One line of a pgpass file.
///
/// Field values are stored with escape sequences already removed, so any
/// field may legitimately contain `:` or `\`. Two entries are equal iff
/// all five fields are equal.
///
/// # Security Notes
///
/// The `Debug` implementation redacts the password field to prevent
/// accidental credential leakage in logs or error messages.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PgPassEntry {
    /// Host name, or `*` to match any host.
    pub host: String,
    /// Port, or `*` to match any port.
    pub port: String,
    /// Database name, or `*` to match any database.
    pub db_name: String,
    /// User name, or `*` to match any user.
    pub user: String,
    /// The password. A literal `*` here has no wildcard meaning.
    pub pass: String,
}

impl PgPassEntry {
    pub fn new(host: String, port: String, db_name: String, user: String, pass: String) -> Self {
        PgPassEntry {
            host,
            port,
            db_name,
            user,
            pass,
        }
    }

    /// Compare this entry against a connection tuple.
    ///
    /// Each of the four compared fields matches when the entry holds the
    /// literal `*` or exactly the query value (case-sensitive, no
    /// normalization). Query values are never treated as wildcards.
    pub fn matches(&self, host: &str, port: &str, db_name: &str, user: &str) -> bool {
        let host_match = self.host == ANY || self.host == host;
        let port_match = self.port == ANY || self.port == port;
        let name_match = self.db_name == ANY || self.db_name == db_name;
        let user_match = self.user == ANY || self.user == user;
        host_match && port_match && name_match && user_match
    }
}

impl fmt::Debug for PgPassEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgPassEntry")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("db_name", &self.db_name)
            .field("user", &self.user)
            .field("pass", &"[REDACTED]")
            .finish()
    }
}
