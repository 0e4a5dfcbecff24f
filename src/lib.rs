//! Rust port of the PostgreSQL pgpass lookup logic.
//!
//! This crate locates and parses a PostgreSQL-style `.pgpass` credential
//! file and resolves the password for a (host, port, database, user)
//! connection tuple, including support for:
//!
//! - The standard location cascade (`PGPASSFILE`, then the platform default)
//! - Entry-side `*` wildcards
//! - Backslash-escaped colons and backslashes inside fields
//!
//! # Quick Start
//!
//! ```no_run
//! // Look up a password from the default pgpass location
//! let password = pgpass_rs::get("db.example.com", "5432", "orders", "app").unwrap();
//!
//! match password {
//!     Some(pass) => println!("found a {}-char password for app@orders", pass.len()),
//!     None => println!("no credentials configured for this tuple"),
//! }
//! ```
//!
//! # File Format
//!
//! One credential per line, `#`-prefixed lines are comments:
//!
//! ```text
//! hostname:port:database:username:password
//! ```
//!
//! Any of the first four fields may be the literal `*` to match any query
//! value (a `*` in the password field has no special meaning). A literal
//! `:` or `\` inside a field is written `\:` or `\\`.
//!
//! # Lookup Precedence
//!
//! Entries are matched in file order and the first match wins, so more
//! specific entries belong earlier in the file. Every lookup re-reads the
//! file; nothing is cached between calls.
//!
//! # Errors
//!
//! A missing file surfaces as [`Error::FileNotFound`] and any other I/O
//! failure as [`Error::ReadFile`]. Most integrations treat `FileNotFound`
//! as "no credentials configured" while still being able to tell it apart
//! from a real I/O fault. "No matching entry" is not an error: lookups
//! return `Ok(None)`.

mod entry;
mod error;
mod lookup;
mod parser;
mod paths;

// Re-export main types
pub use entry::PgPassEntry;
pub use error::{Error, Result};
pub use lookup::{get, get_all, get_all_from_file, get_from_file};
pub use parser::parse_pgpass;
pub use paths::default_path;
