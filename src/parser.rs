//! Line parsing for pgpass files.
//!
//! A pgpass file holds one credential per line in the form
//! `hostname:port:database:username:password`, with `#`-prefixed comment
//! lines. A literal `:` or `\` inside a field is written `\:` or `\\`.
//!
//! Note: We match whole lines with a regex instead of splitting on `:`
//! because a plain split would cut fields at escaped colons. The regex
//! accepts exactly five non-empty fields, each a greedy run of non-colon
//! characters or `\:` sequences, so anything else on the line is rejected
//! as a whole.

use crate::entry::PgPassEntry;
use regex::Regex;
use std::sync::LazyLock;

/// Matches a full entry line: five fields separated by unescaped colons.
static ENTRY_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?:[^:]|\\:)+):((?:[^:]|\\:)+):((?:[^:]|\\:)+):((?:[^:]|\\:)+):((?:[^:]|\\:)+)$")
        .unwrap()
});

/// Parse pgpass content into entries, preserving line order.
///
/// Lines whose first character is `#` are comments; the marker is not
/// recognized anywhere else. Lines that do not split into exactly five
/// fields (too few, too many, or an empty field) are skipped silently;
/// a malformed line is not an error.
pub fn parse_pgpass(content: &str) -> Vec<PgPassEntry> {
    let mut entries = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        if line.starts_with('#') {
            continue;
        }

        match ENTRY_LINE.captures(line) {
            Some(caps) => entries.push(PgPassEntry::new(
                unescape(&caps[1]),
                unescape(&caps[2]),
                unescape(&caps[3]),
                unescape(&caps[4]),
                unescape(&caps[5]),
            )),
            None => {
                // Line content stays out of the log; it may hold a password.
                if !line.is_empty() {
                    tracing::warn!(line = idx + 1, "skipping malformed pgpass line");
                }
            }
        }
    }

    entries
}

/// Remove escape sequences from a raw field value.
///
/// `\:` unescapes to `:` and `\\` to `\`. No other escape sequence is
/// defined: a backslash before any other character is dropped and the
/// character kept verbatim, and a trailing lone backslash is dropped.
fn unescape(field: &str) -> String {
    let mut value = String::with_capacity(field.len());
    let mut chars = field.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }
        if let Some(escaped) = chars.next() {
            value.push(escaped);
        }
    }

    value
}
