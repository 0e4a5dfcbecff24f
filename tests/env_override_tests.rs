//! `PGPASSFILE` environment override tests.
//!
//! These mutate the process environment, so everything lives in a single
//! test to keep the parallel test runner away from the variable.

use pgpass_rs::{default_path, get};
use std::env;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_pgpassfile_overrides_platform_default() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("override-pgpass");
    fs::write(&path, "*:*:db1:user1:env-secret\n").unwrap();

    env::set_var("PGPASSFILE", &path);

    assert_eq!(default_path(), Some(path.clone()));

    // The default-location lookup resolves through the override.
    let pass = get("anything.test", "5432", "db1", "user1").unwrap();
    assert_eq!(pass, Some("env-secret".to_string()));

    // An empty override is ignored and the platform default applies again.
    env::set_var("PGPASSFILE", "");
    assert_ne!(default_path(), Some(path));

    env::remove_var("PGPASSFILE");
}
