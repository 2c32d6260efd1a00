//! Config discovery tests

mod common;

use common::TestHome;
use concord::config::{find_config_file, resolve, CONFIG_FILE_NAME};
use concord::ConcordError;
use std::path::PathBuf;

#[test]
fn test_resolve_from_project_root() {
    let home = TestHome::new();
    let project = home.write_config("proj", r#"{"remote": "host:/backup"}"#);

    let config = resolve(&project, home.path()).expect("resolve config");
    assert_eq!(config.config_dir, project);
    assert_eq!(config.remote, "host:/backup/");
    assert_eq!(config.relative_to_config(&project), PathBuf::new());
}

#[test]
fn test_resolve_walks_up_from_nested_dir() {
    let home = TestHome::new();
    let project = home.write_config("work/proj", r#"{"remote": "host:/backup/"}"#);
    let nested = home.dir("work/proj/src/deep/er");

    let config = resolve(&nested, home.path()).expect("resolve config");
    assert_eq!(config.config_dir, project);
    assert_eq!(config.relative_to_config(&nested), PathBuf::from("src/deep/er"));
}

#[test]
fn test_nearest_config_wins() {
    let home = TestHome::new();
    home.write_config("outer", r#"{"remote": "outer:/"}"#);
    let inner = home.write_config("outer/inner", r#"{"remote": "inner:/"}"#);

    // `x` does not exist; resolution is purely path based
    let config = resolve(&inner.join("x"), home.path()).expect("resolve config");
    assert_eq!(config.remote, "inner:/");
    assert_eq!(config.config_dir, inner);
}

#[test]
fn test_resolve_leaves_working_directory_alone() {
    let home = TestHome::new();
    home.write_config("proj", r#"{"remote": "h:/b"}"#);
    let nested = home.dir("proj/a/b");

    let before = std::env::current_dir().expect("read cwd");
    resolve(&nested, home.path()).expect("resolve config");
    let after = std::env::current_dir().expect("read cwd");
    assert_eq!(before, after);
}

#[test]
fn test_missing_config_is_not_found() {
    let home = TestHome::new();
    let nested = home.dir("nothing/here");

    let err = resolve(&nested, home.path()).unwrap_err();
    assert!(matches!(err, ConcordError::ConfigNotFound { .. }));
    assert!(err.is_config_error());
}

#[test]
fn test_config_in_home_itself_is_not_an_anchor() {
    let home = TestHome::new();
    std::fs::write(home.path().join(CONFIG_FILE_NAME), r#"{"remote": "h:/"}"#)
        .expect("write home config");
    let nested = home.dir("proj");

    assert!(find_config_file(&nested, home.path()).is_none());
    assert!(matches!(
        resolve(&nested, home.path()),
        Err(ConcordError::ConfigNotFound { .. })
    ));
}

#[test]
fn test_missing_remote_is_invalid_regardless_of_other_fields() {
    let home = TestHome::new();
    let project = home.write_config(
        "proj",
        r#"{"group": ["a"], "exclude": ["*.o"], "local-backup-dir": "/tmp/x"}"#,
    );

    let err = resolve(&project, home.path()).unwrap_err();
    assert!(matches!(err, ConcordError::ConfigInvalid { .. }));
}

#[test]
fn test_directory_named_like_config_is_skipped() {
    let home = TestHome::new();
    let outer = home.write_config("outer", r#"{"remote": "h:/"}"#);
    home.dir(&format!("outer/inner/{CONFIG_FILE_NAME}"));

    let found = find_config_file(&outer.join("inner"), home.path()).expect("find config");
    assert_eq!(found, outer.join(CONFIG_FILE_NAME));
}
