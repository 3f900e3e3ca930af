use rattendance::config::Config;
use rattendance::errors::AppError;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Write `content` to a fresh config file inside the system temp dir
fn write_config(name: &str, content: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.conf", name));
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn test_missing_file_gives_defaults() {
    let mut path: PathBuf = env::temp_dir();
    path.push("cfg_missing_rattendance.conf");
    fs::remove_file(&path).ok();

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(cfg.confirm_delete);
    assert_eq!(cfg.separator(), '-');
}

#[test]
fn test_partial_file_fills_defaults() {
    let path = write_config("cfg_partial", "database: /tmp/school.sqlite\nconfirm_delete: false\n");

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.database, "/tmp/school.sqlite");
    assert!(!cfg.confirm_delete);
    assert_eq!(cfg.separator_char, "-");
}

#[test]
fn test_malformed_file_is_a_config_error() {
    let path = write_config("cfg_malformed", "database: [1,2\n");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, AppError::Config(_)), "got {err:?}");
}

#[test]
fn test_wrong_type_is_a_config_error() {
    let path = write_config("cfg_wrong_type", "confirm_delete: maybe\n");

    assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));
}
