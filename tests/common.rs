#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rattendance::core::controller::FormController;
use rattendance::db::pool::DbPool;
use rattendance::db::store::RecordStore;
use rattendance::models::status::AttendanceStatus;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at a scratch dir so a real
/// ~/.rattendance config never leaks into the run
pub fn rat() -> Command {
    let mut cmd = cargo_bin_cmd!("rattendance");
    cmd.env("HOME", env::temp_dir().join("rattendance_test_home"));
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the DB through the CLI (test mode: no config file written)
pub fn init_db(db_path: &str) {
    rat()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Fresh in-memory store with the schema in place
pub fn memory_store() -> RecordStore {
    let store = RecordStore::new(DbPool::in_memory().expect("open in-memory db"));
    store.ensure_schema().expect("create schema");
    store
}

/// Store pre-filled with three records on 2024-01-01, 2024-03-05, 2024-02-10
pub fn seeded_store() -> RecordStore {
    let store = memory_store();
    for (name, class, date) in [
        ("Aisyah", "10A", "2024-01-01"),
        ("Budi", "10B", "2024-03-05"),
        ("Citra", "11A", "2024-02-10"),
    ] {
        store
            .insert(
                name,
                class,
                date.parse().expect("valid date"),
                AttendanceStatus::Present,
            )
            .expect("insert");
    }
    store
}

pub fn seeded_controller() -> FormController {
    FormController::open(seeded_store()).expect("load controller")
}
