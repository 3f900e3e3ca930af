use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, rat, setup_test_db};

fn add(db_path: &str, name: &str, class: &str, date: &str, status: &str) {
    rat()
        .args(["--db", db_path, "add", name, class, date, "--status", status])
        .assert()
        .success()
        .stdout(contains("added"));
}

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("cli_init");
    init_db(&db_path);

    rat()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No attendance records yet."));
}

#[test]
fn test_list_orders_by_date_descending() {
    let db_path = setup_test_db("cli_order");
    init_db(&db_path);

    add(&db_path, "Aisyah", "10A", "2024-01-01", "Present");
    add(&db_path, "Budi", "10B", "2024-03-05", "Sick");
    add(&db_path, "Citra", "11A", "2024-02-10", "izin");

    let out = rat()
        .args(["--db", &db_path, "list"])
        .output()
        .expect("failed to run list");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let a = stdout.find("2024-03-05").expect("missing 2024-03-05");
    let b = stdout.find("2024-02-10").expect("missing 2024-02-10");
    let c = stdout.find("2024-01-01").expect("missing 2024-01-01");
    assert!(a < b && b < c, "unexpected order:\n{stdout}");
    assert!(stdout.contains("Excused"));
    assert!(stdout.contains("3 record(s)"));
}

#[test]
fn test_add_rejects_bad_date() {
    let db_path = setup_test_db("cli_bad_date");
    init_db(&db_path);

    rat()
        .args(["--db", &db_path, "add", "Aisyah", "10A", "2024/01/01"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));

    rat()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No attendance records yet."));
}

#[test]
fn test_add_rejects_unknown_status() {
    let db_path = setup_test_db("cli_bad_status");
    init_db(&db_path);

    rat()
        .args(["--db", &db_path, "add", "Aisyah", "10A", "2024-01-01", "-s", "late"])
        .assert()
        .failure()
        .stderr(contains("Invalid status"));
}

#[test]
fn test_update_changes_only_given_fields() {
    let db_path = setup_test_db("cli_update");
    init_db(&db_path);
    add(&db_path, "Aisyah", "10A", "2024-03-01", "Present");

    rat()
        .args(["--db", &db_path, "update", "1", "--class", "12Z"])
        .assert()
        .success()
        .stdout(contains("Record #1 updated."));

    rat()
        .args(["--db", &db_path, "list", "--json"])
        .assert()
        .success()
        .stdout(contains("\"class_name\": \"12Z\""))
        .stdout(contains("\"name\": \"Aisyah\""))
        .stdout(contains("\"date\": \"2024-03-01\""))
        .stdout(contains("10A").not());
}

#[test]
fn test_update_unknown_id_fails() {
    let db_path = setup_test_db("cli_update_missing");
    init_db(&db_path);

    rat()
        .args(["--db", &db_path, "update", "42", "--name", "X"])
        .assert()
        .failure()
        .stderr(contains("Record #42 not found"));
}

#[test]
fn test_del_asks_for_confirmation() {
    let db_path = setup_test_db("cli_del_confirm");
    init_db(&db_path);
    add(&db_path, "Aisyah", "10A", "2024-03-01", "Present");

    rat()
        .args(["--db", &db_path, "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    rat()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Aisyah"));

    rat()
        .args(["--db", &db_path, "del", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Record #1 deleted."));

    rat()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No attendance records yet."));
}

#[test]
fn test_del_with_yes_and_twice() {
    let db_path = setup_test_db("cli_del_yes");
    init_db(&db_path);
    add(&db_path, "Aisyah", "10A", "2024-03-01", "Present");

    rat()
        .args(["--db", &db_path, "del", "1", "--yes"])
        .assert()
        .success();

    rat()
        .args(["--db", &db_path, "del", "1", "--yes"])
        .assert()
        .failure()
        .stderr(contains("Record #1 not found"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("cli_log");
    init_db(&db_path);
    add(&db_path, "Aisyah", "10A", "2024-03-01", "Present");

    rat()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("Aisyah (10A) 2024-03-01 Present"));
}

#[test]
fn test_form_session_add_select_update() {
    let db_path = setup_test_db("cli_form");
    init_db(&db_path);

    let script = "\
name Aisyah
class 10A
date 2024-03-01
add
select 1
status sick
update
update
quit
";

    rat()
        .args(["--db", &db_path, "form"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("Record #1 added."))
        .stdout(contains("Record #1 updated."))
        .stderr(contains("Select a row first"));

    rat()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Sick"));
}

#[test]
fn test_del_without_prompt_when_disabled_in_config() {
    let home = std::env::temp_dir().join("rattendance_test_home_noconfirm");
    let conf_dir = home.join(".rattendance");
    std::fs::create_dir_all(&conf_dir).unwrap();
    std::fs::write(conf_dir.join("rattendance.conf"), "confirm_delete: false\n").unwrap();

    let db_path = setup_test_db("cli_del_noconfirm");
    init_db(&db_path);
    add(&db_path, "Aisyah", "10A", "2024-03-01", "Present");

    rat()
        .env("HOME", &home)
        .args(["--db", &db_path, "del", "1"])
        .assert()
        .success()
        .stdout(contains("Record #1 deleted."))
        .stdout(contains("Confirm [y/N]").not());
}
