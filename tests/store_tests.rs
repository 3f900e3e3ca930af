use chrono::NaiveDate;
use rattendance::errors::AppError;
use rattendance::models::status::AttendanceStatus;

mod common;
use common::{memory_store, seeded_store};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_ensure_schema_is_idempotent() {
    let store = memory_store();
    store.ensure_schema().unwrap();
    store.ensure_schema().unwrap();
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn test_insert_then_list_contains_record() {
    let store = memory_store();
    let id = store
        .insert("Aisyah", "10A", d("2024-03-01"), AttendanceStatus::Sick)
        .unwrap();

    let all = store.list_all().unwrap();
    assert_eq!(all.len(), 1);
    let r = &all[0];
    assert_eq!(r.id, id);
    assert_eq!(r.name, "Aisyah");
    assert_eq!(r.class_name, "10A");
    assert_eq!(r.date, d("2024-03-01"));
    assert_eq!(r.status, AttendanceStatus::Sick);
}

#[test]
fn test_list_all_orders_by_date_descending() {
    let store = seeded_store();
    let dates: Vec<String> = store
        .list_all()
        .unwrap()
        .iter()
        .map(|r| r.date_str())
        .collect();
    assert_eq!(dates, vec!["2024-03-05", "2024-02-10", "2024-01-01"]);
}

#[test]
fn test_update_existing_and_missing() {
    let store = memory_store();
    let id = store
        .insert("Budi", "10B", d("2024-01-01"), AttendanceStatus::Present)
        .unwrap();

    let changed = store
        .update(id, "Budi S", "11B", d("2024-01-02"), AttendanceStatus::Excused)
        .unwrap();
    assert!(changed);

    let r = store.get(id).unwrap().expect("record still exists");
    assert_eq!(r.name, "Budi S");
    assert_eq!(r.class_name, "11B");
    assert_eq!(r.date, d("2024-01-02"));
    assert_eq!(r.status, AttendanceStatus::Excused);

    let missing = store
        .update(id + 100, "X", "Y", d("2024-01-02"), AttendanceStatus::Absent)
        .unwrap();
    assert!(!missing);
}

#[test]
fn test_delete_removes_exactly_one_and_is_idempotent() {
    let store = seeded_store();
    let victim = store.list_all().unwrap()[1].id;

    assert!(store.delete(victim).unwrap());
    assert_eq!(store.list_all().unwrap().len(), 2);
    assert!(store.get(victim).unwrap().is_none());

    assert!(!store.delete(victim).unwrap());
    assert_eq!(store.list_all().unwrap().len(), 2);
}

#[test]
fn test_ids_are_not_reused_after_delete() {
    let store = memory_store();
    let first = store
        .insert("A", "1", d("2024-01-01"), AttendanceStatus::Present)
        .unwrap();
    let second = store
        .insert("B", "1", d("2024-01-01"), AttendanceStatus::Present)
        .unwrap();
    assert!(store.delete(second).unwrap());

    let third = store
        .insert("C", "1", d("2024-01-01"), AttendanceStatus::Present)
        .unwrap();
    assert!(third > second);
    assert!(second > first);
}

#[test]
fn test_constraint_violation_is_a_db_error() {
    let store = memory_store();
    let err = store
        .insert("   ", "10A", d("2024-01-01"), AttendanceStatus::Present)
        .unwrap_err();
    assert!(matches!(err, AppError::Db(_)), "got {err:?}");
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn test_status_is_stored_with_original_codes() {
    let store = memory_store();
    let id = store
        .insert("Dewi", "12C", d("2024-05-05"), AttendanceStatus::Absent)
        .unwrap();

    let raw: String = store
        .conn()
        .query_row("SELECT status FROM absensi WHERE id = ?1", [id], |r| r.get(0))
        .unwrap();
    assert_eq!(raw, "Alfa");
}
