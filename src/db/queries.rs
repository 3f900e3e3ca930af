use crate::core::validation::ValidationError;
use crate::errors::{AppError, AppResult};
use crate::models::record::AttendanceRecord;
use crate::models::status::AttendanceStatus;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<AttendanceRecord> {
    let date_str: String = row.get("tanggal")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(ValidationError::InvalidDate(date_str.clone())),
        )
    })?;

    let status_str: String = row.get("status")?;
    let status = AttendanceStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    Ok(AttendanceRecord {
        id: row.get("id")?,
        name: row.get("nama")?,
        class_name: row.get("kelas")?,
        date,
        status,
    })
}

/// All records, newest date first. Same-day rows keep insertion order.
pub fn load_all(conn: &Connection) -> AppResult<Vec<AttendanceRecord>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, nama, kelas, tanggal, status FROM absensi
         ORDER BY tanggal DESC, id ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_by_id(conn: &Connection, id: i64) -> AppResult<Option<AttendanceRecord>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, nama, kelas, tanggal, status FROM absensi WHERE id = ?1",
    )?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

pub fn insert_record(
    conn: &Connection,
    name: &str,
    class_name: &str,
    date: NaiveDate,
    status: AttendanceStatus,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO absensi (nama, kelas, tanggal, status) VALUES (?1, ?2, ?3, ?4)",
        params![
            name,
            class_name,
            date.format("%Y-%m-%d").to_string(),
            status.to_db_str(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Returns the number of rows touched (0 or 1).
pub fn update_record(
    conn: &Connection,
    id: i64,
    name: &str,
    class_name: &str,
    date: NaiveDate,
    status: AttendanceStatus,
) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE absensi SET nama = ?1, kelas = ?2, tanggal = ?3, status = ?4 WHERE id = ?5",
        params![
            name,
            class_name,
            date.format("%Y-%m-%d").to_string(),
            status.to_db_str(),
            id,
        ],
    )?;
    Ok(n)
}

/// Returns the number of rows removed (0 or 1).
pub fn delete_record(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM absensi WHERE id = ?1", [id])?)
}
