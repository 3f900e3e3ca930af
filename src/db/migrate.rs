use rusqlite::{Connection, Result};

/// Ensure that the internal `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the `absensi` table. `AUTOINCREMENT` keeps ids from being reused
/// after a delete.
fn create_absensi_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS absensi (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            nama     TEXT NOT NULL CHECK(length(trim(nama)) > 0),
            kelas    TEXT NOT NULL CHECK(length(trim(kelas)) > 0),
            tanggal  TEXT NOT NULL,
            status   TEXT NOT NULL CHECK(status IN ('Hadir','Izin','Sakit','Alfa'))
        );

        CREATE INDEX IF NOT EXISTS idx_absensi_tanggal ON absensi(tanggal);
        "#,
    )?;
    Ok(())
}

/// Create every table the application needs. Safe to call on each startup.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_absensi_table(conn)?;
    Ok(())
}
