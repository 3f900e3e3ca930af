//! Record store: durable storage of attendance rows on top of one
//! long-lived SQLite connection.

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::record::AttendanceRecord;
use crate::models::status::AttendanceStatus;
use chrono::NaiveDate;
use rusqlite::Connection;

pub struct RecordStore {
    pool: DbPool,
}

impl RecordStore {
    /// Wrap an already-open connection. The schema is not touched; call
    /// [`RecordStore::ensure_schema`] or use [`RecordStore::open`].
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Open the database at `path` and make sure the schema exists.
    pub fn open(path: &str) -> AppResult<Self> {
        let store = Self::new(DbPool::new(path)?);
        store.ensure_schema()?;
        Ok(store)
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    /// Idempotent.
    pub fn ensure_schema(&self) -> AppResult<()> {
        init_db(&self.pool.conn)
    }

    pub fn list_all(&self) -> AppResult<Vec<AttendanceRecord>> {
        queries::load_all(&self.pool.conn)
    }

    pub fn get(&self, id: i64) -> AppResult<Option<AttendanceRecord>> {
        queries::load_by_id(&self.pool.conn, id)
    }

    pub fn insert(
        &self,
        name: &str,
        class_name: &str,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> AppResult<i64> {
        queries::insert_record(&self.pool.conn, name, class_name, date, status)
    }

    /// `Ok(false)` when no row has this id.
    pub fn update(
        &self,
        id: i64,
        name: &str,
        class_name: &str,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> AppResult<bool> {
        let n = queries::update_record(&self.pool.conn, id, name, class_name, date, status)?;
        Ok(n > 0)
    }

    /// `Ok(false)` when no row has this id.
    pub fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(queries::delete_record(&self.pool.conn, id)? > 0)
    }
}
