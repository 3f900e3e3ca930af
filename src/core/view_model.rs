//! In-memory table mirroring the store, in display order.

use crate::core::validation::ValidatedInput;
use crate::errors::{AppError, AppResult};
use crate::models::record::AttendanceRecord;
use serde::Serialize;

/// One displayed row: the five cells as the table shows them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub id: i64,
    pub name: String,
    pub class_name: String,
    pub date: String,
    pub status: String,
}

impl From<&AttendanceRecord> for DisplayRow {
    fn from(r: &AttendanceRecord) -> Self {
        Self {
            id: r.id,
            name: r.name.clone(),
            class_name: r.class_name.clone(),
            date: r.date_str(),
            status: r.status.label().to_string(),
        }
    }
}

impl DisplayRow {
    pub fn new(id: i64, input: &ValidatedInput) -> Self {
        Self {
            id,
            name: input.name.clone(),
            class_name: input.class_name.clone(),
            date: input.date_str(),
            status: input.status.label().to_string(),
        }
    }

    pub fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.class_name.clone(),
            self.date.clone(),
            self.status.clone(),
        ]
    }
}

#[derive(Debug, Default)]
pub struct ViewModel {
    rows: Vec<DisplayRow>,
}

impl ViewModel {
    pub const HEADERS: [&'static str; 5] = ["ID", "Name", "Class", "Date", "Status"];

    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every row and load `records` in the given order.
    pub fn replace_all(&mut self, records: &[AttendanceRecord]) {
        self.rows = records.iter().map(DisplayRow::from).collect();
    }

    pub fn append(&mut self, row: DisplayRow) {
        self.rows.push(row);
    }

    /// Overwrite the four non-id cells of the row at `index`.
    pub fn update_cells(&mut self, index: usize, input: &ValidatedInput) -> AppResult<()> {
        let row = self
            .rows
            .get_mut(index)
            .ok_or(AppError::InvalidRow(index))?;
        row.name = input.name.clone();
        row.class_name = input.class_name.clone();
        row.date = input.date_str();
        row.status = input.status.label().to_string();
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> AppResult<DisplayRow> {
        if index >= self.rows.len() {
            return Err(AppError::InvalidRow(index));
        }
        Ok(self.rows.remove(index))
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, index: usize) -> Option<&DisplayRow> {
        self.rows.get(index)
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    /// Position of the row showing record `id`.
    pub fn position_of(&self, id: i64) -> Option<usize> {
        self.rows.iter().position(|r| r.id == id)
    }
}
