//! Form controller: the add / update / delete / reset / select-row state
//! machine sitting between the form, the record store and the table.

use crate::core::validation::{ValidatedInput, validate};
use crate::core::view_model::{DisplayRow, ViewModel};
use crate::db::log::ttlog_soft;
use crate::db::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::status::AttendanceStatus;
use std::fmt;

/// Yes/no decision point consulted before a delete.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Raw form contents, exactly as typed or copied from a row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub id: String,
    pub name: String,
    pub class_name: String,
    pub date: String,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Idle,
    RowSelected {
        index: usize,
        id: i64,
        snapshot: DisplayRow,
    },
}

/// Outcome of a successful action, suitable for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Added(i64),
    Updated(i64),
    Deleted(i64),
    Cancelled,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Added(id) => write!(f, "Record #{} added.", id),
            Notice::Updated(id) => write!(f, "Record #{} updated.", id),
            Notice::Deleted(id) => write!(f, "Record #{} deleted.", id),
            Notice::Cancelled => f.write_str("Operation cancelled."),
        }
    }
}

pub struct FormController {
    store: RecordStore,
    view: ViewModel,
    form: FormFields,
    state: FormState,
}

impl FormController {
    /// Controller with an empty table; call [`FormController::load`] to fill it.
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            view: ViewModel::new(),
            form: FormFields::default(),
            state: FormState::Idle,
        }
    }

    /// Build a controller and load the whole store into the table.
    pub fn open(store: RecordStore) -> AppResult<Self> {
        let mut ctl = Self::new(store);
        ctl.load()?;
        Ok(ctl)
    }

    /// Replace the table with the store contents (newest date first).
    pub fn load(&mut self) -> AppResult<()> {
        let records = self.store.list_all()?;
        self.view.replace_all(&records);
        self.reset();
        Ok(())
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    pub fn form(&self) -> &FormFields {
        &self.form
    }

    /// Editable access for the dispatcher. The id field is read-only and
    /// is not exposed here.
    pub fn set_name(&mut self, value: &str) {
        self.form.name = value.to_string();
    }

    pub fn set_class(&mut self, value: &str) {
        self.form.class_name = value.to_string();
    }

    pub fn set_date(&mut self, value: &str) {
        self.form.date = value.to_string();
    }

    pub fn set_status(&mut self, status: AttendanceStatus) {
        self.form.status = status;
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn selected_id(&self) -> Option<i64> {
        match &self.state {
            FormState::RowSelected { id, .. } => Some(*id),
            FormState::Idle => None,
        }
    }

    /// Copy the displayed cells of row `index` into the form, verbatim.
    pub fn select_row(&mut self, index: usize) -> AppResult<()> {
        let row = self
            .view
            .row(index)
            .cloned()
            .ok_or(AppError::InvalidRow(index))?;
        let status = AttendanceStatus::from_code(&row.status)
            .ok_or_else(|| AppError::InvalidStatus(row.status.clone()))?;

        self.form = FormFields {
            id: row.id.to_string(),
            name: row.name.clone(),
            class_name: row.class_name.clone(),
            date: row.date.clone(),
            status,
        };
        self.state = FormState::RowSelected {
            index,
            id: row.id,
            snapshot: row,
        };
        Ok(())
    }

    /// Select the displayed row showing record `id`.
    pub fn select_id(&mut self, id: i64) -> AppResult<()> {
        let index = self.view.position_of(id).ok_or(AppError::NotFound(id))?;
        self.select_row(index)
    }

    fn validated(&self) -> AppResult<ValidatedInput> {
        Ok(validate(
            &self.form.name,
            &self.form.class_name,
            &self.form.date,
            self.form.status,
        )?)
    }

    pub fn add(&mut self) -> AppResult<Notice> {
        let input = self.validated()?;

        let id = self
            .store
            .insert(&input.name, &input.class_name, input.date, input.status)?;

        self.view.append(DisplayRow::new(id, &input));
        ttlog_soft(
            self.store.conn(),
            "add",
            &format!("#{}", id),
            &format!(
                "{} ({}) {} {}",
                input.name,
                input.class_name,
                input.date_str(),
                input.status
            ),
        );

        self.reset();
        Ok(Notice::Added(id))
    }

    pub fn update(&mut self) -> AppResult<Notice> {
        let (index, id) = match &self.state {
            FormState::RowSelected { index, id, .. } => (*index, *id),
            FormState::Idle => return Err(AppError::NoRowSelected),
        };

        let input = self.validated()?;

        if !self
            .store
            .update(id, &input.name, &input.class_name, input.date, input.status)?
        {
            return Err(AppError::NotFound(id));
        }

        self.view.update_cells(index, &input)?;
        ttlog_soft(
            self.store.conn(),
            "update",
            &format!("#{}", id),
            &format!(
                "{} ({}) {} {}",
                input.name,
                input.class_name,
                input.date_str(),
                input.status
            ),
        );

        self.reset();
        Ok(Notice::Updated(id))
    }

    pub fn delete(&mut self, confirm: &mut dyn Confirm) -> AppResult<Notice> {
        let (index, id, snapshot) = match &self.state {
            FormState::RowSelected {
                index,
                id,
                snapshot,
            } => (*index, *id, snapshot.clone()),
            FormState::Idle => return Err(AppError::NoRowSelected),
        };

        let prompt = format!(
            "Delete record #{} ({}, {}, {})? This action is irreversible.",
            id, snapshot.name, snapshot.class_name, snapshot.date
        );
        if !confirm.confirm(&prompt) {
            return Ok(Notice::Cancelled);
        }

        if !self.store.delete(id)? {
            return Err(AppError::NotFound(id));
        }

        self.view.remove(index)?;
        ttlog_soft(
            self.store.conn(),
            "del",
            &format!("#{}", id),
            &format!("{} ({}) {}", snapshot.name, snapshot.class_name, snapshot.date),
        );

        self.reset();
        Ok(Notice::Deleted(id))
    }

    /// Clear the form and the selection.
    pub fn reset(&mut self) {
        self.form = FormFields {
            status: AttendanceStatus::first(),
            ..FormFields::default()
        };
        self.state = FormState::Idle;
    }
}
