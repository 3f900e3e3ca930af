//! Form validation, run before any store mutation.

use crate::models::status::AttendanceStatus;
use crate::utils::date;
use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

/// Editable form fields that validation can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Class,
    Date,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormField::Name => f.write_str("name"),
            FormField::Class => f.write_str("class"),
            FormField::Date => f.write_str("date"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Student name is required")]
    EmptyName,

    #[error("Class is required")]
    EmptyClass,

    #[error("Date is required (format: YYYY-MM-DD)")]
    EmptyDate,

    #[error("Invalid date '{0}', use the format YYYY-MM-DD")]
    InvalidDate(String),
}

impl ValidationError {
    /// The field the form should focus after reporting this error.
    pub fn field(&self) -> FormField {
        match self {
            ValidationError::EmptyName => FormField::Name,
            ValidationError::EmptyClass => FormField::Class,
            ValidationError::EmptyDate | ValidationError::InvalidDate(_) => FormField::Date,
        }
    }
}

/// Trimmed, parsed form contents ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInput {
    pub name: String,
    pub class_name: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

impl ValidatedInput {
    pub fn date_str(&self) -> String {
        date::format_date(&self.date)
    }
}

/// Check the form fields in display order; the first failure wins.
pub fn validate(
    name: &str,
    class_name: &str,
    date_text: &str,
    status: AttendanceStatus,
) -> Result<ValidatedInput, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let class_name = class_name.trim();
    if class_name.is_empty() {
        return Err(ValidationError::EmptyClass);
    }

    let date_text = date_text.trim();
    if date_text.is_empty() {
        return Err(ValidationError::EmptyDate);
    }

    let date = date::parse_date(date_text)
        .ok_or_else(|| ValidationError::InvalidDate(date_text.to_string()))?;

    Ok(ValidatedInput {
        name: name.to_string(),
        class_name: class_name.to_string(),
        date,
        status,
    })
}
