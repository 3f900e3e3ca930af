//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError so the dispatcher
//! can report every failure the same way.

use crate::core::validation::ValidationError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Cannot open database: {0}")]
    Connection(String),

    #[error("Cannot create database schema: {0}")]
    Schema(String),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Form input
    // ---------------------------
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid status: {0} (use Present, Excused, Sick or Absent)")]
    InvalidStatus(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ---------------------------
    // Form state
    // ---------------------------
    #[error("No row selected")]
    NoRowSelected,

    #[error("No table row #{}", .0 + 1)]
    InvalidRow(usize),

    #[error("Record #{0} not found, nothing was changed")]
    NotFound(i64),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
