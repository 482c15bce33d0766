//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

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
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid feature vector: {0}")]
    InvalidFeatureVector(String),

    #[error("Invalid event kind: {0}")]
    InvalidEventKind(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid aggregation window: start {start} is after end {end}")]
    InvalidWindow { start: String, end: String },

    // ---------------------------
    // Identity resolution
    // ---------------------------
    #[error("No enrolled identities to match against")]
    NoEnrolledIdentities,

    #[error("Face not recognized")]
    NoMatch,

    #[error("Unknown subject: {0}")]
    SubjectNotFound(String),

    #[error("Subject already enrolled: {0}")]
    DuplicateSubject(String),

    #[error("Workers must be enrolled with a face template")]
    MissingTemplate,

    // ---------------------------
    // Ledger rules
    // ---------------------------
    #[error("Subject must be punched in to start a break")]
    NotPunchedIn,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
