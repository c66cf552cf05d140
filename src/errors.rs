//! Unified application error type.
//! All modules (db, core, cli, notify, export) return AppError to keep the
//! error handling consistent and easy to manage.

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

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid flow intensity: {0}")]
    InvalidFlow(String),

    #[error("Invalid pronoun choice: {0}")]
    InvalidPronouns(String),

    #[error("Invalid notification type: {0}")]
    InvalidNotificationKind(String),

    // ---------------------------
    // Service-layer errors
    // ---------------------------
    #[error("Period entry not found: {0}")]
    EntryNotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    // ---------------------------
    // Notification delivery
    // ---------------------------
    #[error("Delivery error: {0}")]
    Delivery(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

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
