//! Unified application error type.
//! All modules (api, core, db, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::api::error::ApiError;
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
    // Local database
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Remote API
    // ---------------------------
    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    // ---------------------------
    // Parsing / validation
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid meal type: {0} (expected breakfast, lunch or hitea)")]
    InvalidMealType(String),

    #[error("Invalid category: {0} (expected presenter or attendee)")]
    InvalidCategory(String),

    #[error("Unknown user role: {0}")]
    InvalidRole(String),

    #[error("{field}: {message}")]
    Validation { field: &'static str, message: String },

    // ---------------------------
    // Session gate
    // ---------------------------
    #[error("Please login to access this page (run `confkiosk login`)")]
    LoginRequired,

    // ---------------------------
    // Meal claims
    // ---------------------------
    #[error("Cannot claim meal outside conference dates ({0})")]
    OutsideConference(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

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
