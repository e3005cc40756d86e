//! Unified application error type.
//! All modules (store, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

/// Required-field failures raised by the creation forms.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all required fields (missing: {0})")]
    MissingField(&'static str),

    #[error("Unknown employee: {0}")]
    UnknownEmployee(String),

    #[error("Workflow step #{0} has no name")]
    UnnamedStep(usize),

    #[error("Progress must be between 0 and 100 (got {0})")]
    ProgressOutOfRange(u32),
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid status '{value}' for {kind}")]
    InvalidStatus { kind: &'static str, value: String },

    #[error("Invalid priority: {0}")]
    InvalidPriority(String),

    #[error("Invalid sort key: {0}")]
    InvalidSortKey(String),

    #[error("Unbalanced quotes in input: {0}")]
    UnbalancedQuotes(String),

    // ---------------------------
    // Store / logic errors
    // ---------------------------
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    #[error("Duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

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
