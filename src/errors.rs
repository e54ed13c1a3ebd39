//! Unified application error type.
//! Every module (config, models, core, storage, cli) returns AppError so the
//! binary can map failures to a single message and exit code.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("No data-file found at {}. Migration aborted.", .0.display())]
    DataFileNotFound(PathBuf),

    // ---------------------------
    // Document errors
    // ---------------------------
    #[error("Data-file is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    // ---------------------------
    // Migration errors
    // ---------------------------
    #[error("Migration cycle detected at version '{version}' (path: {})", .trail.join(" -> "))]
    CycleDetected { version: String, trail: Vec<String> },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::DataFileNotFound(_) => 2,
            _ => 1,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
