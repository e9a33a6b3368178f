//! Structured error types for timing-trace
//!
//! Using thiserror for automatic Display implementation and error chaining.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResultsError {
    #[error("Results file {0} not found")]
    NotFound(PathBuf),

    #[error("Failed to parse results JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to serialize trace event: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("JSON results path not provided")]
    MissingArgument,

    #[error("JSON results not found: {}", .0.display())]
    ResultsNotFound(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
