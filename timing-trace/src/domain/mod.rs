//! Domain model for timing-trace
//!
//! This module contains core domain types and errors that provide:
//! - Compile-time safety for lane and phase labels
//! - Self-documenting function signatures
//! - Structured error handling

pub mod errors;
pub mod types;

// Re-export common types for convenience
pub use types::{EventId, Microseconds, Phase, ProcessLane, Scope, ThreadLane};

pub use errors::{CliError, ExportError, ResultsError};
