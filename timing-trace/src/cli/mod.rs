//! Command-line interface for timing-trace
//!
//! This module contains CLI argument parsing and configuration

pub mod args;

pub use args::Args;
