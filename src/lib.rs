//! Wiper - recursively wipe out files and directories by name
//!
//! This crate provides functionality for:
//! - Matching entry names against exact names and regular expressions
//! - Deleting matches or moving them into a trash directory
//! - Walking a tree concurrently with one task per subdirectory

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod wiper;

// Re-export commonly used types
pub use config::Config;
pub use error::{ConfigError, Result, WiperError};
pub use wiper::{run, RunStatistics, WipeReport, Wiper};
