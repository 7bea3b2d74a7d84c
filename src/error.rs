//! Error types for reqindex
//!
//! The index itself never fails: a missing id or an empty heap is reported
//! with `Option`/`bool`. This type covers everything around it (shell I/O,
//! command parsing, configuration, consistency checks).

use thiserror::Error;

/// Result type alias using IndexError
pub type Result<T> = std::result::Result<T, IndexError>;

/// Unified error type for reqindex operations
#[derive(Debug, Error)]
pub enum IndexError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Command Errors
    // -------------------------------------------------------------------------
    #[error("Invalid input: {0}")]
    Parse(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Consistency Errors
    // -------------------------------------------------------------------------
    #[error("Index inconsistent: {0}")]
    Inconsistent(String),
}
