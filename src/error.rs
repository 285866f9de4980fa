//! Error types for `legalpages`
//!
//! The top-level error aggregates configuration and generation failures
//! and maps each of them onto a process exit code.

use std::path::PathBuf;
use thiserror::Error;

pub use crate::pagegen::error::GenerateError;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `legalpages` CLI operations.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution (missing source documents included)
    pub const SUCCESS: i32 = 0;

    /// General error (generation failed, unknown page)
    pub const ERROR: i32 = 1;

    /// Configuration error (invalid YAML, validation failure)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (unreadable source, unwritable output)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `legalpages` operations.
#[derive(Debug, Error)]
pub enum LegalPagesError {
    /// Configuration loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Page generation error
    #[error(transparent)]
    Generate(#[from] GenerateError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LegalPagesError {
    /// Returns the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => ExitCode::CONFIG_ERROR,
            Self::Generate(err) => err.exit_code(),
            Self::Io(_) => ExitCode::IO_ERROR,
            Self::Json(_) => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file does not exist
    #[error("config file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// Configuration file exists but could not be read
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// YAML parsing failed
    #[error("parse error in {path}: {message}")]
    ParseError {
        /// Path to the configuration file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Configuration validation failed
    #[error("validation failed with {} error(s): {}", .errors.len(), summarize(.errors))]
    ValidationError {
        /// All validation errors found
        errors: Vec<ValidationIssue>,
    },
}

fn summarize(errors: &[ValidationIssue]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A single validation issue with location and severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Path to the problematic field (e.g., "pages[2].component")
    pub path: String,
    /// Description of the validation issue
    pub message: String,
    /// Severity level of the issue
    pub severity: Severity,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {} at {}", prefix, self.message, self.path)
    }
}

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Prevents the configuration from being used
    Error,
    /// Reported, but the configuration is still usable
    Warning,
}

// ============================================================================
// Tests
// ============================================================================
