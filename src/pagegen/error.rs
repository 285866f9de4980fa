//! Error types for page generation.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ExitCode;

/// Errors that abort a generation run.
///
/// A missing source document is not an error; it is reported as a
/// skipped outcome and the run continues.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// A source document exists but could not be read as UTF-8 text.
    #[error("failed to read {path}: {source}")]
    ReadSource {
        /// Path of the source document.
        path: PathBuf,
        /// Underlying I/O or decode failure.
        source: std::io::Error,
    },

    /// A generated page could not be written.
    #[error("failed to write {path}: {source}")]
    WriteOutput {
        /// Path of the output file.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// No mapping entry has the requested source identifier.
    #[error("unknown page '{name}'{}", did_you_mean(.suggestion.as_deref()))]
    UnknownPage {
        /// Requested source identifier.
        name: String,
        /// Closest configured identifier, if any.
        suggestion: Option<String>,
    },
}

fn did_you_mean(suggestion: Option<&str>) -> String {
    suggestion
        .map(|s| format!(" (did you mean '{s}'?)"))
        .unwrap_or_default()
}

impl GenerateError {
    /// Returns the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::OutputDir { .. } | Self::ReadSource { .. } | Self::WriteOutput { .. } => {
                ExitCode::IO_ERROR
            }
            Self::UnknownPage { .. } => ExitCode::ERROR,
        }
    }
}
