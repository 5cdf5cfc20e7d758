//! Error types for deadstrip operations.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Errors a strip run can surface.
///
/// The taxonomy is deliberately small: the target file is either
/// unreadable or unwritable, and a config file can fail to load. There
/// are no recoverable paths and no partial-success states.
#[derive(Error, Debug, Diagnostic)]
pub enum StripError {
    /// The target file cannot be opened or read.
    #[error("failed to read {path}")]
    #[diagnostic(code(deadstrip::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The rewritten content cannot be written back.
    #[error("failed to write {path}")]
    #[diagnostic(code(deadstrip::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A config file was given or discovered but cannot be used.
    #[error("invalid config file {path}: {message}")]
    #[diagnostic(code(deadstrip::config))]
    Config { path: PathBuf, message: String },
}

impl StripError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StripError>;
