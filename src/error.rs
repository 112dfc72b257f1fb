//! Error types for twig

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a run before or during output.
///
/// Entries that cannot be read mid-walk are not errors: they are skipped
/// and the walk carries on.
#[derive(Error, Debug)]
pub enum TwigError {
    #[error("cannot access '{}': {reason}", path.display())]
    InvalidTarget { path: PathBuf, reason: String },

    #[error("invalid exclude pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error("cannot write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error writing output: {0}")]
    Output(#[from] std::io::Error),
}

impl TwigError {
    /// Process exit code for this error.
    ///
    /// Malformed options share clap's usage-error code.
    pub fn exit_code(&self) -> i32 {
        match self {
            TwigError::InvalidPattern { .. } | TwigError::InvalidOption(_) => 2,
            TwigError::InvalidTarget { .. } | TwigError::Io { .. } | TwigError::Output(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, TwigError>;
