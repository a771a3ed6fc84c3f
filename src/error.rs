//! Error types and exit codes for hdrscan

use std::io;
use std::process::ExitCode;
use thiserror::Error;

/// Fatal failures for a scan run. Filtered candidates and malformed
/// trailing constructs are not errors - they are handled inline by the
/// scrubber and filter stages.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("unable to read input {path}: {source}")]
    Input { path: String, source: io::Error },

    #[error("unable to write output {path}: {source}")]
    Output { path: String, source: io::Error },
}

impl ScanError {
    pub fn input(path: impl Into<String>, source: io::Error) -> Self {
        Self::Input {
            path: path.into(),
            source,
        }
    }

    pub fn output(path: impl Into<String>, source: io::Error) -> Self {
        Self::Output {
            path: path.into(),
            source,
        }
    }

    /// Convert error to the process exit code:
    /// - 0: success
    /// - 1: invalid command-line options (mapped in `main`, not here)
    /// - 2: input file or directory unreadable
    /// - 3: output destination unwritable
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Input { .. } => ExitCode::from(2),
            Self::Output { .. } => ExitCode::from(3),
        }
    }
}

/// Result type alias for scan operations
pub type Result<T> = std::result::Result<T, ScanError>;
