//! Error types for rtx-helper operations.
//!
//! This module defines [`HelperError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `HelperError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `HelperError::Other`) for unexpected errors
//! - Filesystem errors and subprocess launch failures are propagated to the
//!   caller unchanged; a non-zero subprocess exit is deliberately *not* an
//!   error (see [`crate::remote`])

use thiserror::Error;

/// Core error type for rtx-helper operations.
#[derive(Debug, Error)]
pub enum HelperError {
    /// The rtx binary could not be started or its pipes could not be set up.
    #[error("Failed to launch '{command}': {source}")]
    SubprocessLaunch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Subprocess output could not be read.
    #[error("Failed to read output of '{command}': {source}")]
    SubprocessOutput {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper (filesystem probes and friends).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed (for `--json` output).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for rtx-helper operations.
pub type Result<T> = std::result::Result<T, HelperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subprocess_launch_displays_command() {
        let err = HelperError::SubprocessLaunch {
            command: "rtx ls-remote node".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("rtx ls-remote node"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: HelperError = io_err.into();
        assert!(matches!(err, HelperError::Io(_)));
    }

    #[test]
    fn io_error_preserves_kind() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: HelperError = io_err.into();
        match err {
            HelperError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::PermissionDenied),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(HelperError::Other(anyhow::anyhow!("test")))
        }
        assert!(returns_error().is_err());
    }
}
