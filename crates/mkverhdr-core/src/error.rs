//! Domain-specific errors for header generation

use std::path::PathBuf;
use thiserror::Error;

/// Why a [`VersionSource`](crate::VersionSource) could not produce version info.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// No `git` executable on `PATH`.
    #[error("git executable not found: {0}")]
    GitNotFound(#[from] which::Error),

    /// `git` could not be started at all.
    #[error("Failed to spawn `git {args}`: {source}")]
    Spawn {
        /// Arguments passed to `git`.
        args: String,
        /// Error returned by the OS.
        #[source]
        source: std::io::Error,
    },

    /// `git` ran but reported failure.
    #[error("`git {args}` exited with {status}: {stderr}")]
    Command {
        /// Arguments passed to `git`.
        args: String,
        /// Exit status of the process.
        status: std::process::ExitStatus,
        /// Captured standard error, trimmed.
        stderr: String,
    },

    /// `git` printed something that is not UTF-8.
    #[error("`git {args}` produced non-UTF-8 output")]
    Utf8 {
        /// Arguments passed to `git`.
        args: String,
    },

    /// Any other failure reported by a custom source.
    #[error("{0}")]
    Other(String),
}

/// Failure to turn `SOURCE_DATE_EPOCH` into a calendar date.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DateError {
    /// The variable holds something other than a base-10 integer.
    #[error("SOURCE_DATE_EPOCH is not an integer: {value:?}")]
    NotAnInteger {
        /// Raw value of the variable.
        value: String,
    },

    /// The timestamp does not map to a representable date.
    #[error("SOURCE_DATE_EPOCH is out of range: {0}")]
    OutOfRange(i64),
}

/// Top-level failure of a generation run.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Version info unavailable or has fewer than three components.
    ///
    /// The display text is the guidance shown to the user verbatim.
    #[error(
        "Cannot determine version.

CircuitPython must be built from a git clone with tags.
If you cloned from a fork, fetch the tags from adafruit/circuitpython as follows:

    make fetch-tags"
    )]
    CannotDetermineVersion {
        /// Underlying cause, kept for logging only.
        reason: String,
    },

    /// `SOURCE_DATE_EPOCH` could not be interpreted.
    #[error(transparent)]
    BuildDate(#[from] DateError),

    /// Reading or writing the destination failed.
    #[error("IO error on {}: {source}", path.display())]
    Io {
        /// Destination being read or written.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    /// Create a `CannotDetermineVersion` error carrying a diagnostic reason.
    pub fn cannot_determine(reason: impl std::fmt::Display) -> Self {
        Self::CannotDetermineVersion {
            reason: reason.to_string(),
        }
    }

    /// Whether this is the fatal "fetch the tags" configuration error.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::CannotDetermineVersion { .. })
    }
}
