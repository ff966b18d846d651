//! Run options assembled from the command line and the environment.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use mkverhdr_core::SOURCE_DATE_EPOCH;

use crate::Cli;

/// Everything a generation run needs, with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Repository to query.
    pub repo_path: PathBuf,
    /// Header file to write.
    pub dest: PathBuf,
    /// Raw `SOURCE_DATE_EPOCH`, if set.
    pub source_date_epoch: Option<String>,
}

impl Options {
    /// Combine parsed arguments with explicit environment inputs.
    ///
    /// `argv0` is the program path as invoked; it only matters when
    /// `--repo-path` was not given.
    pub fn new(cli: Cli, argv0: Option<&OsStr>, source_date_epoch: Option<String>) -> Self {
        let repo_path = cli
            .repo_path
            .unwrap_or_else(|| default_repo_path(Path::new(argv0.unwrap_or_default())));

        Self {
            repo_path,
            dest: cli.dest,
            source_date_epoch,
        }
    }

    /// Like [`Options::new`], reading `argv[0]` and `SOURCE_DATE_EPOCH` from the process.
    pub fn from_env(cli: Cli) -> Self {
        let argv0 = std::env::args_os().next();
        // A non-UTF-8 value is kept lossily so it fails the integer parse.
        let epoch = std::env::var_os(SOURCE_DATE_EPOCH).map(|v| v.to_string_lossy().into_owned());
        Self::new(cli, argv0.as_deref(), epoch)
    }
}

/// The repository one level above the directory holding the program.
///
/// A bare program name (found via `PATH`) gives `..`.
///
/// # Example
///
/// ```
/// use mkverhdr_cli::options::default_repo_path;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(default_repo_path(Path::new("tools/makeversionhdr")), PathBuf::from("tools/.."));
/// assert_eq!(default_repo_path(Path::new("makeversionhdr")), PathBuf::from(".."));
/// ```
pub fn default_repo_path(argv0: &Path) -> PathBuf {
    argv0.parent().unwrap_or(Path::new("")).join("..")
}
