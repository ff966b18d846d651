//! makeversionhdr - generate a C header of version macros from git metadata
//!
//! Invoked once per firmware build as a pre-build step:
//!
//! ```text
//! makeversionhdr [-r <repo-path>] <dest>
//! ```
//!
//! The header at `<dest>` is only rewritten when its contents change, so an
//! unchanged checkout does not trigger a rebuild of everything that includes it.

pub mod options;
pub mod reporter;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use mkverhdr_core::date::local_today;
use mkverhdr_core::{GitVersionSource, Generator, WriteOutcome, build_date};

pub use crate::options::Options;
pub use crate::reporter::ConsoleReporter;

/// Command line of `makeversionhdr`.
#[derive(Debug, Parser)]
#[command(name = "makeversionhdr")]
#[command(
    version,
    about = "Generate a header file with macros defining version info"
)]
pub struct Cli {
    /// Path to the git repo to query for version [default: <dir of this binary>/..]
    #[arg(short, long)]
    pub repo_path: Option<PathBuf>,

    /// Output file path
    pub dest: PathBuf,
}

/// Run one generation with the real git source and console output.
///
/// # Errors
///
/// Fails with [`mkverhdr_core::GenerateError`] when version info is
/// unavailable, `SOURCE_DATE_EPOCH` is malformed, or the destination cannot be
/// read or written. Version problems win over a malformed date.
pub fn run(options: &Options) -> Result<WriteOutcome> {
    let epoch = options.source_date_epoch.as_deref();
    let generator = Generator::new(GitVersionSource::new(), ConsoleReporter);
    let outcome =
        generator.generate(&options.repo_path, &options.dest, || build_date(epoch, local_today))?;
    Ok(outcome)
}
