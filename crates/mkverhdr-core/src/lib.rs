//! Core library for `makeversionhdr`.
//!
//! Resolves version metadata from a git checkout and renders it into a
//! C header of `MICROPY_*` macros consumed by the firmware build.
//!
//! # Pipeline
//!
//! ```text
//! VersionSource::resolve ──► VersionNumbers ──► render ──► write_if_changed
//!                                  ▲
//!                     build_date ──┘
//! ```
//!
//! The version source is a trait so the pipeline can be driven by a stub
//! in tests; [`git::GitVersionSource`] is the real implementation.

pub mod date;
pub mod error;
pub mod generator;
pub mod git;
pub mod header;
pub mod reporter;
pub mod version;
pub mod write;

pub use date::{SOURCE_DATE_EPOCH, build_date};
pub use error::{DateError, GenerateError, ResolveError};
pub use generator::Generator;
pub use git::GitVersionSource;
pub use header::render;
pub use reporter::{NullReporter, Reporter};
pub use version::{VersionInfo, VersionNumbers, VersionSource};
pub use write::{WriteOutcome, write_if_changed};

/// Name written into the first line of every generated header.
pub const GENERATOR_NAME: &str = "makeversionhdr";
