//! The generation pipeline: resolve, validate, render, write-if-changed.

use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::{DateError, GenerateError};
use crate::header::render;
use crate::reporter::Reporter;
use crate::version::VersionSource;
use crate::write::{WriteOutcome, write_if_changed};

/// Generates a version header from a [`VersionSource`].
#[derive(Debug)]
pub struct Generator<S, R> {
    source: S,
    reporter: R,
}

impl<S: VersionSource, R: Reporter> Generator<S, R> {
    /// Create a generator around a version source and a reporter.
    pub fn new(source: S, reporter: R) -> Self {
        Self { source, reporter }
    }

    /// Produce the header text for `repo`, without touching the filesystem.
    ///
    /// `build_date` is only called once version info has been resolved and
    /// validated, so a broken checkout reports the version problem first.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::CannotDetermineVersion`] if the source fails
    /// or reports fewer than three version components, and
    /// [`GenerateError::BuildDate`] if `build_date` fails.
    pub fn render(
        &self,
        repo: &Path,
        build_date: impl FnOnce() -> Result<NaiveDate, DateError>,
    ) -> Result<String, GenerateError> {
        let info = self.source.resolve(repo).map_err(|e| {
            debug!("version resolution failed for {}: {e}", repo.display());
            GenerateError::cannot_determine(e)
        })?;

        let Some(numbers) = info.numbers() else {
            debug!(
                "tag {:?} has only {} version component(s)",
                info.tag,
                info.components.len()
            );
            return Err(GenerateError::cannot_determine(format!(
                "tag {:?} has fewer than 3 version components",
                info.tag
            )));
        };

        let date = build_date()?;
        Ok(render(&info, &numbers, date))
    }

    /// Render the header for `repo` and write it to `dest` if it changed.
    ///
    /// The reporter is told about the write only when one happens. On error
    /// `dest` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::CannotDetermineVersion`] when version info is
    /// unavailable, [`GenerateError::BuildDate`] when the date cannot be
    /// computed, or [`GenerateError::Io`] if `dest` cannot be read or written.
    pub fn generate(
        &self,
        repo: &Path,
        dest: &Path,
        build_date: impl FnOnce() -> Result<NaiveDate, DateError>,
    ) -> Result<WriteOutcome, GenerateError> {
        let contents = self.render(repo, build_date)?;

        let outcome = write_if_changed(dest, &contents).map_err(|source| GenerateError::Io {
            path: dest.to_path_buf(),
            source,
        })?;

        if outcome == WriteOutcome::Written {
            info!("generated {}", dest.display());
            self.reporter.generated(dest);
        }
        Ok(outcome)
    }
}
