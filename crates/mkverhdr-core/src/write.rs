//! Write-if-changed for generated files.
//!
//! Build systems key rebuilds off modification times, so an unchanged header
//! must not be touched.

use std::io;
use std::path::Path;

use tracing::debug;

/// What [`write_if_changed`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was absent or differed and has been (re)written.
    Written,
    /// The file already held exactly these bytes.
    Unchanged,
}

/// Write `contents` to `path` unless the file already holds exactly that.
///
/// No locking and no atomic rename: a single invocation per build owns the
/// destination.
///
/// # Errors
///
/// Returns any IO error other than the destination not existing.
pub fn write_if_changed(path: &Path, contents: &str) -> io::Result<WriteOutcome> {
    match std::fs::read(path) {
        Ok(existing) if existing == contents.as_bytes() => {
            debug!("{} is up to date", path.display());
            return Ok(WriteOutcome::Unchanged);
        }
        Ok(_) => debug!("{} differs, rewriting", path.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("{} does not exist yet", path.display());
        }
        Err(e) => return Err(e),
    }

    std::fs::write(path, contents)?;
    Ok(WriteOutcome::Written)
}
