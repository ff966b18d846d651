//! Reporter trait for dependency injection
//!
//! Lets the pipeline announce generated files without deciding where the
//! announcement goes.

use std::path::Path;

/// Receives notices from a generation run.
pub trait Reporter {
    /// A file was (re)written.
    fn generated(&self, path: &Path);
}

impl<T: Reporter + ?Sized> Reporter for &T {
    fn generated(&self, path: &Path) {
        (**self).generated(path);
    }
}

/// A no-op reporter for silent operations (e.g., testing).
#[derive(Debug, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn generated(&self, _: &Path) {}
}
