//! Console output for generation runs.

use std::path::Path;

use mkverhdr_core::Reporter;

/// Prints `GEN <path>` on stdout for every file written.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn generated(&self, path: &Path) {
        println!("GEN {}", path.display());
    }
}
