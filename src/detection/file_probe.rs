//! File existence probes.
//!
//! The resolver only ever needs "does `dir/filename` exist?", but the answer
//! has three outcomes: yes, no, and "the filesystem refused to say"
//! (permission denied and the like). The last one must propagate — silently
//! treating it as absent would make a scan claim a configured directory is
//! unconfigured.

use std::path::Path;

use crate::error::Result;

/// Probes for file existence inside a directory.
///
/// Abstracted behind a trait so tests can record which paths were queried
/// and inject synthetic errors without touching a real filesystem.
pub trait FileProbe {
    /// Check whether `dir/filename` exists.
    ///
    /// "Not found" is `Ok(false)`; any other stat failure is an error.
    fn probe(&self, dir: &Path, filename: &str) -> Result<bool>;

    /// Check whether any of the listed filenames exists in `dir`.
    ///
    /// Stops at the first hit; errors short-circuit.
    fn probe_any(&self, dir: &Path, filenames: &[&str]) -> Result<bool> {
        for filename in filenames {
            if self.probe(dir, filename)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// The real filesystem probe.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl FileProbe for FsProbe {
    fn probe(&self, dir: &Path, filename: &str) -> Result<bool> {
        match std::fs::metadata(dir.join(filename)) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
