//! Version-file discovery.
//!
//! Decides whether a project directory declares tool-version requirements.
//! Three tiers are recognized, in precedence order:
//!
//! 1. the primary config file (`.rtx.toml` by default),
//! 2. the tool-versions manifest (`.tool-versions` by default),
//! 3. legacy per-tool convention files (`.nvmrc`, `.python-version`, ...).
//!
//! The legacy tier can be switched off globally or per tool via
//! [`crate::config::ResolverConfig`]. Detection only stats files by exact
//! name inside the queried directory; it never reads contents, never writes,
//! and never descends into subdirectories.

mod file_probe;
mod legacy;
mod resolver;

pub use file_probe::{FileProbe, FsProbe};
pub use legacy::{LegacyFileTable, LEGACY_VERSION_FILES};
pub use resolver::ConfigResolver;
