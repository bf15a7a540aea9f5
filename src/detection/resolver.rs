//! Three-tier version-file resolution.

use std::path::Path;

use crate::config::ResolverConfig;
use crate::error::Result;

use super::file_probe::{FileProbe, FsProbe};
use super::legacy::LegacyFileTable;

/// Decides whether a directory declares tool-version requirements.
///
/// Construct once per process and reuse across directories; the resolver
/// holds no mutable state, so repeated calls on an unchanged directory give
/// identical answers.
pub struct ConfigResolver<P = FsProbe> {
    config: ResolverConfig,
    table: LegacyFileTable,
    probe: P,
}

impl ConfigResolver<FsProbe> {
    /// A resolver over the real filesystem with the built-in legacy table.
    pub fn new(config: ResolverConfig) -> Self {
        Self::with_probe(config, FsProbe)
    }
}

impl<P: FileProbe> ConfigResolver<P> {
    /// A resolver with a custom probe (tests use a recording stub).
    pub fn with_probe(config: ResolverConfig, probe: P) -> Self {
        Self {
            config,
            table: LegacyFileTable::builtin(),
            probe,
        }
    }

    /// Replace the legacy table (tests use a smaller one).
    pub fn with_table(mut self, table: LegacyFileTable) -> Self {
        self.table = table;
        self
    }

    /// The configuration this resolver was built with.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Whether `path` declares tool-version requirements.
    ///
    /// Tiers are checked in precedence order and the first hit wins, so the
    /// legacy table is never probed when the primary config file or the
    /// tool-versions manifest is present, and never when the legacy tier is
    /// disabled. Any stat failure other than "not found" aborts the whole
    /// check.
    pub fn has_version_files(&self, path: &Path) -> Result<bool> {
        if self.probe.probe(path, &self.config.config_filename)? {
            return Ok(true);
        }

        if self.probe.probe(path, &self.config.tool_versions_filename)? {
            return Ok(true);
        }

        if self.config.legacy_enabled {
            for (tool, filenames) in self.table.entries() {
                if self.config.is_legacy_disabled(tool) {
                    continue;
                }
                if self.probe.probe_any(path, filenames)? {
                    return Ok(true);
                }
            }
        }

        Ok(false)
    }
}
