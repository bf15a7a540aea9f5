//! Legacy version-file table.
//!
//! Before `.rtx.toml` and `.tool-versions`, each tool ecosystem grew its own
//! convention file. Some of those filenames (`go.mod`, `Gemfile`, `main.tf`)
//! are general-purpose project files rather than version pins; their presence
//! still counts as "this directory is configured for that tool", which is why
//! the per-tool opt-out exists.

/// Per-tool legacy version files, alphabetical by tool name.
///
/// Iteration order is deterministic on purpose. The order of filenames within
/// one tool's entry carries no precedence; any one of them is an equivalent
/// signal.
pub const LEGACY_VERSION_FILES: &[(&str, &[&str])] = &[
    ("crystal", &[".crystal-version"]),
    ("elixir", &[".exenv-version"]),
    ("go", &[".go-version", "go.mod"]),
    ("java", &[".java-version", ".sdkmanrc"]),
    ("node", &[".nvmrc", ".node-version"]),
    ("python", &[".python-version"]),
    ("ruby", &[".ruby-version", "Gemfile"]),
    ("terraform", &[".terraform-version", ".packer-version", "main.tf"]),
    ("yarn", &[".yarnrc"]),
];

/// An immutable tool → candidate-filenames mapping.
///
/// Wraps a static slice so tests can substitute a smaller table.
#[derive(Debug, Clone, Copy)]
pub struct LegacyFileTable {
    entries: &'static [(&'static str, &'static [&'static str])],
}

impl LegacyFileTable {
    /// The table of tools rtx recognizes.
    pub fn builtin() -> Self {
        Self {
            entries: LEGACY_VERSION_FILES,
        }
    }

    /// A custom table, for tests.
    pub fn new(entries: &'static [(&'static str, &'static [&'static str])]) -> Self {
        Self { entries }
    }

    /// Iterate `(tool, filenames)` entries in table order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static [&'static str])> + '_ {
        self.entries.iter().copied()
    }

    /// Candidate filenames for one tool, if it is in the table.
    pub fn filenames_for(&self, tool: &str) -> Option<&'static [&'static str]> {
        self.entries
            .iter()
            .find(|(name, _)| *name == tool)
            .map(|(_, filenames)| *filenames)
    }
}

impl Default for LegacyFileTable {
    fn default() -> Self {
        Self::builtin()
    }
}
