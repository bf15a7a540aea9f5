//! The ToolVersion value type.
//!
//! Wraps one version token exactly as the remote lister emitted it. The token
//! is opaque: no syntax validation, no normalization, no ordering. "Latest"
//! is positional (the remote lister's own ordering is authoritative), so the
//! only semantic question this type answers is whether a token is tagged as a
//! prerelease.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Prerelease tags, matched case-insensitively at a component boundary, so
/// `3.12.0-rc1`, `1.0.0-beta.2`, `17-ea` and Python-style `3.13.0a4` match
/// while `4.2.0-carbon` does not.
fn prerelease_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"(?i)(^|[.\-_0-9])(alpha|beta|rc|pre(view)?|dev|snapshot|nightly|ea)([.\-_0-9]|$)|[0-9](a|b)[0-9]+$",
        )
        .unwrap()
    })
}

/// One version token from a remote listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolVersion(String);

impl ToolVersion {
    /// Wrap a raw token verbatim.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The token exactly as emitted.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the token carries a prerelease tag.
    pub fn is_prerelease(&self) -> bool {
        prerelease_pattern().is_match(&self.0)
    }
}

impl fmt::Display for ToolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ToolVersion {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
