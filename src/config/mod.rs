//! Environment-derived configuration.
//!
//! rtx reads a handful of environment variables that change which files count
//! as version configuration. [`ResolverConfig`] captures them once per
//! process; nothing mutates it afterwards.
//!
//! Construction goes through the [`EnvSource`] abstraction so tests can
//! inject a synthetic environment without touching the real process env.

use std::collections::HashMap;

/// Overrides the primary config filename (default `.rtx.toml`).
pub const ENV_CONFIG_FILENAME: &str = "RTX_DEFAULT_CONFIG_FILENAME";

/// Overrides the tool-versions manifest filename (default `.tool-versions`).
pub const ENV_TOOL_VERSIONS_FILENAME: &str = "RTX_DEFAULT_TOOL_VERSIONS_FILENAME";

/// Enables/disables the legacy version-file tier.
///
/// Unset, empty, or the literal `1` means enabled; any other non-empty value
/// disables it.
pub const ENV_LEGACY_VERSION_FILE: &str = "RTX_LEGACY_VERSION_FILE";

/// Comma-separated tool names excluded from the legacy tier.
pub const ENV_LEGACY_DISABLE_TOOLS: &str = "RTX_LEGACY_VERSION_FILE_DISABLE_TOOLS";

/// Key-value lookup for environment variables.
///
/// Implemented by [`SystemEnv`] for the real process environment and by
/// `HashMap<String, String>` for tests.
pub trait EnvSource {
    /// Look up a variable; `None` when unset.
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvSource for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Resolver configuration, built once and immutable thereafter.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Filename of the primary (tool-agnostic) config file.
    pub config_filename: String,

    /// Filename of the multi-tool versions manifest.
    pub tool_versions_filename: String,

    /// Whether the legacy per-tool version-file tier is consulted at all.
    pub legacy_enabled: bool,

    /// Tool names excluded from the legacy tier.
    ///
    /// Entries are trimmed but empty entries (from a trailing comma) are kept
    /// as-is; no real tool name is empty, so they never match anything.
    pub legacy_disabled_tools: Vec<String>,
}

impl ResolverConfig {
    /// Build the configuration from an environment lookup.
    pub fn from_source(env: &dyn EnvSource) -> Self {
        let config_filename = env
            .var(ENV_CONFIG_FILENAME)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| ".rtx.toml".to_string());

        let tool_versions_filename = env
            .var(ENV_TOOL_VERSIONS_FILENAME)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| ".tool-versions".to_string());

        // Only the unset/empty and literal "1" forms enable the legacy tier.
        let legacy_flag = env.var(ENV_LEGACY_VERSION_FILE).unwrap_or_default();
        let legacy_enabled = legacy_flag.is_empty() || legacy_flag == "1";

        let disable_raw = env
            .var(ENV_LEGACY_DISABLE_TOOLS)
            .map(|v| v.trim().to_string())
            .unwrap_or_default();
        let legacy_disabled_tools = if disable_raw.is_empty() {
            Vec::new()
        } else {
            disable_raw.split(',').map(|s| s.trim().to_string()).collect()
        };

        Self {
            config_filename,
            tool_versions_filename,
            legacy_enabled,
            legacy_disabled_tools,
        }
    }

    /// Build the configuration from the real process environment.
    pub fn from_env() -> Self {
        Self::from_source(&SystemEnv)
    }

    /// Whether a tool is opted out of the legacy tier.
    pub fn is_legacy_disabled(&self, tool: &str) -> bool {
        self.legacy_disabled_tools.iter().any(|t| t == tool)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::from_source(&HashMap::<String, String>::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_with_empty_environment() {
        let config = ResolverConfig::from_source(&env(&[]));

        assert_eq!(config.config_filename, ".rtx.toml");
        assert_eq!(config.tool_versions_filename, ".tool-versions");
        assert!(config.legacy_enabled);
        assert!(config.legacy_disabled_tools.is_empty());
    }

    #[test]
    fn filename_overrides() {
        let config = ResolverConfig::from_source(&env(&[
            (ENV_CONFIG_FILENAME, ".mise.toml"),
            (ENV_TOOL_VERSIONS_FILENAME, ".versions"),
        ]));

        assert_eq!(config.config_filename, ".mise.toml");
        assert_eq!(config.tool_versions_filename, ".versions");
    }

    #[test]
    fn empty_filename_override_falls_back_to_default() {
        let config = ResolverConfig::from_source(&env(&[(ENV_CONFIG_FILENAME, "")]));
        assert_eq!(config.config_filename, ".rtx.toml");
    }

    #[test]
    fn legacy_enabled_when_unset_or_one() {
        let config = ResolverConfig::from_source(&env(&[]));
        assert!(config.legacy_enabled);

        let config = ResolverConfig::from_source(&env(&[(ENV_LEGACY_VERSION_FILE, "1")]));
        assert!(config.legacy_enabled);

        let config = ResolverConfig::from_source(&env(&[(ENV_LEGACY_VERSION_FILE, "")]));
        assert!(config.legacy_enabled);
    }

    #[test]
    fn legacy_disabled_by_any_other_value() {
        for value in ["0", "false", "true", "no", "yes"] {
            let config = ResolverConfig::from_source(&env(&[(ENV_LEGACY_VERSION_FILE, value)]));
            assert!(!config.legacy_enabled, "value {:?} should disable", value);
        }
    }

    #[test]
    fn disabled_tools_are_split_and_trimmed() {
        let config = ResolverConfig::from_source(&env(&[(
            ENV_LEGACY_DISABLE_TOOLS,
            " node , go ,ruby",
        )]));

        assert_eq!(config.legacy_disabled_tools, vec!["node", "go", "ruby"]);
        assert!(config.is_legacy_disabled("node"));
        assert!(config.is_legacy_disabled("go"));
        assert!(!config.is_legacy_disabled("python"));
    }

    #[test]
    fn trailing_comma_keeps_empty_entry() {
        let config =
            ResolverConfig::from_source(&env(&[(ENV_LEGACY_DISABLE_TOOLS, "node,")]));

        // The empty entry is harmless; no tool name is empty.
        assert_eq!(config.legacy_disabled_tools, vec!["node", ""]);
        assert!(!config.is_legacy_disabled("python"));
    }

    #[test]
    fn whitespace_only_disable_list_is_empty() {
        let config = ResolverConfig::from_source(&env(&[(ENV_LEGACY_DISABLE_TOOLS, "   ")]));
        assert!(config.legacy_disabled_tools.is_empty());
    }
}
