//! rtx-helper - helper commands for the rtx runtime version manager.
//!
//! rtx-helper answers two questions rtx users keep asking their shells:
//! "does this directory pin any tool versions?" and "what is the newest
//! version of the tools I have active?". It never installs, switches, or
//! pins anything itself; rtx is invoked as a subprocess for remote queries
//! and the filesystem is only ever stat-ed, never written.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Environment-derived resolver configuration
//! - [`detection`] - Three-tier version-file discovery
//! - [`error`] - Error types and result aliases
//! - [`remote`] - rtx subprocess invocation and output parsing
//! - [`report`] - Latest-version report filtering
//! - [`ui`] - Terminal output styling
//! - [`version`] - The opaque version token type
//!
//! # Example
//!
//! ```
//! use rtx_helper::config::ResolverConfig;
//! use rtx_helper::detection::ConfigResolver;
//!
//! let resolver = ConfigResolver::new(ResolverConfig::default());
//! let configured = resolver.has_version_files(std::path::Path::new(".")).unwrap();
//! let _ = configured;
//! ```

pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod remote;
pub mod report;
pub mod ui;
pub mod version;

pub use error::{HelperError, Result};
