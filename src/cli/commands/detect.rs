//! Detect command implementation.
//!
//! `rtx-helper detect` reports, per directory, whether any recognized
//! version-declaration mechanism is present. Exit code 0 means every queried
//! directory is configured, 1 means at least one is not, 2 means a directory
//! could not be checked at all.

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::args::DetectArgs;
use crate::config::ResolverConfig;
use crate::detection::ConfigResolver;
use crate::error::Result;
use crate::ui::Theme;

use super::dispatcher::{Command, CommandResult};

/// One directory's detection outcome, for `--json`.
#[derive(Debug, Serialize)]
struct DetectRow {
    path: PathBuf,
    has_version_files: bool,
}

/// The detect command implementation.
pub struct DetectCommand {
    args: DetectArgs,
    quiet: bool,
}

impl DetectCommand {
    /// Create a new detect command.
    pub fn new(args: DetectArgs, quiet: bool) -> Self {
        Self { args, quiet }
    }

    fn paths(&self) -> Vec<PathBuf> {
        if self.args.paths.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            self.args.paths.clone()
        }
    }
}

impl Command for DetectCommand {
    fn execute(&self) -> Result<CommandResult> {
        let resolver = ConfigResolver::new(ResolverConfig::from_env());
        let theme = Theme::new();

        let mut rows = Vec::new();
        let mut missing = false;
        let mut failed = false;

        for path in self.paths() {
            match resolver.has_version_files(&path) {
                Ok(found) => {
                    if !found {
                        missing = true;
                    }
                    rows.push(DetectRow {
                        path,
                        has_version_files: found,
                    });
                }
                Err(e) => {
                    // One unreadable directory must not contaminate the
                    // others; report it and keep scanning.
                    failed = true;
                    eprintln!(
                        "{} {}: {}",
                        theme.error.apply_to("error:"),
                        path.display(),
                        e
                    );
                }
            }
        }

        if self.args.json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        } else if !self.quiet {
            for row in &rows {
                let verdict = if row.has_version_files {
                    theme.current.apply_to("version files found")
                } else {
                    theme.dim.apply_to("no version files")
                };
                println!(
                    "{} {}",
                    theme.highlight.apply_to(row.path.display()),
                    verdict
                );
            }
        }

        if failed {
            Ok(CommandResult::failure(2))
        } else if missing {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}
