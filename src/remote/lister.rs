//! Line-oriented parsing of rtx query output.

use crate::error::Result;
use crate::version::ToolVersion;

use super::runner::{RtxRunner, SystemRunner};

/// Enumerates versions the version manager knows about.
pub struct RemoteVersionLister<R = SystemRunner> {
    runner: R,
}

impl RemoteVersionLister<SystemRunner> {
    /// A lister backed by the real `rtx` binary.
    pub fn new() -> Self {
        Self::with_runner(SystemRunner::new())
    }
}

impl Default for RemoteVersionLister<SystemRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RtxRunner> RemoteVersionLister<R> {
    /// A lister over a custom runner (tests use canned output).
    pub fn with_runner(runner: R) -> Self {
        Self { runner }
    }

    /// All versions `rtx ls-remote` reports for a tool.
    ///
    /// Each non-empty stdout line becomes one token, order and text
    /// preserved: no trimming, no sorting, no deduplication, no syntax
    /// validation. A non-zero exit is advisory (see the module docs); only
    /// a launch failure returns an error.
    pub fn list_available(&self, tool: &str) -> Result<Vec<ToolVersion>> {
        let output = self.runner.run(&["ls-remote", tool])?;
        self.warn_on_failure(&output, tool);

        Ok(output
            .stdout
            .lines()
            .filter(|line| !line.is_empty())
            .map(ToolVersion::new)
            .collect())
    }

    /// The `(tool, version)` pairs `rtx current` reports as active.
    ///
    /// Lines without at least two whitespace-separated fields are skipped.
    pub fn current_tools(&self) -> Result<Vec<(String, String)>> {
        let output = self.runner.run(&["current"])?;
        self.warn_on_failure(&output, "current");

        Ok(output
            .stdout
            .lines()
            .filter_map(|line| {
                let mut fields = line.split_whitespace();
                match (fields.next(), fields.next()) {
                    (Some(tool), Some(version)) => {
                        Some((tool.to_string(), version.to_string()))
                    }
                    _ => None,
                }
            })
            .collect())
    }

    fn warn_on_failure(&self, output: &super::runner::RawOutput, context: &str) {
        match output.exit_code {
            Some(0) => {}
            Some(code) => {
                tracing::warn!(context, code, "rtx exited non-zero; parsing captured output anyway");
                eprintln!("exit code = {code}");
            }
            None => {
                tracing::warn!(context, "rtx was terminated by a signal; parsing captured output anyway");
            }
        }
    }
}
