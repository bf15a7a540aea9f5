//! Process execution for the rtx binary.

use std::io::Read;
use std::process::{Command, Stdio};

use crate::error::{HelperError, Result};

/// Captured outcome of one rtx invocation.
#[derive(Debug, Clone)]
pub struct RawOutput {
    /// Everything the subprocess wrote to stdout.
    pub stdout: String,

    /// Exit code; `None` when the process was killed by a signal.
    pub exit_code: Option<i32>,
}

impl RawOutput {
    /// Whether the subprocess reported success.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs rtx subcommands and captures their stdout.
///
/// Tests substitute a fake returning canned output and exit codes, so no
/// real process is spawned.
pub trait RtxRunner {
    /// Run `rtx <args...>` to completion, capturing stdout.
    fn run(&self, args: &[&str]) -> Result<RawOutput>;
}

/// Spawns the real `rtx` binary.
///
/// Stdin and stderr are inherited from the parent: stderr diagnostics reach
/// the user unbuffered, and an interactively prompting rtx blocks the call
/// until the user responds. Stdout is piped into memory.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    binary: String,
}

impl SystemRunner {
    /// A runner for the `rtx` binary on PATH.
    pub fn new() -> Self {
        Self::with_binary("rtx")
    }

    /// A runner for a specific binary (tests point this at a script).
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl RtxRunner for SystemRunner {
    fn run(&self, args: &[&str]) -> Result<RawOutput> {
        let command = format!("{} {}", self.binary, args.join(" "));
        tracing::debug!(%command, "running rtx");

        let mut child = Command::new(&self.binary)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| HelperError::SubprocessLaunch {
                command: command.clone(),
                source,
            })?;

        let mut buf = Vec::new();
        if let Some(mut pipe) = child.stdout.take() {
            pipe.read_to_end(&mut buf)
                .map_err(|source| HelperError::SubprocessOutput {
                    command: command.clone(),
                    source,
                })?;
        }

        let status = child
            .wait()
            .map_err(|source| HelperError::SubprocessOutput { command, source })?;

        Ok(RawOutput {
            stdout: String::from_utf8_lossy(&buf).into_owned(),
            exit_code: status.code(),
        })
    }
}
