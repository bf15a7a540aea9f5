//! Remote version enumeration.
//!
//! Wraps the `rtx` binary's query subcommands. The binary is treated as an
//! opaque line-oriented text producer: its stdout is captured and split into
//! tokens, its stderr and stdin are passed through live so the user sees
//! diagnostics (and can answer prompts) in real time.
//!
//! A non-zero exit from rtx is advisory, not fatal: some providers exit
//! non-zero while still emitting a usable partial list, and users rely on
//! that partial output. The exit code is surfaced as a warning and whatever
//! stdout was captured is parsed anyway. Only a failure to launch the binary
//! at all aborts a query.

mod lister;
mod runner;

pub use lister::RemoteVersionLister;
pub use runner::{RawOutput, RtxRunner, SystemRunner};
