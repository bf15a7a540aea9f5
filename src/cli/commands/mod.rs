//! Command implementations.

pub mod completions;
pub mod detect;
pub mod dispatcher;
pub mod latest;
