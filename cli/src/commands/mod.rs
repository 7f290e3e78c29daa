//! CLI command implementations
//!
//! Each command returns the text to print so it can be tested without a terminal.

pub mod explain;
pub mod plan;
