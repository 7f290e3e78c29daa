//! drizzle-sort CLI - inspect how sort parameters resolve into SQL
//!
//! # Commands
//!
//! - `drizzle-sort explain --table posts <SORT>...` - print the SELECT the sort
//!   tokens produce
//! - `drizzle-sort plan <SORT>...` - show the join shape of each token
//!
//! # Configuration
//!
//! Settings are read from `drizzle-sort.toml` when present (or from
//! `--config PATH`); command-line flags take precedence:
//!
//! ```toml
//! table = "posts"
//! default-order = "desc"
//! unsupported = "error"
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod output;
