//! Error types for the CLI

use drizzle_sort::SortError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A sort token could not be parsed or applied
    #[error("{0}")]
    Sort(#[from] SortError),

    /// No base table from `--table` or the config file
    #[error("No table given: pass --table or set `table` in the config file")]
    MissingTable,
}
