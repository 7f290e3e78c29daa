//! Configuration for the drizzle-sort CLI
//!
//! Handles loading `drizzle-sort.toml`:
//!
//! ```toml
//! table = "posts"
//! default-order = "desc"
//! unsupported = "ignore"
//! ```

use drizzle_sort::{Direction, SortOptions, UnsupportedPattern};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "drizzle-sort.toml";

/// Settings read from `drizzle-sort.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Base table queried when `--table` is not given
    pub table: Option<String>,
    #[serde(flatten)]
    pub options: SortOptions,
}

impl Config {
    /// Load from the default path, falling back to defaults if it does not exist
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::load_from(Path::new(CONFIG_FILE)) {
            Err(ConfigError::NotFound(_)) => Ok(Self::default()),
            result => result,
        }
    }

    /// Load from specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.into())
            } else {
                ConfigError::Io(path.into(), e)
            }
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(path.into(), e))
    }

    /// Apply command-line overrides on top of the file settings.
    pub fn with_overrides(
        mut self,
        table: Option<String>,
        default_order: Option<Direction>,
        ignore_unsupported: bool,
    ) -> Self {
        if table.is_some() {
            self.table = table;
        }
        if let Some(order) = default_order {
            self.options.default_order = order;
        }
        if ignore_unsupported {
            self.options.unsupported = UnsupportedPattern::Ignore;
        }
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid config {}: {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),
}
