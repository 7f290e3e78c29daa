use compact_str::CompactString;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SortError {
    /// The raw sort token could not be split into a field and direction
    #[error("Malformed sort directive: {raw:?}")]
    MalformedDirective { raw: CompactString },

    /// A direction outside of `asc`/`desc`
    #[error("Invalid sort direction: {0:?} (expected \"asc\" or \"desc\")")]
    InvalidDirection(CompactString),

    /// A dotted field path that matches none of the known join shapes
    #[error("Unsupported join pattern {field:?} ({segments} segments)")]
    UnsupportedJoinPattern { field: CompactString, segments: usize },

    /// Error reported by a model's custom sort handler
    #[error("Custom sort error: {0}")]
    Hook(String),
}

impl SortError {
    pub(crate) fn malformed(raw: &str) -> Self {
        Self::MalformedDirective { raw: raw.into() }
    }

    pub(crate) fn unsupported(field: &str) -> Self {
        Self::UnsupportedJoinPattern {
            field: field.into(),
            segments: field.split('.').count(),
        }
    }
}

/// Result type for sort operations
pub type Result<T> = std::result::Result<T, SortError>;
