use crate::Direction;

/// What to do with a dotted path that matches no join shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum UnsupportedPattern {
    /// Fail with [`SortError::UnsupportedJoinPattern`](crate::SortError::UnsupportedJoinPattern).
    #[default]
    Error,
    /// Leave the query untouched, as older releases did.
    Ignore,
}

/// Options controlling how raw sort tokens are parsed and applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(default, rename_all = "kebab-case")
)]
pub struct SortOptions {
    /// Direction used when a token has no `,asc`/`,desc` suffix.
    pub default_order: Direction,
    pub unsupported: UnsupportedPattern,
}

impl SortOptions {
    pub const fn new() -> Self {
        Self {
            default_order: Direction::Asc,
            unsupported: UnsupportedPattern::Error,
        }
    }

    pub const fn default_order(mut self, order: Direction) -> Self {
        self.default_order = order;
        self
    }

    pub const fn unsupported(mut self, policy: UnsupportedPattern) -> Self {
        self.unsupported = policy;
        self
    }
}
