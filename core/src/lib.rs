//! Sort directive parsing and join resolution for drizzle-sort.
//!
//! A raw token such as `"posts.comments.post_id.created_at,desc"` is parsed
//! into a [`Directive`], classified into a [`JoinPlan`] and applied to any
//! [`SortableQuery`] as LEFT JOINs, a projection and an ORDER BY term.

pub mod directive;
pub mod error;
pub mod model;
pub mod options;
pub mod plan;
pub mod query;
pub mod resolver;
pub mod tracing;

// Re-export key types and traits
pub use directive::{Direction, Directive};
pub use error::{Result, SortError};
pub use model::{CustomSort, NoHooks, SortHooks, SortableModel};
pub use options::{SortOptions, UnsupportedPattern};
pub use plan::{JoinPlan, JoinSpec};
pub use query::{JoinClause, OrderByClause, SelectQuery, SortableQuery};
pub use resolver::{Sorter, apply, apply_plan};

/// Parses a raw sort token, falling back to `default_order` when it carries no direction.
///
/// Shorthand for [`Directive::parse`].
#[inline]
pub fn parse(raw: &str, default_order: Direction) -> Result<Directive> {
    Directive::parse(raw, default_order)
}
