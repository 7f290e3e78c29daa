//! # Drizzle Sort
//!
//! Turns sort parameters such as `?sort=posts.comments.post_id.created_at,desc`
//! into LEFT JOINs and ORDER BY terms on a query builder.
//!
//! ## Quick Start
//!
//! ```rust
//! use drizzle_sort::prelude::*;
//!
//! # fn main() -> drizzle_sort::Result<()> {
//! let sorter = Sorter::new(SortOptions::new().default_order(Direction::Desc));
//! let mut query = SelectQuery::from("posts");
//!
//! sorter.sort("posts.comments.post_id.created_at", &mut query, &NoHooks)?;
//! sorter.sort("title,asc", &mut query, &NoHooks)?;
//!
//! assert_eq!(
//!     query.to_sql(),
//!     "SELECT posts.* FROM posts LEFT JOIN comments ON comments.post_id = posts.id \
//!      ORDER BY comments.created_at DESC, title ASC"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Path Grammar
//!
//! A token is `<field>[,<asc|desc>]`. A field without dots is a column on the
//! queried table. Dotted fields describe the relation to join through:
//!
//! | Shape         | Field                                                      | Joins                                             |
//! |---------------|------------------------------------------------------------|---------------------------------------------------|
//! | Normal        | `main.join.fk.sort`                                        | `join.fk = main.id`                               |
//! | Flipped       | `main.join.fk.sort.flip`                                   | `main.fk = join.id`                               |
//! | Polymorphic   | `main.poly.poly_fk.join.fk.sort.flip`                      | `main.poly_fk = poly.id`, `poly.fk = join.id`     |
//! | Pivot         | `main.join.fk.sort.pivot.table.local_key`                  | `table.local_key = main.id`, `table.fk = join.id` |
//! | Pivot flipped | `main.join.fk.sort.pivot.table.local_key.join2.fk2.sort2.flip` | pivot joins, then `join2.id = join.fk2`       |
//! | Pivot flipped | `main.join.fk.sort.pivot.table.local_key.join2.fk2.flip`       | as above, ordering `join2.sort`               |
//!
//! Joins to tables that are already joined are skipped, and the projection
//! is restricted to `main.*` so joined columns never leak into result rows.
//!
//! ## Custom Sorts
//!
//! Models can take over individual fields by implementing [`SortableModel`],
//! or by registering closures on a [`SortHooks`] registry.

pub use drizzle_sort_core::error::Result;

/// Error types
pub mod error {
    pub use drizzle_sort_core::error::SortError;
}

pub use drizzle_sort_core::{
    CustomSort, Direction, Directive, JoinClause, JoinPlan, JoinSpec, NoHooks, OrderByClause,
    SelectQuery, SortError, SortHooks, SortOptions, SortableModel, SortableQuery, Sorter,
    UnsupportedPattern, apply, apply_plan, parse,
};

/// Query builder surface and the in-memory [`SelectQuery`].
pub mod query {
    pub use drizzle_sort_core::query::*;
}

/// Join plan classification for dotted sort paths.
pub mod plan {
    pub use drizzle_sort_core::plan::*;
}

/// Commonly used types.
///
/// ```rust
/// use drizzle_sort::prelude::*;
/// ```
pub mod prelude {
    pub use drizzle_sort_core::{
        Direction, Directive, NoHooks, SelectQuery, SortHooks, SortOptions, SortableModel,
        SortableQuery, Sorter, UnsupportedPattern,
    };
}
