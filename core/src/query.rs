//! The query-building surface that sort directives are applied to.
//!
//! [`SortableQuery`] is implemented by whatever query builder the host
//! application uses. [`SelectQuery`] is a small in-memory implementation that
//! renders SQL text, useful for inspection and tests.

use compact_str::CompactString;
use hashbrown::HashSet;
use std::fmt;

use crate::Direction;

/// Comparison operator used for every join condition.
pub const EQ: &str = "=";

/// Query builder operations needed to apply sort directives.
///
/// Implementations must only append: directives never remove or reorder
/// existing clauses.
pub trait SortableQuery {
    /// Adds an ORDER BY term.
    fn order_by(&mut self, column: &str, direction: Direction);

    /// Adds `LEFT JOIN table ON first operator second`.
    fn left_join(&mut self, table: &str, first: &str, operator: &str, second: &str);

    /// Replaces the projected columns.
    fn select(&mut self, columns: &str);

    /// Target tables of the joins applied so far.
    fn joined_tables(&self) -> Vec<&str>;

    /// Returns true if a join to `table` is already present.
    fn has_join(&self, table: &str) -> bool {
        self.joined_tables().contains(&table)
    }
}

/// LEFT JOIN clause for SQL queries
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JoinClause {
    pub table: CompactString,
    pub first: CompactString,
    pub operator: CompactString,
    pub second: CompactString,
}

impl fmt::Display for JoinClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LEFT JOIN {} ON {} {} {}",
            self.table, self.first, self.operator, self.second
        )
    }
}

/// ORDER BY clause for SQL queries
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderByClause {
    pub column: CompactString,
    pub direction: Direction,
}

impl fmt::Display for OrderByClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.column, self.direction.as_sql())
    }
}

/// In-memory SELECT builder over a single base table.
///
/// ```
/// use drizzle_sort_core::{Direction, SelectQuery, SortableQuery};
///
/// let mut query = SelectQuery::from("posts");
/// query.left_join("comments", "comments.post_id", "=", "posts.id");
/// query.order_by("comments.created_at", Direction::Desc);
/// assert_eq!(
///     query.to_sql(),
///     "SELECT * FROM posts LEFT JOIN comments ON comments.post_id = posts.id \
///      ORDER BY comments.created_at DESC"
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct SelectQuery {
    table: CompactString,
    columns: Option<CompactString>,
    joins: Vec<JoinClause>,
    joined: HashSet<CompactString>,
    order_by: Vec<OrderByClause>,
}

impl SelectQuery {
    /// Create a new query selecting from `table`
    pub fn from(table: impl Into<CompactString>) -> Self {
        Self {
            table: table.into(),
            ..Default::default()
        }
    }

    #[inline]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// The projected columns, `*` until [`SortableQuery::select`] is called.
    pub fn columns(&self) -> &str {
        self.columns.as_deref().unwrap_or("*")
    }

    pub fn joins(&self) -> &[JoinClause] {
        &self.joins
    }

    pub fn order_by_clauses(&self) -> &[OrderByClause] {
        &self.order_by
    }

    /// Render the query as SQL text
    pub fn to_sql(&self) -> String {
        let mut sql = format!("SELECT {} FROM {}", self.columns(), self.table);

        for join in &self.joins {
            sql.push(' ');
            sql.push_str(&join.to_string());
        }

        for (i, order_by) in self.order_by.iter().enumerate() {
            sql.push_str(if i == 0 { " ORDER BY " } else { ", " });
            sql.push_str(&order_by.to_string());
        }

        sql
    }
}

impl SortableQuery for SelectQuery {
    fn order_by(&mut self, column: &str, direction: Direction) {
        self.order_by.push(OrderByClause {
            column: column.into(),
            direction,
        });
    }

    fn left_join(&mut self, table: &str, first: &str, operator: &str, second: &str) {
        self.joined.insert(table.into());
        self.joins.push(JoinClause {
            table: table.into(),
            first: first.into(),
            operator: operator.into(),
            second: second.into(),
        });
    }

    fn select(&mut self, columns: &str) {
        self.columns = Some(columns.into());
    }

    fn joined_tables(&self) -> Vec<&str> {
        self.joins.iter().map(|j| j.table.as_str()).collect()
    }

    fn has_join(&self, table: &str) -> bool {
        self.joined.contains(table)
    }
}

impl fmt::Display for SelectQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_all_by_default() {
        let query = SelectQuery::from("users");
        assert_eq!(query.columns(), "*");
        assert_eq!(query.to_sql(), "SELECT * FROM users");
    }

    #[test]
    fn test_clauses_render_in_order() {
        let mut query = SelectQuery::from("users");
        query.select("users.*");
        query.left_join("role_user", "role_user.user_id", EQ, "users.id");
        query.left_join("roles", "role_user.role_id", EQ, "roles.id");
        query.order_by("roles.name", Direction::Asc);
        query.order_by("users.id", Direction::Desc);

        assert_eq!(
            query.to_sql(),
            "SELECT users.* FROM users \
             LEFT JOIN role_user ON role_user.user_id = users.id \
             LEFT JOIN roles ON role_user.role_id = roles.id \
             ORDER BY roles.name ASC, users.id DESC"
        );
    }

    #[test]
    fn test_join_introspection() {
        let mut query = SelectQuery::from("posts");
        assert!(!query.has_join("comments"));

        query.left_join("comments", "comments.post_id", EQ, "posts.id");
        assert!(query.has_join("comments"));
        assert!(!query.has_join("posts"));
        assert_eq!(query.joined_tables(), ["comments"]);
    }

    #[test]
    fn test_select_replaces_projection() {
        let mut query = SelectQuery::from("posts");
        query.select("posts.*");
        query.select("posts.*");
        assert_eq!(query.columns(), "posts.*");
    }
}
