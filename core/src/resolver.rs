//! Applies sort directives to a query.
//!
//! Resolution runs in three steps:
//!
//! 1. A model override registered for the field takes over completely.
//! 2. A plain column is ordered directly.
//! 3. A dotted path is classified into a [`JoinPlan`]; its joins are added
//!    (skipping tables that are already joined), the projection is restricted
//!    to the main table and the joined column is ordered.
//!
//! Directives against the same query must be applied one after another, so
//! that later directives see the joins added by earlier ones.

use compact_str::format_compact;

use crate::{
    Direction, Directive,
    error::{Result, SortError},
    model::SortableModel,
    options::{SortOptions, UnsupportedPattern},
    plan::JoinPlan,
    query::{EQ, SortableQuery},
};

/// Applies one directive to `query`, consulting `model` for overrides first.
///
/// ```
/// use drizzle_sort_core::{Direction, Directive, NoHooks, SelectQuery, apply};
///
/// let directive = Directive::parse("posts.comments.post_id.created_at,desc", Direction::Asc)?;
/// let mut query = SelectQuery::from("posts");
/// apply(&directive, &mut query, &NoHooks)?;
///
/// assert_eq!(
///     query.to_sql(),
///     "SELECT posts.* FROM posts LEFT JOIN comments ON comments.post_id = posts.id \
///      ORDER BY comments.created_at DESC"
/// );
/// # Ok::<(), drizzle_sort_core::SortError>(())
/// ```
pub fn apply<Q, M>(directive: &Directive, query: &mut Q, model: &M) -> Result<()>
where
    Q: SortableQuery + ?Sized,
    M: SortableModel<Q> + ?Sized,
{
    if let Some(handler) = model.custom_sort(directive.field()) {
        crate::sort_trace_hook!(directive.field());
        return handler.apply(query, directive.order());
    }

    let plan = JoinPlan::classify(directive.field())?;
    apply_plan(&plan, directive.order(), query);
    Ok(())
}

/// Emits the joins, projection and ordering for an already classified plan.
pub fn apply_plan<Q>(plan: &JoinPlan<'_>, order: Direction, query: &mut Q)
where
    Q: SortableQuery + ?Sized,
{
    for join in plan.joins() {
        if query.has_join(join.table) {
            crate::sort_trace_join!(join.table, "duplicate");
            continue;
        }
        query.left_join(join.table, &join.first, EQ, &join.second);
        crate::sort_trace_join!(join.table, "added");
    }

    if let Some(main) = plan.main_table() {
        query.select(&format_compact!("{main}.*"));
    }

    query.order_by(&plan.order_column(), order);
}

/// Parses and applies raw sort tokens under a fixed set of [`SortOptions`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Sorter {
    options: SortOptions,
}

impl Sorter {
    pub const fn new(options: SortOptions) -> Self {
        Self { options }
    }

    #[inline]
    pub const fn options(&self) -> &SortOptions {
        &self.options
    }

    /// Parses a raw token using the configured default direction.
    pub fn parse(&self, raw: &str) -> Result<Directive> {
        Directive::parse(raw, self.options.default_order)
    }

    /// Applies a directive, honouring the configured [`UnsupportedPattern`] policy.
    pub fn apply<Q, M>(&self, directive: &Directive, query: &mut Q, model: &M) -> Result<()>
    where
        Q: SortableQuery + ?Sized,
        M: SortableModel<Q> + ?Sized,
    {
        match apply(directive, query, model) {
            Err(SortError::UnsupportedJoinPattern { .. })
                if self.options.unsupported == UnsupportedPattern::Ignore =>
            {
                crate::sort_trace_skipped!(directive.field());
                Ok(())
            }
            result => result,
        }
    }

    /// Parses `raw` and applies the resulting directive.
    pub fn sort<Q, M>(&self, raw: &str, query: &mut Q, model: &M) -> Result<Directive>
    where
        Q: SortableQuery + ?Sized,
        M: SortableModel<Q> + ?Sized,
    {
        let directive = self.parse(raw)?;
        self.apply(&directive, query, model)?;
        Ok(directive)
    }

    /// Applies each raw token in order, stopping at the first error.
    ///
    /// Directives applied before the failing one stay applied.
    pub fn sort_all<Q, M, I>(&self, raws: I, query: &mut Q, model: &M) -> Result<Vec<Directive>>
    where
        Q: SortableQuery + ?Sized,
        M: SortableModel<Q> + ?Sized,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        raws.into_iter()
            .map(|raw| self.sort(raw.as_ref(), query, model))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NoHooks, SelectQuery, SortHooks};

    fn sorted(raw: &str, table: &str) -> SelectQuery {
        let mut query = SelectQuery::from(table);
        Sorter::default()
            .sort(raw, &mut query, &NoHooks)
            .unwrap();
        query
    }

    #[test]
    fn test_plain_column_has_no_joins() {
        let query = sorted("title,desc", "posts");
        assert!(query.joins().is_empty());
        assert_eq!(query.columns(), "*");
        assert_eq!(query.to_sql(), "SELECT * FROM posts ORDER BY title DESC");
    }

    #[test]
    fn test_normal_join() {
        let query = sorted("posts.comments.post_id.created_at,desc", "posts");
        assert_eq!(query.joins().len(), 1);
        assert_eq!(query.joins()[0].table, "comments");
        assert_eq!(query.columns(), "posts.*");
        assert_eq!(query.order_by_clauses().len(), 1);
        assert_eq!(query.order_by_clauses()[0].column, "comments.created_at");
        assert_eq!(query.order_by_clauses()[0].direction, Direction::Desc);
    }

    #[test]
    fn test_flipped_join() {
        let query = sorted("posts.users.author_id.name.flip", "posts");
        assert_eq!(
            query.to_sql(),
            "SELECT posts.* FROM posts LEFT JOIN users ON posts.author_id = users.id \
             ORDER BY users.name ASC"
        );
    }

    #[test]
    fn test_polymorphic_join() {
        let query = sorted(
            "orders.payables.payable_id.methods.method_id.label.flip,desc",
            "orders",
        );
        assert_eq!(
            query.to_sql(),
            "SELECT orders.* FROM orders \
             LEFT JOIN payables ON orders.payable_id = payables.id \
             LEFT JOIN methods ON payables.method_id = methods.id \
             ORDER BY methods.label DESC"
        );
    }

    #[test]
    fn test_pivot_join() {
        let query = sorted("users.roles.role_id.name.pivot.role_user.user_id", "users");
        assert_eq!(
            query.to_sql(),
            "SELECT users.* FROM users \
             LEFT JOIN role_user ON role_user.user_id = users.id \
             LEFT JOIN roles ON role_user.role_id = roles.id \
             ORDER BY roles.name ASC"
        );
    }

    #[test]
    fn test_pivot_flipped_join() {
        let query = sorted(
            "users.roles.role_id.name.pivot.role_user.user_id.teams.team_id.title.flip,desc",
            "users",
        );
        assert_eq!(
            query.to_sql(),
            "SELECT users.* FROM users \
             LEFT JOIN role_user ON role_user.user_id = users.id \
             LEFT JOIN roles ON role_user.role_id = roles.id \
             LEFT JOIN teams ON teams.id = roles.team_id \
             ORDER BY teams.title DESC"
        );
    }

    #[test]
    fn test_duplicate_joins_are_skipped() {
        let mut query = SelectQuery::from("posts");
        let sorter = Sorter::default();
        sorter
            .sort_all(
                [
                    "posts.comments.post_id.created_at,desc",
                    "posts.comments.post_id.id",
                ],
                &mut query,
                &NoHooks,
            )
            .unwrap();

        assert_eq!(query.joins().len(), 1);
        assert_eq!(
            query.to_sql(),
            "SELECT posts.* FROM posts LEFT JOIN comments ON comments.post_id = posts.id \
             ORDER BY comments.created_at DESC, comments.id ASC"
        );
    }

    #[test]
    fn test_existing_joins_are_respected() {
        let mut query = SelectQuery::from("users");
        query.left_join("role_user", "role_user.user_id", EQ, "users.id");

        Sorter::default()
            .sort("users.roles.role_id.name.pivot.role_user.user_id", &mut query, &NoHooks)
            .unwrap();

        let tables: Vec<_> = query.joins().iter().map(|j| j.table.as_str()).collect();
        assert_eq!(tables, ["role_user", "roles"]);
    }

    #[test]
    fn test_unsupported_pattern_errors_by_default() {
        let mut query = SelectQuery::from("posts");
        let err = Sorter::default()
            .sort("posts.comments.post_id", &mut query, &NoHooks)
            .unwrap_err();

        assert!(matches!(err, SortError::UnsupportedJoinPattern { segments: 3, .. }));
        assert_eq!(query.to_sql(), "SELECT * FROM posts");
    }

    #[test]
    fn test_unsupported_pattern_can_be_ignored() {
        let sorter = Sorter::new(SortOptions::new().unsupported(UnsupportedPattern::Ignore));
        let mut query = SelectQuery::from("posts");

        let directive = sorter
            .sort("posts.comments.post_id,desc", &mut query, &NoHooks)
            .unwrap();

        assert_eq!(directive.order(), Direction::Desc);
        assert_eq!(query.to_sql(), "SELECT * FROM posts");
    }

    #[test]
    fn test_ignore_policy_still_rejects_malformed_tokens() {
        let sorter = Sorter::new(SortOptions::new().unsupported(UnsupportedPattern::Ignore));
        let mut query = SelectQuery::from("posts");
        assert!(matches!(
            sorter.sort("", &mut query, &NoHooks),
            Err(SortError::MalformedDirective { .. })
        ));
    }

    #[test]
    fn test_hook_overrides_resolution() {
        let hooks = SortHooks::<SelectQuery>::new().on("status", |q, order| {
            q.order_by("FIELD(status, 'draft', 'published')", order);
            Ok(())
        });

        let mut query = SelectQuery::from("posts");
        Sorter::default().sort("status,desc", &mut query, &hooks).unwrap();

        assert_eq!(
            query.to_sql(),
            "SELECT * FROM posts ORDER BY FIELD(status, 'draft', 'published') DESC"
        );
    }

    #[test]
    fn test_hook_takes_precedence_over_join_patterns() {
        let hooks = SortHooks::<SelectQuery>::new().on("posts.comments", |q, order| {
            q.order_by("comment_count", order);
            Ok(())
        });

        let mut query = SelectQuery::from("posts");
        Sorter::default()
            .sort("posts.comments", &mut query, &hooks)
            .unwrap();

        assert!(query.joins().is_empty());
        assert_eq!(query.order_by_clauses()[0].column, "comment_count");
    }

    #[test]
    fn test_hook_errors_propagate() {
        let hooks = SortHooks::<SelectQuery>::new()
            .on("score", |_, _| Err(SortError::Hook("score is not sortable".into())));

        let mut query = SelectQuery::from("posts");
        assert_eq!(
            Sorter::default().sort("score", &mut query, &hooks),
            Err(SortError::Hook("score is not sortable".into()))
        );
    }

    #[test]
    fn test_default_order_from_options() {
        let sorter = Sorter::new(SortOptions::new().default_order(Direction::Desc));
        let mut query = SelectQuery::from("posts");
        sorter.sort("title", &mut query, &NoHooks).unwrap();
        assert_eq!(query.order_by_clauses()[0].direction, Direction::Desc);
    }
}
