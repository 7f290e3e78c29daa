//! Per-field sort overrides supplied by the data model.
//!
//! A model that needs custom ordering for a field (a computed column, a
//! `CASE` expression, a join the path grammar cannot express) implements
//! [`SortableModel`] and hands back a [`CustomSort`] handler for that field.
//! A handler fully replaces the generic resolver for its field.

use compact_str::CompactString;
use hashbrown::HashMap;
use std::fmt;

use crate::{Direction, error::Result, query::SortableQuery};

/// A custom ordering for one field.
pub trait CustomSort<Q: SortableQuery + ?Sized> {
    fn apply(&self, query: &mut Q, order: Direction) -> Result<()>;
}

impl<Q, F> CustomSort<Q> for F
where
    Q: SortableQuery + ?Sized,
    F: Fn(&mut Q, Direction) -> Result<()>,
{
    fn apply(&self, query: &mut Q, order: Direction) -> Result<()> {
        self(query, order)
    }
}

/// A model that may override how individual fields are sorted.
pub trait SortableModel<Q: SortableQuery + ?Sized> {
    /// Returns the handler for `field`, if the model overrides it.
    fn custom_sort(&self, field: &str) -> Option<&dyn CustomSort<Q>> {
        let _ = field;
        None
    }
}

/// A model without any custom sorts.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHooks;

impl<Q: SortableQuery + ?Sized> SortableModel<Q> for NoHooks {}

type BoxedSort<Q> = Box<dyn CustomSort<Q> + Send + Sync>;

/// A registry of custom sorts keyed by field name.
///
/// ```
/// use drizzle_sort_core::{SelectQuery, SortHooks, SortableQuery};
///
/// let hooks = SortHooks::<SelectQuery>::new().on("status", |q, order| {
///     q.order_by("status_rank", order);
///     Ok(())
/// });
/// assert!(hooks.contains("status"));
/// ```
pub struct SortHooks<Q: SortableQuery + ?Sized> {
    handlers: HashMap<CompactString, BoxedSort<Q>>,
}

impl<Q: SortableQuery + ?Sized> SortHooks<Q> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registers `handler` for `field`, replacing any previous handler.
    pub fn on<F>(mut self, field: impl Into<CompactString>, handler: F) -> Self
    where
        F: Fn(&mut Q, Direction) -> Result<()> + Send + Sync + 'static,
    {
        self.handlers.insert(field.into(), Box::new(handler));
        self
    }

    pub fn contains(&self, field: &str) -> bool {
        self.handlers.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<Q: SortableQuery + ?Sized> Default for SortHooks<Q> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q: SortableQuery + ?Sized> fmt::Debug for SortHooks<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortHooks")
            .field("fields", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<Q: SortableQuery + ?Sized> SortableModel<Q> for SortHooks<Q> {
    fn custom_sort(&self, field: &str) -> Option<&dyn CustomSort<Q>> {
        self.handlers
            .get(field)
            .map(|handler| handler.as_ref() as &dyn CustomSort<Q>)
    }
}
