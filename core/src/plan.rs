//! Join plans: the shape of a dotted sort path.
//!
//! A dotted field encodes the relation to walk before ordering. Five shapes are
//! recognised, distinguished by segment count and the literal `pivot`/`flip`
//! markers:
//!
//! | Shape          | Segments                                                                   |
//! |----------------|----------------------------------------------------------------------------|
//! | `Flipped`      | `main.join.fk.sort.flip`                                                   |
//! | `Polymorphic`  | `main.poly.poly_fk.join.fk.sort.flip`                                      |
//! | `PivotFlipped` | `main.join.fk.sort.pivot.pivot_table.local_key.join2.fk2.sort2.flip`       |
//! | `PivotFlipped` | `main.join.fk.sort.pivot.pivot_table.local_key.join2.fk2.flip`             |
//! | `Pivot`        | `main.join.fk.sort.pivot.pivot_table.local_key`                            |
//! | `Normal`       | `main.join.fk.sort`                                                        |
//!
//! Shapes are tested in that order. A seven segment path ending in `flip` is
//! polymorphic even when `pivot` sits at index 4.
//!
//! The ten segment pivot-flipped form has no `sort2`; it orders `join2` by the
//! `sort` segment at index 3 instead.

use compact_str::{CompactString, format_compact};
use smallvec::SmallVec;

use crate::error::{Result, SortError};

pub const PIVOT: &str = "pivot";
pub const FLIP: &str = "flip";

/// Primary key column assumed on every joined table.
pub const KEY: &str = "id";

/// A single LEFT JOIN to add: `LEFT JOIN table ON first = second`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JoinSpec<'a> {
    pub table: &'a str,
    pub first: CompactString,
    pub second: CompactString,
}

impl<'a> JoinSpec<'a> {
    fn new(table: &'a str, first: CompactString, second: CompactString) -> Self {
        Self {
            table,
            first,
            second,
        }
    }
}

/// The classified shape of a sort field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JoinPlan<'a> {
    /// A plain column with no joins.
    Column(&'a str),
    /// Foreign key on the joined table: `join.fk = main.id`.
    Normal {
        main: &'a str,
        join: &'a str,
        fk: &'a str,
        sort: &'a str,
    },
    /// Foreign key on the main table: `main.fk = join.id`.
    Flipped {
        main: &'a str,
        join: &'a str,
        fk: &'a str,
        sort: &'a str,
    },
    /// Two flipped hops through an intermediate table.
    Polymorphic {
        main: &'a str,
        poly: &'a str,
        poly_fk: &'a str,
        join: &'a str,
        fk: &'a str,
        sort: &'a str,
    },
    /// Many-to-many through a pivot table.
    Pivot {
        main: &'a str,
        join: &'a str,
        fk: &'a str,
        sort: &'a str,
        pivot: &'a str,
        local_key: &'a str,
    },
    /// Many-to-many through a pivot table, then a flipped hop.
    PivotFlipped {
        main: &'a str,
        join: &'a str,
        fk: &'a str,
        pivot: &'a str,
        local_key: &'a str,
        join2: &'a str,
        fk2: &'a str,
        sort2: &'a str,
    },
}

impl<'a> JoinPlan<'a> {
    /// Classifies a sort field into a join plan.
    ///
    /// Fields without a `.` are plain columns. Dotted fields that match none of
    /// the known shapes fail with [`SortError::UnsupportedJoinPattern`].
    pub fn classify(field: &'a str) -> Result<Self> {
        if !field.contains('.') {
            return Ok(Self::Column(field));
        }

        let segments: SmallVec<[&'a str; 11]> = field.split('.').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(SortError::unsupported(field));
        }

        let plan = match segments.as_slice() {
            &[main, join, fk, sort, FLIP] => Self::Flipped {
                main,
                join,
                fk,
                sort,
            },
            &[main, poly, poly_fk, join, fk, sort, FLIP] => Self::Polymorphic {
                main,
                poly,
                poly_fk,
                join,
                fk,
                sort,
            },
            &[main, join, fk, _, PIVOT, pivot, local_key, join2, fk2, sort2, FLIP] => {
                Self::PivotFlipped {
                    main,
                    join,
                    fk,
                    pivot,
                    local_key,
                    join2,
                    fk2,
                    sort2,
                }
            }
            &[main, join, fk, sort, PIVOT, pivot, local_key, join2, fk2, FLIP] => {
                Self::PivotFlipped {
                    main,
                    join,
                    fk,
                    pivot,
                    local_key,
                    join2,
                    fk2,
                    sort2: sort,
                }
            }
            &[main, join, fk, sort, PIVOT, pivot, local_key] => Self::Pivot {
                main,
                join,
                fk,
                sort,
                pivot,
                local_key,
            },
            &[main, join, fk, sort] => Self::Normal {
                main,
                join,
                fk,
                sort,
            },
            _ => return Err(SortError::unsupported(field)),
        };

        Ok(plan)
    }

    /// Short name of the shape, as shown in diagnostics.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Column(_) => "column",
            Self::Normal { .. } => "normal",
            Self::Flipped { .. } => "flipped",
            Self::Polymorphic { .. } => "polymorphic",
            Self::Pivot { .. } => "pivot",
            Self::PivotFlipped { .. } => "pivot-flipped",
        }
    }

    /// The table whose columns the result rows are restricted to.
    ///
    /// `None` for plain columns, which never restrict the projection.
    pub const fn main_table(&self) -> Option<&'a str> {
        match *self {
            Self::Column(_) => None,
            Self::Normal { main, .. }
            | Self::Flipped { main, .. }
            | Self::Polymorphic { main, .. }
            | Self::Pivot { main, .. }
            | Self::PivotFlipped { main, .. } => Some(main),
        }
    }

    /// The column to order by, qualified with its table for joined shapes.
    pub fn order_column(&self) -> CompactString {
        match *self {
            Self::Column(column) => column.into(),
            Self::Normal { join, sort, .. }
            | Self::Flipped { join, sort, .. }
            | Self::Polymorphic { join, sort, .. }
            | Self::Pivot { join, sort, .. } => qualify(join, sort),
            Self::PivotFlipped { join2, sort2, .. } => qualify(join2, sort2),
        }
    }

    /// The joins this plan needs, in the order they must be applied.
    pub fn joins(&self) -> SmallVec<[JoinSpec<'a>; 3]> {
        let mut joins = SmallVec::new();
        match *self {
            Self::Column(_) => {}
            Self::Normal {
                main, join, fk, ..
            } => {
                joins.push(JoinSpec::new(join, qualify(join, fk), qualify(main, KEY)));
            }
            Self::Flipped {
                main, join, fk, ..
            } => {
                joins.push(JoinSpec::new(join, qualify(main, fk), qualify(join, KEY)));
            }
            Self::Polymorphic {
                main,
                poly,
                poly_fk,
                join,
                fk,
                ..
            } => {
                joins.push(JoinSpec::new(poly, qualify(main, poly_fk), qualify(poly, KEY)));
                joins.push(JoinSpec::new(join, qualify(poly, fk), qualify(join, KEY)));
            }
            Self::Pivot {
                main,
                join,
                fk,
                pivot,
                local_key,
                ..
            } => {
                joins.push(JoinSpec::new(pivot, qualify(pivot, local_key), qualify(main, KEY)));
                joins.push(JoinSpec::new(join, qualify(pivot, fk), qualify(join, KEY)));
            }
            Self::PivotFlipped {
                main,
                join,
                fk,
                pivot,
                local_key,
                join2,
                fk2,
                ..
            } => {
                joins.push(JoinSpec::new(pivot, qualify(pivot, local_key), qualify(main, KEY)));
                joins.push(JoinSpec::new(join, qualify(pivot, fk), qualify(join, KEY)));
                joins.push(JoinSpec::new(join2, qualify(join2, KEY), qualify(join, fk2)));
            }
        }
        joins
    }
}

#[inline]
fn qualify(table: &str, column: &str) -> CompactString {
    format_compact!("{table}.{column}")
}
