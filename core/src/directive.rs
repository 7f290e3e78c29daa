//! Sort directives: a field path paired with a direction.
//!
//! The wire form is `<field>[,<asc|desc>]`, as it typically arrives in an HTTP
//! query parameter. The direction tokens are case-sensitive.

use compact_str::CompactString;
use regex::Regex;
use smallvec::SmallVec;
use std::{fmt, str::FromStr, sync::LazyLock};

use crate::error::{Result, SortError};

/// Characters stripped from both ends of a raw token before matching.
const TRIM_CHARS: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

static DIRECTIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<field>[^,]+)(?:,(?P<order>asc|desc))?$")
        .expect("directive pattern is valid")
});

/// Sort direction for ORDER BY clauses
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// The wire token for this direction.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// The SQL keyword for this direction.
    #[inline]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    #[inline]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(SortError::InvalidDirection(other.into())),
        }
    }
}

/// A parsed sort token: the field path to order by and its direction.
///
/// Directives are immutable once built. The field is never empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Directive {
    field: CompactString,
    order: Direction,
}

impl Directive {
    /// Creates a directive from a field path and a direction.
    ///
    /// Fails with [`SortError::MalformedDirective`] if `field` is empty.
    pub fn new(field: impl Into<CompactString>, order: Direction) -> Result<Self> {
        let field = field.into();
        if field.is_empty() {
            return Err(SortError::MalformedDirective { raw: field });
        }
        Ok(Self { field, order })
    }

    /// Creates a directive from a field path and a textual direction.
    ///
    /// The direction must be exactly `asc` or `desc`, otherwise this fails
    /// with [`SortError::InvalidDirection`].
    pub fn from_parts(field: impl Into<CompactString>, order: &str) -> Result<Self> {
        let order = order.parse::<Direction>()?;
        Self::new(field, order)
    }

    /// Parses a raw sort token such as `"posts.comments.post_id.created_at,desc"`.
    ///
    /// Surrounding whitespace is ignored. When the token carries no explicit
    /// direction, `default_order` is used.
    ///
    /// ```
    /// use drizzle_sort_core::{Direction, Directive};
    ///
    /// let directive = Directive::parse(" name,desc ", Direction::Asc).unwrap();
    /// assert_eq!(directive.field(), "name");
    /// assert_eq!(directive.order(), Direction::Desc);
    ///
    /// let directive = Directive::parse("name", Direction::Desc).unwrap();
    /// assert_eq!(directive.order(), Direction::Desc);
    /// ```
    pub fn parse(raw: &str, default_order: Direction) -> Result<Self> {
        let trimmed = raw.trim_matches(TRIM_CHARS);
        let captures = DIRECTIVE_RE
            .captures(trimmed)
            .ok_or_else(|| SortError::malformed(raw))?;

        let field = captures
            .name("field")
            .map(|m| m.as_str())
            .ok_or_else(|| SortError::malformed(raw))?;

        let directive = match captures.name("order") {
            Some(order) => Self::from_parts(field, order.as_str())?,
            None => Self::new(field, default_order)?,
        };

        crate::sort_trace_directive!(directive.field, directive.order);
        Ok(directive)
    }

    #[inline]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[inline]
    pub const fn order(&self) -> Direction {
        self.order
    }

    /// Returns true if the field is a dotted join path rather than a plain column.
    #[inline]
    pub fn is_dotted(&self) -> bool {
        self.field.contains('.')
    }

    /// The field split on `.`.
    pub fn segments(&self) -> SmallVec<[&str; 8]> {
        self.field.split('.').collect()
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.field, self.order)
    }
}

impl FromStr for Directive {
    type Err = SortError;

    /// Parses with [`Direction::Asc`] as the default direction.
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, Direction::default())
    }
}
