//! Bound SQL predicates.
//!
//! A [`Condition`] pairs one operator with the values it binds. Rendering only
//! needs the column name and one placeholder token per bound value; the
//! values themselves travel separately in a
//! [`FragmentAndParameters`](crate::FragmentAndParameters) parameter map.
//!
//! ```
//! use dynsql_core::Condition;
//!
//! let range = Condition::between(5).and(10);
//! let sql = range.render("id", &["#{p1}", "#{p2}"]).unwrap();
//! assert_eq!(sql, "id between #{p1} and #{p2}");
//! ```
//!
//! A range condition only exists once both bounds are supplied; the first
//! stage is a [`BetweenBuilder`], not a [`Condition`].

use core::fmt;
use smallvec::SmallVec;

use crate::dynsql_trace_render;
use crate::error::{Error, Result};

/// The operator of a [`Condition`], without its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ConditionKind {
    IsNull,
    IsNotNull,
    EqualTo,
    NotEqualTo,
    GreaterThan,
    GreaterThanOrEqualTo,
    LessThan,
    LessThanOrEqualTo,
    Like,
    NotLike,
    Between,
    NotBetween,
    In,
    NotIn,
}

impl ConditionKind {
    /// SQL operator text emitted between the column and its placeholders.
    pub const fn operator(self) -> &'static str {
        match self {
            ConditionKind::IsNull => "is null",
            ConditionKind::IsNotNull => "is not null",
            ConditionKind::EqualTo => "=",
            ConditionKind::NotEqualTo => "<>",
            ConditionKind::GreaterThan => ">",
            ConditionKind::GreaterThanOrEqualTo => ">=",
            ConditionKind::LessThan => "<",
            ConditionKind::LessThanOrEqualTo => "<=",
            ConditionKind::Like => "like",
            ConditionKind::NotLike => "not like",
            ConditionKind::Between => "between",
            ConditionKind::NotBetween => "not between",
            ConditionKind::In => "in",
            ConditionKind::NotIn => "not in",
        }
    }

    /// Number of bound values, or `None` for list conditions whose arity is
    /// the length of their list.
    pub const fn fixed_arity(self) -> Option<usize> {
        match self {
            ConditionKind::IsNull | ConditionKind::IsNotNull => Some(0),
            ConditionKind::Between | ConditionKind::NotBetween => Some(2),
            ConditionKind::In | ConditionKind::NotIn => None,
            _ => Some(1),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ConditionKind::IsNull => "is_null",
            ConditionKind::IsNotNull => "is_not_null",
            ConditionKind::EqualTo => "equal_to",
            ConditionKind::NotEqualTo => "not_equal_to",
            ConditionKind::GreaterThan => "greater_than",
            ConditionKind::GreaterThanOrEqualTo => "greater_than_or_equal_to",
            ConditionKind::LessThan => "less_than",
            ConditionKind::LessThanOrEqualTo => "less_than_or_equal_to",
            ConditionKind::Like => "like",
            ConditionKind::NotLike => "not_like",
            ConditionKind::Between => "between",
            ConditionKind::NotBetween => "not_between",
            ConditionKind::In => "in",
            ConditionKind::NotIn => "not_in",
        }
    }
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A SQL predicate bound to its values.
///
/// Conditions are immutable. Two-value conditions are built in two stages
/// ([`Condition::between`] then [`BetweenBuilder::and`]) and list conditions
/// reject an empty list, so a condition missing one of its operands never
/// exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Condition<T> {
    IsNull,
    IsNotNull,
    EqualTo(T),
    NotEqualTo(T),
    GreaterThan(T),
    GreaterThanOrEqualTo(T),
    LessThan(T),
    LessThanOrEqualTo(T),
    Like(T),
    NotLike(T),
    Between(T, T),
    NotBetween(T, T),
    In(Vec<T>),
    NotIn(Vec<T>),
}

impl<T> Condition<T> {
    // ==================== constructors ====================

    pub const fn is_null() -> Self {
        Condition::IsNull
    }

    pub const fn is_not_null() -> Self {
        Condition::IsNotNull
    }

    pub fn equal_to(value: T) -> Self {
        Condition::EqualTo(value)
    }

    pub fn not_equal_to(value: T) -> Self {
        Condition::NotEqualTo(value)
    }

    pub fn greater_than(value: T) -> Self {
        Condition::GreaterThan(value)
    }

    pub fn greater_than_or_equal_to(value: T) -> Self {
        Condition::GreaterThanOrEqualTo(value)
    }

    pub fn less_than(value: T) -> Self {
        Condition::LessThan(value)
    }

    pub fn less_than_or_equal_to(value: T) -> Self {
        Condition::LessThanOrEqualTo(value)
    }

    pub fn like(pattern: T) -> Self {
        Condition::Like(pattern)
    }

    pub fn not_like(pattern: T) -> Self {
        Condition::NotLike(pattern)
    }

    /// Starts a `between` condition; the upper bound is supplied by
    /// [`BetweenBuilder::and`].
    pub fn between(value1: T) -> BetweenBuilder<T> {
        BetweenBuilder::of(value1)
    }

    /// Starts a `not between` condition.
    pub fn not_between(value1: T) -> BetweenBuilder<T> {
        BetweenBuilder {
            value1,
            negated: true,
        }
    }

    /// Creates an `in (...)` condition.
    ///
    /// Fails with [`Error::EmptyList`] when `values` yields nothing, since
    /// `in ()` is not valid SQL.
    pub fn is_in(values: impl IntoIterator<Item = T>) -> Result<Self> {
        let values: Vec<T> = values.into_iter().collect();
        if values.is_empty() {
            return Err(Error::EmptyList {
                kind: ConditionKind::In,
            });
        }
        Ok(Condition::In(values))
    }

    /// Creates a `not in (...)` condition. Fails on an empty list.
    pub fn is_not_in(values: impl IntoIterator<Item = T>) -> Result<Self> {
        let values: Vec<T> = values.into_iter().collect();
        if values.is_empty() {
            return Err(Error::EmptyList {
                kind: ConditionKind::NotIn,
            });
        }
        Ok(Condition::NotIn(values))
    }

    // ==================== accessors ====================

    pub const fn kind(&self) -> ConditionKind {
        match self {
            Condition::IsNull => ConditionKind::IsNull,
            Condition::IsNotNull => ConditionKind::IsNotNull,
            Condition::EqualTo(_) => ConditionKind::EqualTo,
            Condition::NotEqualTo(_) => ConditionKind::NotEqualTo,
            Condition::GreaterThan(_) => ConditionKind::GreaterThan,
            Condition::GreaterThanOrEqualTo(_) => ConditionKind::GreaterThanOrEqualTo,
            Condition::LessThan(_) => ConditionKind::LessThan,
            Condition::LessThanOrEqualTo(_) => ConditionKind::LessThanOrEqualTo,
            Condition::Like(_) => ConditionKind::Like,
            Condition::NotLike(_) => ConditionKind::NotLike,
            Condition::Between(..) => ConditionKind::Between,
            Condition::NotBetween(..) => ConditionKind::NotBetween,
            Condition::In(_) => ConditionKind::In,
            Condition::NotIn(_) => ConditionKind::NotIn,
        }
    }

    /// Number of placeholder tokens [`render`](Self::render) expects.
    pub fn arity(&self) -> usize {
        match self {
            Condition::In(values) | Condition::NotIn(values) => values.len(),
            other => other.kind().fixed_arity().unwrap_or_default(),
        }
    }

    /// Bound values, in placeholder order.
    pub fn values(&self) -> SmallVec<[&T; 2]> {
        match self {
            Condition::IsNull | Condition::IsNotNull => SmallVec::new(),
            Condition::EqualTo(v)
            | Condition::NotEqualTo(v)
            | Condition::GreaterThan(v)
            | Condition::GreaterThanOrEqualTo(v)
            | Condition::LessThan(v)
            | Condition::LessThanOrEqualTo(v)
            | Condition::Like(v)
            | Condition::NotLike(v) => smallvec::smallvec![v],
            Condition::Between(v1, v2) | Condition::NotBetween(v1, v2) => {
                smallvec::smallvec![v1, v2]
            }
            Condition::In(values) | Condition::NotIn(values) => values.iter().collect(),
        }
    }

    /// Consumes the condition, returning its bound values in placeholder order.
    pub fn into_values(self) -> SmallVec<[T; 2]> {
        match self {
            Condition::IsNull | Condition::IsNotNull => SmallVec::new(),
            Condition::EqualTo(v)
            | Condition::NotEqualTo(v)
            | Condition::GreaterThan(v)
            | Condition::GreaterThanOrEqualTo(v)
            | Condition::LessThan(v)
            | Condition::LessThanOrEqualTo(v)
            | Condition::Like(v)
            | Condition::NotLike(v) => smallvec::smallvec![v],
            Condition::Between(v1, v2) | Condition::NotBetween(v1, v2) => {
                smallvec::smallvec![v1, v2]
            }
            Condition::In(values) | Condition::NotIn(values) => SmallVec::from_vec(values),
        }
    }

    /// Converts the bound values, keeping the operator and arity.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Condition<U> {
        match self {
            Condition::IsNull => Condition::IsNull,
            Condition::IsNotNull => Condition::IsNotNull,
            Condition::EqualTo(v) => Condition::EqualTo(f(v)),
            Condition::NotEqualTo(v) => Condition::NotEqualTo(f(v)),
            Condition::GreaterThan(v) => Condition::GreaterThan(f(v)),
            Condition::GreaterThanOrEqualTo(v) => Condition::GreaterThanOrEqualTo(f(v)),
            Condition::LessThan(v) => Condition::LessThan(f(v)),
            Condition::LessThanOrEqualTo(v) => Condition::LessThanOrEqualTo(f(v)),
            Condition::Like(v) => Condition::Like(f(v)),
            Condition::NotLike(v) => Condition::NotLike(f(v)),
            Condition::Between(v1, v2) => {
                let v1 = f(v1);
                Condition::Between(v1, f(v2))
            }
            Condition::NotBetween(v1, v2) => {
                let v1 = f(v1);
                Condition::NotBetween(v1, f(v2))
            }
            Condition::In(values) => Condition::In(values.into_iter().map(f).collect()),
            Condition::NotIn(values) => Condition::NotIn(values.into_iter().map(f).collect()),
        }
    }

    /// Converts the bound values into another type, e.g. a driver's value enum.
    pub fn convert<U>(self) -> Condition<U>
    where
        T: Into<U>,
    {
        self.map(Into::into)
    }

    // ==================== rendering ====================

    /// Renders the predicate for `column`, splicing in one placeholder token
    /// per bound value.
    ///
    /// The output depends only on `column` and `placeholders`, never on the
    /// bound values. Returns [`Error::ArityMismatch`] when the number of
    /// tokens differs from [`arity`](Self::arity).
    ///
    /// ```
    /// use dynsql_core::Condition;
    ///
    /// let name = Condition::is_in(["Fred", "Barney"]).unwrap();
    /// assert_eq!(
    ///     name.render("first_name", &[":a", ":b"]).unwrap(),
    ///     "first_name in (:a,:b)"
    /// );
    /// ```
    pub fn render<P: AsRef<str>>(&self, column: &str, placeholders: &[P]) -> Result<String> {
        let expected = self.arity();
        if placeholders.len() != expected {
            return Err(Error::ArityMismatch {
                kind: self.kind(),
                expected,
                found: placeholders.len(),
            });
        }
        Ok(self.render_unchecked(column, placeholders))
    }

    /// Renders assuming `placeholders.len() == self.arity()`.
    pub(crate) fn render_unchecked<P: AsRef<str>>(
        &self,
        column: &str,
        placeholders: &[P],
    ) -> String {
        dynsql_trace_render!(self.kind(), column);

        let operator = self.kind().operator();
        let mut sql =
            String::with_capacity(column.len() + operator.len() + 16 * placeholders.len());
        sql.push_str(column);
        sql.push(' ');
        sql.push_str(operator);

        match (self, placeholders) {
            (Condition::Between(..) | Condition::NotBetween(..), [low, high]) => {
                sql.push(' ');
                sql.push_str(low.as_ref());
                sql.push_str(" and ");
                sql.push_str(high.as_ref());
            }
            (Condition::In(_) | Condition::NotIn(_), _) => {
                sql.push_str(" (");
                for (i, placeholder) in placeholders.iter().enumerate() {
                    if i > 0 {
                        sql.push(',');
                    }
                    sql.push_str(placeholder.as_ref());
                }
                sql.push(')');
            }
            (_, [value]) => {
                sql.push(' ');
                sql.push_str(value.as_ref());
            }
            _ => {}
        }
        sql
    }
}

/// First stage of a two-value condition: holds the lower bound until
/// [`and`](Self::and) supplies the upper one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a between condition is only complete once `and` supplies the second value"]
pub struct BetweenBuilder<T> {
    value1: T,
    negated: bool,
}

impl<T> BetweenBuilder<T> {
    pub fn of(value1: T) -> Self {
        Self {
            value1,
            negated: false,
        }
    }

    /// Supplies the upper bound, yielding the finished condition.
    pub fn and(self, value2: T) -> Condition<T> {
        if self.negated {
            Condition::NotBetween(self.value1, value2)
        } else {
            Condition::Between(self.value1, value2)
        }
    }
}
