//! Composes rendered conditions into a single `where` predicate.
//!
//! ```
//! use dynsql_core::{Condition, WhereBuilder};
//!
//! let clause = WhereBuilder::new()
//!     .r#where("id", Condition::equal_to(1))
//!     .or("occupation", Condition::is_null())
//!     .build_where_clause();
//!
//! assert_eq!(clause.fragment(), "where id = #{p1} or occupation is null");
//! assert_eq!(clause.parameter("p1"), Some(&1));
//! ```
//!
//! Every condition binds the builder's value type `V`. Conditions over a
//! narrower type are widened with [`Condition::convert`].

use compact_str::CompactString;
use smallvec::SmallVec;

use crate::{Condition, FragmentAndParameters, ParameterNames, Placeholder, PlaceholderStyle};

pub const AND: &str = " and ";
pub const OR: &str = " or ";

/// Folds conditions on columns into one [`FragmentAndParameters`].
///
/// Every bound value gets a fresh name from the builder's
/// [`ParameterNames`], so the parameter map of the result never has
/// colliding keys. The allocator is fixed at construction and shared with
/// every nested [`WhereGroup`].
#[derive(Debug, Clone)]
#[must_use = "builders do nothing until `build` is called"]
pub struct WhereBuilder<V> {
    names: ParameterNames,
    clause: Clause<V>,
}

impl<V> Default for WhereBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> WhereBuilder<V> {
    pub fn new() -> Self {
        Self::with_style(PlaceholderStyle::default())
    }

    pub fn with_style(style: PlaceholderStyle) -> Self {
        Self::with_names(style, ParameterNames::new())
    }

    /// Uses `names` for every parameter of this clause, e.g. to pick a
    /// different prefix.
    pub fn with_names(style: PlaceholderStyle, names: ParameterNames) -> Self {
        Self {
            names,
            clause: Clause::new(style),
        }
    }

    /// Adds the first condition. On a builder that already holds a
    /// condition this behaves like [`and`](Self::and).
    pub fn r#where(mut self, column: &str, condition: Condition<V>) -> Self {
        self.clause.push(&mut self.names, AND, column, condition);
        self
    }

    pub fn and(mut self, column: &str, condition: Condition<V>) -> Self {
        self.clause.push(&mut self.names, AND, column, condition);
        self
    }

    pub fn or(mut self, column: &str, condition: Condition<V>) -> Self {
        self.clause.push(&mut self.names, OR, column, condition);
        self
    }

    /// Adds a parenthesized sub-clause joined with `and`.
    pub fn and_group(
        mut self,
        group: impl FnOnce(WhereGroup<'_, V>) -> WhereGroup<'_, V>,
    ) -> Self {
        self.clause.group(&mut self.names, AND, group);
        self
    }

    /// Adds a parenthesized sub-clause joined with `or`.
    pub fn or_group(
        mut self,
        group: impl FnOnce(WhereGroup<'_, V>) -> WhereGroup<'_, V>,
    ) -> Self {
        self.clause.group(&mut self.names, OR, group);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.clause.fragment.is_none()
    }

    /// Returns the bare predicate. An empty builder yields an empty
    /// fragment without parameters.
    pub fn build(self) -> FragmentAndParameters<V> {
        self.clause
            .fragment
            .unwrap_or_else(|| FragmentAndParameters::builder("").build())
    }

    /// Like [`build`](Self::build) but prefixed with `where `, unless empty.
    pub fn build_where_clause(self) -> FragmentAndParameters<V> {
        match self.clause.fragment {
            Some(clause) => clause.with_prefix("where "),
            None => FragmentAndParameters::builder("").build(),
        }
    }
}

/// A parenthesized sub-clause under construction.
///
/// Only handed out by [`WhereBuilder::and_group`] and friends; it borrows
/// the enclosing builder's name allocator so names stay unique across the
/// group boundary.
#[derive(Debug)]
#[must_use = "a group is only added once the closure returns it"]
pub struct WhereGroup<'n, V> {
    names: &'n mut ParameterNames,
    clause: Clause<V>,
}

impl<V> WhereGroup<'_, V> {
    pub fn r#where(mut self, column: &str, condition: Condition<V>) -> Self {
        self.clause.push(self.names, AND, column, condition);
        self
    }

    pub fn and(mut self, column: &str, condition: Condition<V>) -> Self {
        self.clause.push(self.names, AND, column, condition);
        self
    }

    pub fn or(mut self, column: &str, condition: Condition<V>) -> Self {
        self.clause.push(self.names, OR, column, condition);
        self
    }

    pub fn and_group(
        mut self,
        group: impl FnOnce(WhereGroup<'_, V>) -> WhereGroup<'_, V>,
    ) -> Self {
        self.clause.group(self.names, AND, group);
        self
    }

    pub fn or_group(
        mut self,
        group: impl FnOnce(WhereGroup<'_, V>) -> WhereGroup<'_, V>,
    ) -> Self {
        self.clause.group(self.names, OR, group);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.clause.fragment.is_none()
    }
}

/// Accumulated predicate shared by [`WhereBuilder`] and [`WhereGroup`].
#[derive(Debug, Clone)]
struct Clause<V> {
    style: PlaceholderStyle,
    fragment: Option<FragmentAndParameters<V>>,
}

impl<V> Clause<V> {
    fn new(style: PlaceholderStyle) -> Self {
        Self {
            style,
            fragment: None,
        }
    }

    fn push(
        &mut self,
        names: &mut ParameterNames,
        delimiter: &str,
        column: &str,
        condition: Condition<V>,
    ) {
        let rendered = self.render(names, column, condition);
        self.append(delimiter, rendered);
    }

    fn group(
        &mut self,
        names: &mut ParameterNames,
        delimiter: &str,
        group: impl FnOnce(WhereGroup<'_, V>) -> WhereGroup<'_, V>,
    ) {
        let inner = group(WhereGroup {
            names,
            clause: Clause::new(self.style),
        });
        if let Some(fragment) = inner.clause.fragment {
            self.append(delimiter, fragment.parenthesized());
        }
    }

    fn append(&mut self, delimiter: &str, fragment: FragmentAndParameters<V>) {
        self.fragment = Some(match self.fragment.take() {
            Some(clause) => clause.into_merged(fragment, delimiter),
            None => fragment,
        });
    }

    fn render(
        &self,
        names: &mut ParameterNames,
        column: &str,
        condition: Condition<V>,
    ) -> FragmentAndParameters<V> {
        let placeholders: SmallVec<[Placeholder; 2]> = (0..condition.arity())
            .map(|_| Placeholder::new(names.next_name(), self.style))
            .collect();
        let tokens: SmallVec<[CompactString; 2]> =
            placeholders.iter().map(Placeholder::token).collect();

        let fragment = condition.render_unchecked(column, tokens.as_slice());
        let keys = placeholders.into_iter().map(|placeholder| placeholder.name);

        FragmentAndParameters::builder(fragment)
            .with_parameters(keys.zip(condition.into_values()))
            .build()
    }
}
