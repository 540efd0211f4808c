//! Rendered SQL text paired with the parameters it references.

use compact_str::CompactString;
use core::fmt;
use indexmap::IndexMap;

use crate::dynsql_trace_merge;

/// Ordered mapping from parameter name to bound value.
pub type Parameters<V> = IndexMap<CompactString, V>;

/// A rendered SQL fragment together with its parameter bindings.
///
/// Instances are immutable; they are created through
/// [`FragmentAndParameters::builder`] or by merging two existing fragments.
/// No check is made that every placeholder in the text has a binding: a
/// mismatch surfaces when the statement is bound by the execution layer.
///
/// ```
/// use dynsql_core::FragmentAndParameters;
///
/// let id = FragmentAndParameters::builder("id = #{p1}")
///     .with_parameter("p1", 5)
///     .build();
/// let name = FragmentAndParameters::builder("name is null").build();
///
/// let merged = id.merge(&name, " or ");
/// assert_eq!(merged.fragment(), "id = #{p1} or name is null");
/// assert_eq!(merged.parameter("p1"), Some(&5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FragmentAndParameters<V> {
    fragment: String,
    parameters: Parameters<V>,
}

impl<V> FragmentAndParameters<V> {
    /// Starts a builder seeded with `fragment`.
    #[inline]
    pub fn builder(fragment: impl Into<String>) -> FragmentAndParametersBuilder<V> {
        FragmentAndParametersBuilder::new(fragment)
    }

    #[inline]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    #[inline]
    pub fn parameters(&self) -> &Parameters<V> {
        &self.parameters
    }

    /// Looks up the value bound to `key`
    #[inline]
    pub fn parameter(&self, key: &str) -> Option<&V> {
        self.parameters.get(key)
    }

    #[inline]
    pub fn into_parts(self) -> (String, Parameters<V>) {
        (self.fragment, self.parameters)
    }

    /// Combines two fragments as `self + delimiter + other`.
    ///
    /// The result owns a new parameter map holding the union of both inputs.
    /// When both define the same key, the value from `other` wins; callers
    /// that need unique names must allocate them before rendering.
    pub fn merge(&self, other: &Self, delimiter: &str) -> Self
    where
        V: Clone,
    {
        let mut fragment =
            String::with_capacity(self.fragment.len() + delimiter.len() + other.fragment.len());
        fragment.push_str(&self.fragment);
        fragment.push_str(delimiter);
        fragment.push_str(&other.fragment);

        let merged = FragmentAndParametersBuilder::new(fragment)
            .with_parameters(clone_entries(&self.parameters))
            .with_parameters(clone_entries(&other.parameters))
            .build();

        dynsql_trace_merge!(delimiter, merged.parameters.len());
        merged
    }

    /// Owned variant of [`merge`](Self::merge) that reuses both inputs'
    /// storage instead of cloning values. Same overwrite rule.
    pub fn into_merged(mut self, other: Self, delimiter: &str) -> Self {
        self.fragment.reserve(delimiter.len() + other.fragment.len());
        self.fragment.push_str(delimiter);
        self.fragment.push_str(&other.fragment);
        self.parameters.extend(other.parameters);

        dynsql_trace_merge!(delimiter, self.parameters.len());
        self
    }

    /// Folds any number of fragments left to right with `delimiter`.
    ///
    /// Returns `None` when `fragments` is empty.
    pub fn join<I>(fragments: I, delimiter: &str) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        fragments
            .into_iter()
            .reduce(|acc, next| acc.into_merged(next, delimiter))
    }

    /// Prepends `prefix` to the text, keeping the parameters.
    pub fn with_prefix(self, prefix: &str) -> Self {
        let mut fragment = String::with_capacity(prefix.len() + self.fragment.len());
        fragment.push_str(prefix);
        fragment.push_str(&self.fragment);
        Self {
            fragment,
            parameters: self.parameters,
        }
    }

    /// Wraps the text in parentheses, keeping the parameters.
    pub fn parenthesized(self) -> Self {
        let mut fragment = String::with_capacity(self.fragment.len() + 2);
        fragment.push('(');
        fragment.push_str(&self.fragment);
        fragment.push(')');
        Self {
            fragment,
            parameters: self.parameters,
        }
    }
}

impl<V> fmt::Display for FragmentAndParameters<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fragment)
    }
}

fn clone_entries<V: Clone>(
    parameters: &Parameters<V>,
) -> impl Iterator<Item = (CompactString, V)> + '_ {
    parameters.iter().map(|(k, v)| (k.clone(), v.clone()))
}

/// Accumulates the text and bindings of a [`FragmentAndParameters`].
///
/// Every method takes the builder by value, so it cannot be used again
/// after [`build`](Self::build).
#[derive(Debug, Clone)]
#[must_use = "builders do nothing until `build` is called"]
pub struct FragmentAndParametersBuilder<V> {
    fragment: String,
    parameters: Parameters<V>,
}

impl<V> FragmentAndParametersBuilder<V> {
    pub fn new(fragment: impl Into<String>) -> Self {
        Self {
            fragment: fragment.into(),
            parameters: IndexMap::new(),
        }
    }

    /// Binds `value` to `key`. A later binding for the same key replaces
    /// the earlier one.
    pub fn with_parameter(mut self, key: impl Into<CompactString>, value: V) -> Self {
        self.parameters.insert(key.into(), value);
        self
    }

    /// Binds every entry of `parameters`, overwriting existing keys.
    pub fn with_parameters<K, I>(mut self, parameters: I) -> Self
    where
        K: Into<CompactString>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.parameters
            .extend(parameters.into_iter().map(|(k, v)| (k.into(), v)));
        self
    }

    pub fn build(self) -> FragmentAndParameters<V> {
        FragmentAndParameters {
            fragment: self.fragment,
            parameters: self.parameters,
        }
    }
}
