//! Core types for composing parameterized SQL predicates.
//!
//! A [`Condition`] renders itself into SQL text given a column and one
//! placeholder token per bound value. The text and its bindings travel
//! together as a [`FragmentAndParameters`], and fragments combine with
//! [`FragmentAndParameters::merge`]. [`WhereBuilder`] does the whole fold,
//! allocating unique parameter names along the way.

pub mod condition;
pub mod error;
pub mod fragment;
pub mod placeholder;
mod tracing;
pub mod where_clause;

// Re-export key types
pub use condition::{BetweenBuilder, Condition, ConditionKind};
pub use error::{Error, Result};
pub use fragment::{FragmentAndParameters, FragmentAndParametersBuilder, Parameters};
pub use placeholder::{ParameterNames, Placeholder, PlaceholderStyle};
pub use where_clause::{WhereBuilder, WhereGroup};
