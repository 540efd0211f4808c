//! # dynsql
//!
//! Typed SQL predicates that render into text fragments with named
//! parameter bindings.
//!
//! ## Quick Start
//!
//! ```rust
//! use dynsql::prelude::*;
//!
//! let clause = WhereBuilder::new()
//!     .r#where("first_name", Condition::is_in(["Fred", "Barney"])?)
//!     .and("occupation", Condition::is_not_null())
//!     .build_where_clause();
//!
//! assert_eq!(
//!     clause.fragment(),
//!     "where first_name in (#{p1},#{p2}) and occupation is not null"
//! );
//! assert_eq!(clause.parameters().len(), 2);
//! # Ok::<(), dynsql::error::Error>(())
//! ```
//!
//! Fragments rendered by hand combine with [`merge`](core::FragmentAndParameters::merge):
//!
//! ```rust
//! use dynsql::prelude::*;
//!
//! let range = Condition::between(5).and(10);
//! let id = FragmentAndParameters::builder(range.render("id", &["#{p1}", "#{p2}"])?)
//!     .with_parameter("p1", 5)
//!     .with_parameter("p2", 10)
//!     .build();
//! let name = FragmentAndParameters::builder("name is null").build();
//!
//! let merged = id.merge(&name, " or ");
//! assert_eq!(merged.fragment(), "id between #{p1} and #{p2} or name is null");
//! # Ok::<(), dynsql::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! | Feature   | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `serde`   | `Serialize` for fragments, placeholder styles and kinds  |
//! | `tracing` | `debug` events for every render and merge                |

// =============================================================================
// Root-level exports
// =============================================================================

/// Result type for dynsql operations
pub use dynsql_core::error::Result;

/// Error types
pub mod error {
    pub use dynsql_core::error::Error;
}

// =============================================================================
// Core module - shared functionality
// =============================================================================

/// Conditions, fragments and the where-clause builder.
///
/// # Module Structure
///
/// - **Conditions**: `Condition`, `ConditionKind`, `BetweenBuilder`
/// - **Fragments**: `FragmentAndParameters`, `FragmentAndParametersBuilder`, `Parameters`
/// - **Placeholders**: `PlaceholderStyle`, `Placeholder`, `ParameterNames`
/// - **Composition**: `WhereBuilder`, `WhereGroup` and the `AND` / `OR` delimiters
pub mod core {
    pub use dynsql_core::condition::{BetweenBuilder, Condition, ConditionKind};

    pub use dynsql_core::fragment::{
        FragmentAndParameters, FragmentAndParametersBuilder, Parameters,
    };

    pub use dynsql_core::placeholder::{ParameterNames, Placeholder, PlaceholderStyle};

    pub use dynsql_core::where_clause::{AND, OR, WhereBuilder, WhereGroup};
}

pub mod prelude {
    pub use crate::core::{
        Condition, FragmentAndParameters, ParameterNames, PlaceholderStyle, WhereBuilder,
    };
}
