//! Tracing utilities for condition rendering and fragment composition.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a debug-level tracing event for a rendered condition.
///
/// ```ignore
/// dynsql_trace_render!(self.kind(), column);
/// ```
#[macro_export]
macro_rules! dynsql_trace_render {
    ($kind:expr, $column:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(kind = %$kind, column = %$column, "dynsql.render");
    };
}

/// Emit a debug-level tracing event for a merge, with the delimiter and
/// the parameter count of the merged fragment.
///
/// ```ignore
/// dynsql_trace_merge!(delimiter, merged.parameters().len());
/// ```
#[macro_export]
macro_rules! dynsql_trace_merge {
    ($delimiter:expr, $param_count:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(delimiter = ?$delimiter, params = $param_count, "dynsql.merge");
    };
}
