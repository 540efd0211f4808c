use thiserror::Error;

use crate::condition::ConditionKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The number of placeholder tokens does not match the condition's bound values
    #[error("{kind} condition binds {expected} value(s) but {found} placeholder(s) were supplied")]
    ArityMismatch {
        kind: ConditionKind,
        expected: usize,
        found: usize,
    },

    /// A list condition was constructed without any values
    #[error("{kind} condition requires at least one value")]
    EmptyList { kind: ConditionKind },
}

/// Result type for fragment construction
pub type Result<T> = std::result::Result<T, Error>;
