use thiserror::Error;

/// Raised when an absent [`Optional`](crate::Optional) is forced to yield a value.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OptionalError {
    #[error("Optional is empty")]
    Narrowing,

    #[error("Optional value is absent")]
    AbsentAccess,
}
