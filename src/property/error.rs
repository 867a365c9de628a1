use thiserror::Error;

/// Errors raised when reading or writing a [`PropertyStore`](super::PropertyStore).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The name does not start with `pore.` or `throat.`.
    #[error("invalid property name `{name}`: expected a `pore.` or `throat.` prefix")]
    InvalidName { name: String },

    /// An array does not match the owner's element count.
    #[error("property `{name}` has {actual} values, expected {expected}")]
    LengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// No values have been stored under this name.
    #[error("property `{name}` has no values")]
    NotFound { name: String },

    /// No producer has been bound under this name.
    #[error("property `{name}` has no bound model")]
    NotBound { name: String },
}
