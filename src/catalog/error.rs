use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// A model could not be resolved in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("unknown model namespace `{namespace}`")]
    UnknownNamespace { namespace: String },

    #[error("model `{model}` not found in namespace `{namespace}`")]
    UnknownModel { namespace: String, model: String },
}

/// Broad class of a [`ModelError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Upstream state the model reads is absent or malformed.
    Precondition,
    /// The parameters fixed at bind time are incomplete or malformed.
    Configuration,
}

/// Errors raised by a model function while computing a property.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// A property the model reads is not available.
    #[error("required property `{name}` is missing")]
    MissingProperty { name: String },

    /// A property is defined on some geometries but not at an element a
    /// model reads.
    #[error("property `{name}` is undefined at element {index}")]
    IncompleteProperty { name: String, index: usize },

    /// The model reads fluid data but the owner has no associated fluid.
    #[error("model requires an associated fluid")]
    MissingFluid,

    /// A value read by the model violates a physical bound.
    #[error("invalid `{name}` at element {index}")]
    InvalidValue {
        name: String,
        index: usize,
        #[source]
        source: ConstraintError,
    },

    /// The model returned the wrong number of values.
    #[error("model returned {actual} values, expected {expected}")]
    OutputLength { expected: usize, actual: usize },

    /// A required parameter was not supplied at bind time.
    #[error("missing parameter `{name}`")]
    MissingParameter { name: String },

    /// A parameter was supplied with the wrong type or an invalid value.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl ModelError {
    /// Classifies the error as a precondition or configuration failure.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            ModelError::MissingParameter { .. } | ModelError::InvalidParameter { .. } => {
                ErrorKind::Configuration
            }
            _ => ErrorKind::Precondition,
        }
    }

    pub(crate) fn missing(name: &str) -> Self {
        ModelError::MissingProperty {
            name: name.to_owned(),
        }
    }

    pub(crate) fn invalid(name: &str, index: usize) -> impl FnOnce(ConstraintError) -> Self + '_ {
        move |source| ModelError::InvalidValue {
            name: name.to_owned(),
            index,
            source,
        }
    }
}
