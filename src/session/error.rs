use thiserror::Error;

use crate::{
    catalog::{LookupError, ModelError},
    network::NetworkError,
    property::PropertyError,
};

use super::ObjectId;

/// Errors raised by [`Session`](super::Session) bookkeeping.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// The id does not belong to this session.
    #[error("unknown object {id}")]
    UnknownObject { id: ObjectId },

    #[error(transparent)]
    Property(#[from] PropertyError),

    #[error(transparent)]
    Network(#[from] NetworkError),
}

/// Why a binding was skipped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BindError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Property(#[from] PropertyError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// A bound producer failed while regenerating.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegenerateError {
    /// The model bound to `property` on `owner` raised an error.
    #[error("model for `{property}` on `{owner}` failed")]
    Model {
        owner: String,
        property: String,
        #[source]
        source: ModelError,
    },

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl RegenerateError {
    /// The model error behind a failed producer, if that is the cause.
    #[must_use]
    pub fn model_error(&self) -> Option<&ModelError> {
        match self {
            RegenerateError::Model { source, .. } => Some(source),
            RegenerateError::Session(_) => None,
        }
    }
}
