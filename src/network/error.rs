use thiserror::Error;

use crate::property::{Element, PropertyError};

/// Errors raised while building or querying a [`Network`](super::Network).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// A throat references a missing pore or connects a pore to itself.
    #[error("throat {throat} has invalid connections {pores:?} in a network of {pore_count} pores")]
    InvalidThroat {
        throat: usize,
        pores: [usize; 2],
        pore_count: usize,
    },

    /// An element index is outside the network.
    #[error("{element} {index} is out of range for a network with {count} {element}s")]
    OutOfRange {
        element: Element,
        index: usize,
        count: usize,
    },

    /// An image has no voxels.
    #[error("image has no voxels")]
    EmptyImage,

    /// An image's value count does not match its shape.
    #[error("image shape {shape:?} needs {expected} values, got {actual}")]
    ShapeMismatch {
        shape: [usize; 3],
        expected: usize,
        actual: usize,
    },

    /// No label with this name exists.
    #[error("unknown label `{name}`")]
    UnknownLabel { name: String },

    /// A boundary layer was grown from a label that does not mark pores.
    #[error("`{name}` is not a pore label")]
    NotAPoreLabel { name: String },

    /// A label with this name already exists.
    #[error("label `{name}` already exists")]
    LabelExists { name: String },

    #[error(transparent)]
    Property(#[from] PropertyError),
}
