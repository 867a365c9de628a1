//! Per-object property storage.
//!
//! Every simulation object keeps its pore and throat data in a
//! [`PropertyStore`] keyed by dotted names such as `"pore.diameter"` or
//! `"throat.length"`. The prefix names the [`Element`] the array is indexed
//! by.
//!
//! A store holds two things side by side:
//!
//! - materialized arrays, written either directly or by regeneration
//! - bound producers, kept in the order they were bound
//!
//! The order of the bound producers is the registration list that
//! regeneration walks.

mod element;
mod error;
mod store;

pub use element::Element;
pub use error::PropertyError;
pub use store::PropertyStore;
