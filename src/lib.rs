//! # Pore-network property models
//!
//! Geometry, physics, and fluid properties for pore networks, computed by
//! named models bound to the objects that own them.
//!
//! ## Crate layout
//!
//! - [`network`]: Pore and throat topology, labels, template generation,
//!   and boundary pores.
//! - [`property`]: Per-object property storage.
//! - [`catalog`]: The namespaced model registry and the context models read.
//! - [`models`]: The standard geometry, physics, and fluid models.
//! - [`session`]: The owning context that binds models to objects and
//!   regenerates their properties.
//! - [`support`]: Numeric constraints and unit extensions used by models.
//!
//! ## Binding and regeneration
//!
//! A property such as `"throat.length"` is bound by naming a catalog model
//! (`"throat_length"`, `"straight"`). Regenerating the owner re-runs every
//! bound model in the order it was bound, so values derived from other
//! properties pick up upstream changes:
//!
//! ```
//! use pnm_models::{
//!     catalog::ModelParams,
//!     models::geometry,
//!     network::Network,
//!     session::Session,
//! };
//!
//! let net = Network::new("pair", vec![[0.0; 3], [3.0e-4, 0.0, 0.0]], vec![[0, 1]]).unwrap();
//! let all = net.locations().clone();
//! let mut session = Session::with_standard_catalog(net);
//! let geom = session.add_geometry("bulk", all).unwrap();
//!
//! session.set_constant(geom, "pore.diameter", 1.0e-4).unwrap();
//! session.bind(geom, "throat.length", geometry::THROAT_LENGTH, "straight", ModelParams::new());
//! session.regenerate(geom).unwrap();
//! assert!((session.values(geom, "throat.length").unwrap()[0] - 2.0e-4).abs() < 1e-12);
//!
//! session.set_constant(geom, "pore.diameter", 2.0e-4).unwrap();
//! session.regenerate(geom).unwrap();
//! assert!((session.values(geom, "throat.length").unwrap()[0] - 1.0e-4).abs() < 1e-12);
//! ```
//!
//! A binding that cannot be resolved is logged at `warn` level and skipped;
//! a bound model that fails while regenerating returns an error.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber.

pub mod catalog;
pub mod models;
pub mod network;
pub mod property;
pub mod session;
pub mod support;
