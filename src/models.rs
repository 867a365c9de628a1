//! The standard model catalog.
//!
//! Models are grouped by what they compute, and each group is a catalog
//! namespace:
//!
//! - [`geometry`]: pore and throat sizes (`pore_misc`, `throat_misc`,
//!   `throat_length`, `throat_area`, `throat_surface_area`, `pore_volume`)
//! - [`physics`]: transport coefficients (`hydraulic_conductance`,
//!   `diffusive_conductance`, `capillary_pressure`)
//! - [`fluid`]: phase properties (`fluid_misc`, `density`, `molar_density`,
//!   `viscosity`)
//!
//! Every model is a plain function of a
//! [`ModelContext`](crate::catalog::ModelContext) that reads SI values and
//! returns one SI value per element of the property it is bound to.

pub mod fluid;
pub mod geometry;
pub mod physics;

use crate::catalog::ModelCatalog;

/// A catalog holding every standard model.
///
/// ```
/// use pnm_models::models::{self, geometry};
///
/// let catalog = models::standard_catalog();
/// assert!(catalog.lookup(geometry::THROAT_LENGTH, "straight").is_ok());
/// assert!(catalog.lookup("viscosity", "reynolds").is_ok());
/// ```
#[must_use]
pub fn standard_catalog() -> ModelCatalog {
    let mut catalog = ModelCatalog::new();
    geometry::register(&mut catalog);
    physics::register(&mut catalog);
    fluid::register(&mut catalog);
    catalog
}
