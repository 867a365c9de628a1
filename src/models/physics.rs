//! Pore-scale transport coefficients.
//!
//! Physics models run on an owner covering the whole network. They read
//! geometry data network-wide and fluid data from the owner's first fluid,
//! averaging pore values onto throats where a throat value is needed.
//!
//! Conductances treat each throat as three conduits in series: half of
//! each neighbouring pore and the throat itself. A pore of zero size
//! (such as a boundary pore) contributes no resistance.

pub mod capillary_pressure;
pub mod diffusive_conductance;
pub mod hydraulic_conductance;

use crate::catalog::ModelCatalog;

pub const HYDRAULIC_CONDUCTANCE: &str = "hydraulic_conductance";
pub const DIFFUSIVE_CONDUCTANCE: &str = "diffusive_conductance";
pub const CAPILLARY_PRESSURE: &str = "capillary_pressure";

/// Files every physics model under its namespace.
pub fn register(catalog: &mut ModelCatalog) {
    catalog.register(
        HYDRAULIC_CONDUCTANCE,
        "hagen_poiseuille",
        hydraulic_conductance::hagen_poiseuille,
    );
    catalog.register(
        DIFFUSIVE_CONDUCTANCE,
        "bulk_diffusion",
        diffusive_conductance::bulk_diffusion,
    );
    catalog.register(CAPILLARY_PRESSURE, "washburn", capillary_pressure::washburn);
}

/// Combines conduit conductances in series.
///
/// `None` marks a conduit without resistance.
fn series(conduits: [Option<f64>; 3]) -> f64 {
    let resistance: f64 = conduits.into_iter().flatten().map(f64::recip).sum();
    resistance.recip()
}
