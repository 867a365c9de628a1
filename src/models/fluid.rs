//! Phase property models.
//!
//! Fluid models run on the fluid itself and read its own pore arrays, such
//! as `pore.temperature` and `pore.pressure`.

pub mod density;
mod ideal_gas;
pub mod molar_density;
pub mod viscosity;

use crate::catalog::{ModelCatalog, ModelContext, ModelError};

pub const MISC: &str = "fluid_misc";
pub const DENSITY: &str = "density";
pub const MOLAR_DENSITY: &str = "molar_density";
pub const VISCOSITY: &str = "viscosity";

/// Files every fluid model under its namespace.
pub fn register(catalog: &mut ModelCatalog) {
    catalog.register(MISC, "constant", constant);
    catalog.register(DENSITY, "ideal_gas", density::ideal_gas);
    catalog.register(MOLAR_DENSITY, "ideal_gas", molar_density::ideal_gas);
    catalog.register(VISCOSITY, "reynolds", viscosity::reynolds);
}

/// The `value` parameter, repeated for every element.
///
/// # Errors
///
/// Fails if `value` is missing or not numeric.
pub fn constant(ctx: &ModelContext<'_>) -> Result<Vec<f64>, ModelError> {
    super::geometry::pore_misc::constant(ctx)
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::{
        network::Network,
        session::{FluidId, Session},
    };

    /// A three-pore line with an empty fluid at the given state.
    pub(crate) fn gas(temperature: f64, pressure: f64) -> (Session, FluidId) {
        let coords = vec![[0.0; 3], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]];
        let net = Network::new("line", coords, vec![[0, 1], [1, 2]]).unwrap();
        let mut session = Session::with_standard_catalog(net);
        let fluid = session.add_fluid("gas");
        session.set_constant(fluid, "pore.temperature", temperature).unwrap();
        session.set_constant(fluid, "pore.pressure", pressure).unwrap();
        (session, fluid)
    }
}
