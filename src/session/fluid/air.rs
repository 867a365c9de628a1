use crate::{
    catalog::ModelParams,
    models::fluid,
    session::{FluidId, Session, SessionError},
};

use super::FluidPreset;

/// Dry air at ambient conditions, treated as an ideal gas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Air;

impl FluidPreset for Air {
    const NAME: &'static str = "air";

    fn configure(session: &mut Session, id: FluidId) -> Result<(), SessionError> {
        for (property, value) in [
            ("pore.temperature", 298.0),
            ("pore.pressure", 101_325.0),
            ("pore.molecular_weight", 0.028_96),
            ("pore.diffusivity", 2.0e-5),
        ] {
            session.set_constant(id, property, value)?;
        }

        session.bind(id, "pore.density", fluid::DENSITY, "ideal_gas", ModelParams::new());
        session.bind(
            id,
            "pore.molar_density",
            fluid::MOLAR_DENSITY,
            "ideal_gas",
            ModelParams::new(),
        );
        session.bind(
            id,
            "pore.viscosity",
            fluid::MISC,
            "constant",
            ModelParams::new().with("value", 1.8e-5),
        );
        Ok(())
    }
}
