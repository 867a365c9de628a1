use crate::{
    catalog::ModelParams,
    models::fluid,
    session::{FluidId, Session, SessionError},
};

use super::FluidPreset;

/// Liquid water at ambient conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Water;

impl FluidPreset for Water {
    const NAME: &'static str = "water";

    fn configure(session: &mut Session, id: FluidId) -> Result<(), SessionError> {
        for (property, value) in [
            ("pore.temperature", 298.0),
            ("pore.pressure", 101_325.0),
            ("pore.molecular_weight", 0.018_02),
            ("pore.contact_angle", 110.0),
            ("pore.surface_tension", 0.072),
            ("pore.diffusivity", 1.0e-9),
        ] {
            session.set_constant(id, property, value)?;
        }

        session.bind(
            id,
            "pore.density",
            fluid::MISC,
            "constant",
            ModelParams::new().with("value", 997.0),
        );
        session.bind(
            id,
            "pore.molar_density",
            fluid::MISC,
            "constant",
            ModelParams::new().with("value", 55_330.0),
        );
        session.bind(
            id,
            "pore.viscosity",
            fluid::VISCOSITY,
            "reynolds",
            ModelParams::new().with("uo", 0.978_94).with("b", 0.0235),
        );
        Ok(())
    }
}
