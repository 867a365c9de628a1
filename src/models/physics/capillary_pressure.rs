use uom::si::{
    angle::degree,
    f64::{Angle, Length, Pressure},
    length::meter,
    pressure::pascal,
};

use crate::{
    catalog::{ModelContext, ModelError},
    support::units::{SurfaceTension, si},
};

/// Washburn entry pressure of a cylindrical throat, `-2 σ cos θ / r`.
///
/// Surface tension `σ` and contact angle `θ` (degrees) are the fluid's
/// `pore.surface_tension` and `pore.contact_angle` averaged onto the
/// throat; `r` is half the network-wide `throat.diameter`. A throat of
/// zero diameter gets an infinite entry pressure.
///
/// # Errors
///
/// Fails if geometry or fluid data are missing.
pub fn washburn(ctx: &ModelContext<'_>) -> Result<Vec<f64>, ModelError> {
    let diameter = ctx.throat_data("throat.diameter")?;
    let sigma = ctx.fluid_throat_data("pore.surface_tension")?;
    let theta = ctx.fluid_throat_data("pore.contact_angle")?;

    ctx.throat_conns()
        .map(|(throat, _)| -> Result<f64, ModelError> {
            let sigma: SurfaceTension = si(sigma[throat]);
            let theta = Angle::new::<degree>(theta[throat]);
            let radius = Length::new::<meter>(0.5 * diameter.get(throat)?);
            let pc: Pressure = -2.0 * sigma * theta.cos() / radius;
            Ok(pc.get::<pascal>())
        })
        .collect()
}
