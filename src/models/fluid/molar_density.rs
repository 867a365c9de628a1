use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    molar_concentration::mole_per_cubic_meter,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::{
    catalog::{ModelContext, ModelError},
    support::constraint::StrictlyPositive,
};

use super::ideal_gas;

/// Ideal gas molar density, `c = p / (R T)`.
///
/// # Errors
///
/// Fails if `pore.temperature` or `pore.pressure` is missing, or with
/// [`ModelError::InvalidValue`] if a temperature is not strictly positive.
pub fn ideal_gas(ctx: &ModelContext<'_>) -> Result<Vec<f64>, ModelError> {
    let temperature = ctx.owner_values("pore.temperature")?;
    let pressure = ctx.owner_values("pore.pressure")?;

    temperature
        .iter()
        .zip(pressure)
        .enumerate()
        .map(|(pore, (&t, &p))| -> Result<f64, ModelError> {
            let t = StrictlyPositive::new(t)
                .map_err(ModelError::invalid("pore.temperature", pore))?;
            let c = ideal_gas::molar_density(
                ThermodynamicTemperature::new::<kelvin>(t.into_inner()),
                Pressure::new::<pascal>(p),
            );
            Ok(c.get::<mole_per_cubic_meter>())
        })
        .collect()
}
