use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::{
    catalog::{ModelContext, ModelError},
    support::{constraint::StrictlyPositive, units::si},
};

use super::ideal_gas;

/// Ideal gas mass density, `ρ = p M / (R T)`.
///
/// Reads `pore.temperature` and `pore.pressure` from the fluid. The molar
/// mass is the `molar_mass` parameter if given, otherwise the fluid's
/// `pore.molecular_weight`.
///
/// # Errors
///
/// Fails if a state array is missing, or with [`ModelError::InvalidValue`]
/// if a temperature is not strictly positive.
pub fn ideal_gas(ctx: &ModelContext<'_>) -> Result<Vec<f64>, ModelError> {
    let temperature = ctx.owner_values("pore.temperature")?;
    let pressure = ctx.owner_values("pore.pressure")?;
    let molar_mass = match ctx.params().get("molar_mass") {
        Some(_) => vec![ctx.params().number("molar_mass")?; ctx.len()],
        None => ctx.owner_values("pore.molecular_weight")?.to_vec(),
    };

    temperature
        .iter()
        .zip(pressure)
        .zip(molar_mass)
        .enumerate()
        .map(|(pore, ((&t, &p), m))| -> Result<f64, ModelError> {
            let t = StrictlyPositive::new(t)
                .map_err(ModelError::invalid("pore.temperature", pore))?;
            let rho = ideal_gas::density(
                ThermodynamicTemperature::new::<kelvin>(t.into_inner()),
                Pressure::new::<pascal>(p),
                si(m),
            );
            Ok(rho.get::<kilogram_per_cubic_meter>())
        })
        .collect()
}
