//! Ideal gas equation of state helpers.
//!
//! These functions implement the ideal gas law in molar form:
//! `p = c·R·T`, with mass density `ρ = c·M`.

use uom::si::f64::{MassDensity, MolarConcentration, Pressure, ThermodynamicTemperature};

use crate::support::units::{MolarGasConstant, MolarMass, si};

/// Molar gas constant, J/(mol·K).
pub(crate) fn gas_constant() -> MolarGasConstant {
    si(8.314_462_618)
}

/// Computes molar density using the ideal gas equation of state.
#[must_use]
pub(crate) fn molar_density(
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
) -> MolarConcentration {
    (pressure / (gas_constant() * temperature)).into()
}

/// Computes mass density using the ideal gas equation of state.
#[must_use]
pub(crate) fn density(
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
    molar_mass: MolarMass,
) -> MassDensity {
    molar_density(temperature, pressure) * molar_mass
}
