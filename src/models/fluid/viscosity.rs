use uom::si::{dynamic_viscosity::pascal_second, f64::DynamicViscosity};

use crate::catalog::{ModelContext, ModelError};

/// Reynolds' exponential viscosity law, `μ = uo · exp(-b T)`.
///
/// `uo` is in Pa·s and `b` in 1/K; `T` is the fluid's `pore.temperature`.
///
/// # Errors
///
/// Fails if `uo`, `b`, or `pore.temperature` is missing.
pub fn reynolds(ctx: &ModelContext<'_>) -> Result<Vec<f64>, ModelError> {
    let params = ctx.params();
    let uo = DynamicViscosity::new::<pascal_second>(params.number("uo")?);
    let b = params.number("b")?;

    Ok(ctx
        .owner_values("pore.temperature")?
        .iter()
        .map(|&t| (uo * (-b * t).exp()).get::<pascal_second>())
        .collect())
}
