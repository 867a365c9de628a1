use std::f64::consts::PI;

use crate::catalog::{ModelContext, ModelError};

/// Volume of a spherical pore, `π d³ / 6`.
///
/// # Errors
///
/// Fails if the owner has no `pore.diameter`.
pub fn sphere(ctx: &ModelContext<'_>) -> Result<Vec<f64>, ModelError> {
    volume(ctx, |d| PI / 6.0 * d.powi(3))
}

/// Volume of a cubic pore, `d³`.
///
/// # Errors
///
/// Fails if the owner has no `pore.diameter`.
pub fn cube(ctx: &ModelContext<'_>) -> Result<Vec<f64>, ModelError> {
    volume(ctx, |d| d.powi(3))
}

fn volume(ctx: &ModelContext<'_>, shape: impl Fn(f64) -> f64) -> Result<Vec<f64>, ModelError> {
    Ok(ctx
        .owner_values("pore.diameter")?
        .iter()
        .map(|&d| shape(d))
        .collect())
}
