use std::f64::consts::PI;

use crate::catalog::{ModelContext, ModelError};

/// Cross-section of a cylindrical throat, `π d² / 4`.
///
/// # Errors
///
/// Fails if the owner has no `throat.diameter`.
pub fn cylinder(ctx: &ModelContext<'_>) -> Result<Vec<f64>, ModelError> {
    cross_section(ctx, |d| PI / 4.0 * d * d)
}

/// Cross-section of a square throat, `d²`.
///
/// # Errors
///
/// Fails if the owner has no `throat.diameter`.
pub fn cuboid(ctx: &ModelContext<'_>) -> Result<Vec<f64>, ModelError> {
    cross_section(ctx, |d| d * d)
}

fn cross_section(ctx: &ModelContext<'_>, area: impl Fn(f64) -> f64) -> Result<Vec<f64>, ModelError> {
    Ok(ctx
        .owner_values("throat.diameter")?
        .iter()
        .map(|&d| area(d))
        .collect())
}
