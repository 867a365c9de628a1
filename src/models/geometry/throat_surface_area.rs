use std::f64::consts::PI;

use crate::catalog::{ModelContext, ModelError};

/// Lateral surface of a cylindrical throat, `π d L`.
///
/// # Errors
///
/// Fails if the owner lacks `throat.diameter` or `throat.length`.
pub fn cylinder(ctx: &ModelContext<'_>) -> Result<Vec<f64>, ModelError> {
    lateral(ctx, PI)
}

/// Lateral surface of a square throat, `4 d L`.
///
/// # Errors
///
/// Fails if the owner lacks `throat.diameter` or `throat.length`.
pub fn cuboid(ctx: &ModelContext<'_>) -> Result<Vec<f64>, ModelError> {
    lateral(ctx, 4.0)
}

fn lateral(ctx: &ModelContext<'_>, perimeter_factor: f64) -> Result<Vec<f64>, ModelError> {
    let diameters = ctx.owner_values("throat.diameter")?;
    let lengths = ctx.owner_values("throat.length")?;
    Ok(diameters
        .iter()
        .zip(lengths)
        .map(|(&d, &l)| perimeter_factor * d * l)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{catalog::ModelParams, models::geometry::test_support::{eval, line}};

    #[test]
    fn shapes() {
        let (mut session, geom) = line();
        session.set_values(geom, "throat.diameter", vec![1.0, 2.0]).unwrap();
        session.set_constant(geom, "throat.length", 3.0).unwrap();
        let params = ModelParams::new();

        let round = eval(&session, geom, "throat.surface_area", &params, cylinder).unwrap();
        assert_relative_eq!(round[1], 6.0 * PI);
        let square = eval(&session, geom, "throat.surface_area", &params, cuboid).unwrap();
        assert_eq!(square, vec![12.0, 24.0]);
    }

    #[test]
    fn needs_length() {
        let (mut session, geom) = line();
        session.set_constant(geom, "throat.diameter", 1.0).unwrap();
        assert_eq!(
            eval(&session, geom, "throat.surface_area", &ModelParams::new(), cylinder),
            Err(ModelError::MissingProperty {
                name: "throat.length".into()
            })
        );
    }
}
