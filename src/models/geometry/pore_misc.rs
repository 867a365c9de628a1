//! Element-agnostic models. Despite the namespace name they size their
//! output to whichever element the property targets.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::{
    catalog::{ModelContext, ModelError},
    support::constraint::UnitInterval,
};

/// The `value` parameter, repeated for every element.
///
/// # Errors
///
/// Fails if `value` is missing or not numeric.
pub fn constant(ctx: &ModelContext<'_>) -> Result<Vec<f64>, ModelError> {
    let value = ctx.params().number("value")?;
    Ok(vec![value; ctx.len()])
}

/// Uniform random values in `[min, max)`, reproducible for a given `seed`.
///
/// Defaults: `seed = 0`, `min = 0`, `max = 1`. The seed must not be
/// negative, and both bounds must lie in the unit interval with `min <= max`.
///
/// # Errors
///
/// Fails with [`ModelError::InvalidParameter`] for a negative seed, or for
/// bounds outside the unit interval or in the wrong order.
pub fn random(ctx: &ModelContext<'_>) -> Result<Vec<f64>, ModelError> {
    let params = ctx.params();
    let seed = params.integer_or("seed", 0)?;
    let seed = u64::try_from(seed).map_err(|_| ModelError::InvalidParameter {
        name: "seed".into(),
        reason: format!("{seed} is negative"),
    })?;
    let min = unit_bound("min", params.number_or("min", 0.0)?)?;
    let max = unit_bound("max", params.number_or("max", 1.0)?)?;
    if min > max {
        return Err(ModelError::InvalidParameter {
            name: "min".into(),
            reason: format!("{min} exceeds max {max}"),
        });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Ok((0..ctx.len())
        .map(|_| min + (max - min) * rng.random::<f64>())
        .collect())
}

fn unit_bound(name: &str, value: f64) -> Result<f64, ModelError> {
    UnitInterval::new(value)
        .map(|bound| bound.into_inner())
        .map_err(|error| ModelError::InvalidParameter {
            name: name.to_owned(),
            reason: error.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{catalog::ModelParams, models::geometry::test_support::{eval, line}};

    #[test]
    fn constant_follows_the_target_element() {
        let (session, geom) = line();
        let params = ModelParams::new().with("value", 0.5);
        assert_eq!(eval(&session, geom, "pore.seed", &params, constant).unwrap(), vec![0.5; 3]);
        assert_eq!(eval(&session, geom, "throat.volume", &params, constant).unwrap(), vec![0.5; 2]);
        assert!(eval(&session, geom, "pore.seed", &ModelParams::new(), constant).is_err());
    }

    #[test]
    fn random_is_seeded() {
        let (session, geom) = line();
        let params = ModelParams::new().with("seed", 42).with("min", 0.2).with("max", 0.4);
        let a = eval(&session, geom, "pore.seed", &params, random).unwrap();
        let b = eval(&session, geom, "pore.seed", &params, random).unwrap();
        assert_eq!(a, b);
        assert!(a.iter().all(|&v| (0.2..0.4).contains(&v)));

        let other = ModelParams::new().with("seed", 43).with("min", 0.2).with("max", 0.4);
        assert_ne!(a, eval(&session, geom, "pore.seed", &other, random).unwrap());
    }

    #[test]
    fn random_bounds_are_checked() {
        let (session, geom) = line();
        for params in [
            ModelParams::new().with("max", 1.5),
            ModelParams::new().with("min", 0.8).with("max", 0.2),
            ModelParams::new().with("seed", -42),
        ] {
            assert!(matches!(
                eval(&session, geom, "pore.seed", &params, random),
                Err(ModelError::InvalidParameter { .. })
            ));
        }
    }
}
