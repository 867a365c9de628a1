use crate::catalog::{ModelContext, ModelError};

/// The `value` parameter, repeated for every element.
///
/// # Errors
///
/// Fails if `value` is missing or not numeric.
pub fn constant(ctx: &ModelContext<'_>) -> Result<Vec<f64>, ModelError> {
    super::pore_misc::constant(ctx)
}

/// A throat value taken from its two neighbouring pores.
///
/// Reads the network-wide pore array named by `pore_prop` and combines
/// the two neighbours according to `mode`: `min`, `max` (the default), or
/// `mean`.
///
/// # Errors
///
/// Fails if `pore_prop` is missing, `mode` is not recognised, or the pore
/// data is undefined at a neighbouring pore.
pub fn neighbor(ctx: &ModelContext<'_>) -> Result<Vec<f64>, ModelError> {
    let params = ctx.params();
    let pore_prop = params.text("pore_prop")?;
    let combine: fn(f64, f64) -> f64 = match params.text_or("mode", "max")? {
        "min" => f64::min,
        "max" => f64::max,
        "mean" => |a, b| 0.5 * (a + b),
        other => {
            return Err(ModelError::InvalidParameter {
                name: "mode".into(),
                reason: format!("unknown mode `{other}`"),
            });
        }
    };

    let pores = ctx.pore_data(pore_prop)?;
    ctx.throat_conns()
        .map(|(_, [a, b])| -> Result<f64, ModelError> {
            Ok(combine(pores.get(a)?, pores.get(b)?))
        })
        .collect()
}
