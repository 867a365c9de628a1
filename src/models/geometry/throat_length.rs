use crate::{
    catalog::{ModelContext, ModelError},
    support::constraint::NonNegative,
};

/// Center-to-center distance minus the radii of the two connected pores.
///
/// Uses the network-wide `pore.diameter`.
///
/// # Errors
///
/// Fails if `pore.diameter` is undefined at a connected pore, or with
/// [`ModelError::InvalidValue`] if the pores overlap and the length would
/// be negative.
pub fn straight(ctx: &ModelContext<'_>) -> Result<Vec<f64>, ModelError> {
    let diameters = ctx.pore_data("pore.diameter")?;
    let network = ctx.network();
    ctx.throat_conns()
        .map(|(throat, [a, b])| -> Result<f64, ModelError> {
            let radii = 0.5 * (diameters.get(a)? + diameters.get(b)?);
            let length = network.center_distance(a, b) - radii;
            NonNegative::new(length)
                .map(|length| length.into_inner())
                .map_err(ModelError::invalid("throat.length", throat))
        })
        .collect()
}
