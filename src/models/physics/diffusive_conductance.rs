use std::f64::consts::PI;

use uom::si::{
    area::square_meter,
    f64::{Area, Length, MolarConcentration},
    length::meter,
    molar_concentration::mole_per_cubic_meter,
};

use crate::{
    catalog::{ModelContext, ModelError},
    support::units::{DiffusiveConductance, Diffusivity, si},
};

use super::series;

/// Bulk diffusion through pore half, throat, pore half in series.
///
/// Each conduit of cross-section `A` and length `L` conducts `c D A / L`,
/// where `c` is the fluid's `pore.molar_density` and `D` its
/// `pore.diffusivity`. A pore half has cross-section `π d² / 4` and length
/// `d / 2`; the throat uses `throat.area` and `throat.length`.
///
/// # Errors
///
/// Fails if geometry or fluid data are missing.
pub fn bulk_diffusion(ctx: &ModelContext<'_>) -> Result<Vec<f64>, ModelError> {
    let pore_diameter = ctx.pore_data("pore.diameter")?;
    let throat_area = ctx.throat_data("throat.area")?;
    let throat_length = ctx.throat_data("throat.length")?;
    let molar_density = ctx.fluid_pore_data("pore.molar_density")?;
    let diffusivity = ctx.fluid_pore_data("pore.diffusivity")?;
    let throat_molar_density = ctx.fluid_throat_data("pore.molar_density")?;
    let throat_diffusivity = ctx.fluid_throat_data("pore.diffusivity")?;

    let pore_half = |pore: usize| -> Result<Option<f64>, ModelError> {
        let d = pore_diameter.get(pore)?;
        Ok((d > 0.0).then(|| {
            conduit(
                molar_density[pore],
                diffusivity[pore],
                PI / 4.0 * d * d,
                0.5 * d,
            )
        }))
    };

    ctx.throat_conns()
        .map(|(throat, [a, b])| -> Result<f64, ModelError> {
            let throat_conduit = conduit(
                throat_molar_density[throat],
                throat_diffusivity[throat],
                throat_area.get(throat)?,
                throat_length.get(throat)?,
            );
            Ok(series([pore_half(a)?, Some(throat_conduit), pore_half(b)?]))
        })
        .collect()
}

fn conduit(molar_density: f64, diffusivity: f64, area: f64, length: f64) -> f64 {
    let c = MolarConcentration::new::<mole_per_cubic_meter>(molar_density);
    let d: Diffusivity = si(diffusivity);
    let area = Area::new::<square_meter>(area);
    let length = Length::new::<meter>(length);
    let g: DiffusiveConductance = c * d * area / length;
    g.value
}
