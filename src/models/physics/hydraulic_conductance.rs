use std::f64::consts::PI;

use uom::{
    si::{
        dynamic_viscosity::pascal_second,
        f64::{DynamicViscosity, Length},
        length::meter,
    },
    typenum::P4,
};

use crate::{
    catalog::{ModelContext, ModelError},
    support::{constraint::StrictlyPositive, units::HydraulicConductance},
};

use super::series;

/// Hagen-Poiseuille conductance of pore half, throat, pore half in series.
///
/// Each conduit of radius `r` and length `L` conducts `π r⁴ / (8 μ L)`.
/// A pore half has radius and length `d / 2`; the throat uses
/// `throat.diameter` and `throat.length`. Viscosity is the fluid's
/// `pore.viscosity`, averaged onto the throat.
///
/// # Errors
///
/// Fails if geometry or fluid data are missing, or with
/// [`ModelError::InvalidValue`] if a viscosity is not strictly positive.
pub fn hagen_poiseuille(ctx: &ModelContext<'_>) -> Result<Vec<f64>, ModelError> {
    let pore_diameter = ctx.pore_data("pore.diameter")?;
    let throat_diameter = ctx.throat_data("throat.diameter")?;
    let throat_length = ctx.throat_data("throat.length")?;
    let viscosity = ctx.fluid_throat_data("pore.viscosity")?;

    ctx.throat_conns()
        .map(|(throat, [a, b])| -> Result<f64, ModelError> {
            let mu = StrictlyPositive::new(viscosity[throat])
                .map_err(ModelError::invalid("pore.viscosity", throat))?
                .into_inner();
            let mu = DynamicViscosity::new::<pascal_second>(mu);

            let pore_half = |pore: usize| -> Result<Option<f64>, ModelError> {
                let d = pore_diameter.get(pore)?;
                Ok((d > 0.0).then(|| conduit(0.5 * d, 0.5 * d, mu)))
            };
            let throat_conduit = conduit(
                0.5 * throat_diameter.get(throat)?,
                throat_length.get(throat)?,
                mu,
            );
            Ok(series([pore_half(a)?, Some(throat_conduit), pore_half(b)?]))
        })
        .collect()
}

fn conduit(radius: f64, length: f64, viscosity: DynamicViscosity) -> f64 {
    let radius = Length::new::<meter>(radius);
    let length = Length::new::<meter>(length);
    let g: HydraulicConductance = PI * radius.powi(P4::new()) / (8.0 * viscosity * length);
    g.value
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{
        catalog::ModelParams,
        models::physics::{HYDRAULIC_CONDUCTANCE, test_support::pair},
    };

    fn poiseuille(r: f64, l: f64, mu: f64) -> f64 {
        PI * r.powi(4) / (8.0 * mu * l)
    }

    #[test]
    fn three_conduits_in_series() {
        let (d, mu) = (2.0e-5, 1.0e-3);
        let (session, _, phys) = pair(d, mu);
        let params = ModelParams::new();
        let ctx = session.context(phys, "throat.hydraulic_conductance", &params).unwrap();
        let g = hagen_poiseuille(&ctx).unwrap();

        let pore = poiseuille(d / 2.0, d / 2.0, mu);
        let throat = poiseuille(d / 4.0, 1.0e-4, mu);
        let expected = 1.0 / (2.0 / pore + 1.0 / throat);
        assert_relative_eq!(g[0], expected, max_relative = 1e-12);
    }

    #[test]
    fn zero_sized_pores_add_no_resistance() {
        let (d, mu) = (2.0e-5, 1.0e-3);
        let (mut session, _, phys) = pair(d, mu);
        let geom = session.geometry_ids().next().unwrap();
        session.set_constant(geom, "pore.diameter", 0.0).unwrap();

        session.bind(
            phys,
            "throat.hydraulic_conductance",
            HYDRAULIC_CONDUCTANCE,
            "hagen_poiseuille",
            ModelParams::new(),
        );
        session.regenerate(phys).unwrap();
        let g = session.values(phys, "throat.hydraulic_conductance").unwrap();
        assert_relative_eq!(g[0], poiseuille(d / 4.0, 1.0e-4, mu), max_relative = 1e-12);
    }

    #[test]
    fn needs_a_fluid_viscosity() {
        let (session, water, phys) = pair(2.0e-5, 0.0);
        let params = ModelParams::new();
        let ctx = session.context(phys, "throat.hydraulic_conductance", &params).unwrap();
        assert!(matches!(
            hagen_poiseuille(&ctx),
            Err(ModelError::InvalidValue { index: 0, .. })
        ));

        let ctx = session.context(water, "throat.hydraulic_conductance", &params).unwrap();
        assert_eq!(hagen_poiseuille(&ctx), Err(ModelError::MissingFluid));
    }
}
