//! Geometry for boundary pores.
//!
//! Boundary pores are zero-sized stand-ins grafted onto a network face so
//! that boundary conditions have somewhere to live. Their geometry binds
//! the standard models with values that make them transparent to
//! transport: zero diameter and volume, a unit pore area, and a seed just
//! below one.

use tracing::info;

use crate::{
    catalog::ModelParams,
    models::geometry,
    network::Locations,
    support::constraint::{ConstraintError, NonNegative, UnitInterval},
};

use super::{GeometryId, Session, SessionError};

/// Settings for [`Session::add_boundary_geometry`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryConfig {
    seed: f64,
    pore_area: f64,
}

impl BoundaryConfig {
    /// Creates a configuration, checking that `seed` lies in `[0, 1]` and
    /// `pore_area` is non-negative.
    ///
    /// # Errors
    ///
    /// Returns the violated [`ConstraintError`].
    pub fn new(seed: f64, pore_area: f64) -> Result<Self, ConstraintError> {
        Ok(Self {
            seed: UnitInterval::new(seed)?.into_inner(),
            pore_area: NonNegative::new(pore_area)?.into_inner(),
        })
    }

    /// Seed assigned to every boundary pore.
    #[must_use]
    pub fn seed(&self) -> f64 {
        self.seed
    }

    /// Area assigned to every boundary pore.
    #[must_use]
    pub fn pore_area(&self) -> f64 {
        self.pore_area
    }
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            seed: 0.9999,
            pore_area: 1.0,
        }
    }
}

impl Session {
    /// Adds a geometry for boundary pores and binds its standard models.
    ///
    /// In order: `pore.seed` and `pore.diameter` as constants,
    /// `throat.seed` and `throat.diameter` as the larger neighbouring pore
    /// value, `pore.volume` assigned zero, `throat.length` from pore
    /// centers, `throat.volume` constant zero, cylindrical `throat.area`
    /// and `throat.surface_area`, and finally `pore.area` assigned from the
    /// configuration.
    ///
    /// Models are bound, not evaluated. Call [`Session::regenerate`] once
    /// the pore diameters of neighbouring geometries are available.
    ///
    /// # Errors
    ///
    /// Fails if `locations` are not part of the network.
    pub fn add_boundary_geometry(
        &mut self,
        name: impl Into<String>,
        locations: Locations,
        config: BoundaryConfig,
    ) -> Result<GeometryId, SessionError> {
        let id = self.add_geometry(name, locations)?;
        let neighbor_max = |pore_prop: &str| {
            ModelParams::new()
                .with("pore_prop", pore_prop)
                .with("mode", "max")
        };

        self.bind(
            id,
            "pore.seed",
            geometry::PORE_MISC,
            "constant",
            ModelParams::new().with("value", config.seed),
        );
        self.bind(
            id,
            "pore.diameter",
            geometry::PORE_MISC,
            "constant",
            ModelParams::new().with("value", 0.0),
        );
        self.bind(
            id,
            "throat.seed",
            geometry::THROAT_MISC,
            "neighbor",
            neighbor_max("pore.seed"),
        );
        self.bind(
            id,
            "throat.diameter",
            geometry::THROAT_MISC,
            "neighbor",
            neighbor_max("pore.diameter"),
        );
        self.set_constant(id, "pore.volume", 0.0)?;
        self.bind(
            id,
            "throat.length",
            geometry::THROAT_LENGTH,
            "straight",
            ModelParams::new(),
        );
        self.bind(
            id,
            "throat.volume",
            geometry::PORE_MISC,
            "constant",
            ModelParams::new().with("value", 0.0),
        );
        self.bind(
            id,
            "throat.area",
            geometry::THROAT_AREA,
            "cylinder",
            ModelParams::new(),
        );
        self.bind(
            id,
            "throat.surface_area",
            geometry::THROAT_SURFACE_AREA,
            "cylinder",
            ModelParams::new(),
        );
        self.set_constant(id, "pore.area", config.pore_area)?;

        info!(geometry = %id, seed = config.seed, "added boundary geometry");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{
        network::{Network, Template, TemplateConfig, VoxelImage},
        session::PropertyObject,
    };

    use super::*;

    #[test]
    fn config_bounds() {
        assert_eq!(BoundaryConfig::default().seed(), 0.9999);
        assert!(BoundaryConfig::new(0.5, 2.0).is_ok());
        assert_eq!(
            BoundaryConfig::new(1.5, 1.0),
            Err(ConstraintError::AboveMaximum)
        );
        assert_eq!(
            BoundaryConfig::new(0.5, -1.0),
            Err(ConstraintError::Negative)
        );
    }

    #[test]
    fn recipe_order() {
        let net = Network::new("pair", vec![[0.0; 3], [1.0, 0.0, 0.0]], vec![[0, 1]]).unwrap();
        let all = net.locations().clone();
        let mut session = Session::with_standard_catalog(net);
        let id = session
            .add_boundary_geometry("boundary", all, BoundaryConfig::default())
            .unwrap();

        let store = session.geometry(id).unwrap().properties();
        let names: Vec<_> = store.registered().collect();
        assert_eq!(
            names,
            [
                "pore.seed",
                "pore.diameter",
                "throat.seed",
                "throat.diameter",
                "throat.length",
                "throat.volume",
                "throat.area",
                "throat.surface_area",
            ]
        );
        assert_eq!(store.values("pore.volume").unwrap(), &[0.0, 0.0]);
        assert_eq!(store.values("pore.area").unwrap(), &[1.0, 1.0]);
    }

    #[test]
    fn boundary_layer_on_a_template() {
        let image = VoxelImage::planar([2, 2], vec![1.0; 4]).unwrap();
        let config = TemplateConfig::with_spacing(1.0e-4).unwrap();
        let net = Template::generate("square", &image, config).unwrap();
        let interior = net.locations().clone();
        let mut session = Session::with_standard_catalog(net);

        let bulk = session.add_geometry("bulk", interior).unwrap();
        session.set_constant(bulk, "pore.diameter", 4.0e-5).unwrap();
        session.set_constant(bulk, "pore.seed", 0.3).unwrap();

        let added = session
            .add_boundary_pores("pore.left", [-5.0e-5, 0.0, 0.0], "left_boundary")
            .unwrap();
        let boundary = session
            .add_boundary_geometry("left", added, BoundaryConfig::default())
            .unwrap();
        session.regenerate(boundary).unwrap();

        // Boundary pores sit 5e-5 from their 4e-5 sources: 5e-5 - (4e-5 + 0) / 2.
        for &length in session.values(boundary, "throat.length").unwrap() {
            assert_relative_eq!(length, 3.0e-5, max_relative = 1e-12);
        }
        assert_eq!(session.values(boundary, "throat.diameter").unwrap(), &[4.0e-5; 2]);
        assert_eq!(session.values(boundary, "throat.seed").unwrap(), &[0.9999; 2]);
        assert_eq!(session.values(boundary, "throat.volume").unwrap(), &[0.0; 2]);
    }
}
