//! The owning context for a network and everything attached to it.
//!
//! A [`Session`] holds one [`Network`], a [`ModelCatalog`], and arenas of
//! [`Geometry`], [`Physics`], and [`Fluid`] objects addressed by typed ids.
//! Objects refer to each other only through ids, so the physics↔fluid
//! association is plain bookkeeping done by [`Session::associate`] once both
//! sides exist.
//!
//! Properties are either assigned directly ([`Session::set_constant`],
//! [`Session::set_values`]) or bound to a catalog model with
//! [`Session::bind`] and computed by [`Session::regenerate`].
//!
//! ```
//! use pnm_models::{
//!     catalog::ModelParams,
//!     models::geometry,
//!     network::Network,
//!     session::Session,
//! };
//!
//! let net = Network::new("pair", vec![[0.0; 3], [1.0e-5, 0.0, 0.0]], vec![[0, 1]]).unwrap();
//! let all = net.locations().clone();
//! let mut session = Session::with_standard_catalog(net);
//!
//! let geom = session.add_geometry("bulk", all).unwrap();
//! let params = ModelParams::new().with("value", 2.0e-6);
//! assert!(session.bind(geom, "pore.diameter", geometry::PORE_MISC, "constant", params).is_bound());
//! session.regenerate(geom).unwrap();
//! assert_eq!(session.values(geom, "pore.diameter").unwrap(), &[2.0e-6, 2.0e-6]);
//! ```

mod binder;
mod boundary;
mod error;
pub mod fluid;
mod geometry;
mod ids;
mod object;
mod physics;

pub use binder::BindOutcome;
pub use boundary::BoundaryConfig;
pub use error::{BindError, RegenerateError, SessionError};
pub use fluid::{Fluid, FluidPreset};
pub use geometry::Geometry;
pub use ids::{FluidId, GeometryId, ObjectId, PhysicsId};
pub use object::PropertyObject;
pub use physics::Physics;

use tracing::debug;

use crate::{
    catalog::{ModelCatalog, ModelContext, ModelParams},
    models,
    network::{Locations, Network},
    property::{Element, PropertyError},
};

/// A network with its geometries, physics, fluids, and model catalog.
#[derive(Debug)]
pub struct Session {
    network: Network,
    catalog: ModelCatalog,
    geometries: Vec<Geometry>,
    physics: Vec<Physics>,
    fluids: Vec<Fluid>,
}

impl Session {
    /// Creates a session that resolves bindings against `catalog`.
    #[must_use]
    pub fn new(network: Network, catalog: ModelCatalog) -> Self {
        debug!(network = network.name(), "created session");
        Self {
            network,
            catalog,
            geometries: Vec::new(),
            physics: Vec::new(),
            fluids: Vec::new(),
        }
    }

    /// Creates a session backed by [`models::standard_catalog`].
    #[must_use]
    pub fn with_standard_catalog(network: Network) -> Self {
        Self::new(network, models::standard_catalog())
    }

    #[must_use]
    pub fn network(&self) -> &Network {
        &self.network
    }

    #[must_use]
    pub fn catalog(&self) -> &ModelCatalog {
        &self.catalog
    }

    /// Mutable access for registering custom models.
    pub fn catalog_mut(&mut self) -> &mut ModelCatalog {
        &mut self.catalog
    }

    /// Adds a geometry covering `locations`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Network`] if a location does not exist.
    pub fn add_geometry(
        &mut self,
        name: impl Into<String>,
        locations: Locations,
    ) -> Result<GeometryId, SessionError> {
        self.network.check_locations(&locations)?;
        let id = GeometryId(self.geometries.len());
        let name = name.into();
        debug!(
            geometry = %name,
            pores = locations.pores().len(),
            throats = locations.throats().len(),
            "created geometry"
        );
        self.geometries.push(Geometry::new(name, locations));
        Ok(id)
    }

    /// Adds an empty fluid covering the whole network.
    pub fn add_fluid(&mut self, name: impl Into<String>) -> FluidId {
        let id = FluidId(self.fluids.len());
        let name = name.into();
        debug!(fluid = %name, "created fluid");
        self.fluids
            .push(Fluid::new(name, self.network.locations().clone()));
        id
    }

    /// Adds a fluid configured by a [`FluidPreset`].
    ///
    /// # Errors
    ///
    /// Propagates any error from [`FluidPreset::configure`].
    pub fn add_fluid_preset<P: FluidPreset>(&mut self) -> Result<FluidId, SessionError> {
        let id = self.add_fluid(P::NAME);
        P::configure(self, id)?;
        Ok(id)
    }

    /// Adds a physics object covering the whole network and attaches it to
    /// `fluid`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownObject`] if `fluid` does not exist.
    pub fn add_physics(
        &mut self,
        name: impl Into<String>,
        fluid: FluidId,
    ) -> Result<PhysicsId, SessionError> {
        self.fluid(fluid)?;
        let id = PhysicsId(self.physics.len());
        let name = name.into();
        debug!(physics = %name, fluid = %fluid, "created physics");
        self.physics
            .push(Physics::new(name, self.network.locations().clone()));
        self.associate(id, fluid)?;
        Ok(id)
    }

    /// Records that `physics` describes `fluid`, on both sides.
    ///
    /// Associating the same pair again changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownObject`] if either id does not exist.
    pub fn associate(&mut self, physics: PhysicsId, fluid: FluidId) -> Result<(), SessionError> {
        self.fluid(fluid)?;
        self.physics(physics)?;
        let forward = self.physics[physics.0].attach(fluid);
        let backward = self.fluids[fluid.0].attach(physics);
        if forward || backward {
            debug!(physics = %physics, fluid = %fluid, "associated physics with fluid");
        }
        Ok(())
    }

    /// Grafts boundary pores onto a labeled face of the network.
    ///
    /// See [`Network::add_boundary_pores`]. Fluids and physics keep covering
    /// the whole network: their pore arrays are extended with the source
    /// pore's value and their throat arrays with `NaN`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Network`] if `face_label` does not exist.
    pub fn add_boundary_pores(
        &mut self,
        face_label: &str,
        offset: [f64; 3],
        boundary_label: &str,
    ) -> Result<Locations, SessionError> {
        let added = self
            .network
            .add_boundary_pores(face_label, offset, boundary_label)?;
        let conns = self.network.conns();
        let sources: Vec<usize> = added.throats().iter().map(|&t| conns[t][0]).collect();
        let all = self.network.locations().clone();

        for fluid in &mut self.fluids {
            fluid.properties_mut().graft(&sources, sources.len());
            fluid.relocate(all.clone());
        }
        for physics in &mut self.physics {
            physics.properties_mut().graft(&sources, sources.len());
            physics.relocate(all.clone());
        }
        Ok(added)
    }

    /// # Errors
    ///
    /// Returns [`SessionError::UnknownObject`] if `id` does not exist.
    pub fn geometry(&self, id: GeometryId) -> Result<&Geometry, SessionError> {
        self.geometries.get(id.0).ok_or(SessionError::UnknownObject { id: id.into() })
    }

    /// # Errors
    ///
    /// Returns [`SessionError::UnknownObject`] if `id` does not exist.
    pub fn physics(&self, id: PhysicsId) -> Result<&Physics, SessionError> {
        self.physics.get(id.0).ok_or(SessionError::UnknownObject { id: id.into() })
    }

    /// # Errors
    ///
    /// Returns [`SessionError::UnknownObject`] if `id` does not exist.
    pub fn fluid(&self, id: FluidId) -> Result<&Fluid, SessionError> {
        self.fluids.get(id.0).ok_or(SessionError::UnknownObject { id: id.into() })
    }

    /// Geometry ids in creation order.
    pub fn geometry_ids(&self) -> impl Iterator<Item = GeometryId> + use<> {
        (0..self.geometries.len()).map(GeometryId)
    }

    /// Physics ids in creation order.
    pub fn physics_ids(&self) -> impl Iterator<Item = PhysicsId> + use<> {
        (0..self.physics.len()).map(PhysicsId)
    }

    /// Fluid ids in creation order.
    pub fn fluid_ids(&self) -> impl Iterator<Item = FluidId> + use<> {
        (0..self.fluids.len()).map(FluidId)
    }

    /// Any property owner in the session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownObject`] if `id` does not exist.
    pub fn object(&self, id: impl Into<ObjectId>) -> Result<&dyn PropertyObject, SessionError> {
        let id = id.into();
        let object: Option<&dyn PropertyObject> = match id {
            ObjectId::Network => Some(&self.network),
            ObjectId::Geometry(g) => self.geometries.get(g.0).map(|o| o as &dyn PropertyObject),
            ObjectId::Physics(p) => self.physics.get(p.0).map(|o| o as &dyn PropertyObject),
            ObjectId::Fluid(f) => self.fluids.get(f.0).map(|o| o as &dyn PropertyObject),
        };
        object.ok_or(SessionError::UnknownObject { id })
    }

    fn object_mut(&mut self, id: ObjectId) -> Result<&mut dyn PropertyObject, SessionError> {
        let object: Option<&mut dyn PropertyObject> = match id {
            ObjectId::Network => Some(&mut self.network),
            ObjectId::Geometry(g) => self.geometries.get_mut(g.0).map(|o| o as &mut dyn PropertyObject),
            ObjectId::Physics(p) => self.physics.get_mut(p.0).map(|o| o as &mut dyn PropertyObject),
            ObjectId::Fluid(f) => self.fluids.get_mut(f.0).map(|o| o as &mut dyn PropertyObject),
        };
        object.ok_or(SessionError::UnknownObject { id })
    }

    /// The stored values of a property on `owner`.
    ///
    /// # Errors
    ///
    /// Fails if `owner` does not exist or holds no values under `property`.
    pub fn values(&self, owner: impl Into<ObjectId>, property: &str) -> Result<&[f64], SessionError> {
        Ok(self.object(owner)?.properties().values(property)?)
    }

    /// Stores `values` under `property` on `owner`.
    ///
    /// Directly assigned values are never touched by
    /// [`regenerate`](Session::regenerate) unless a producer is also bound
    /// under the same name.
    ///
    /// # Errors
    ///
    /// Fails if `owner` does not exist, `property` has no element prefix, or
    /// the length differs from the owner's element count.
    pub fn set_values(
        &mut self,
        owner: impl Into<ObjectId>,
        property: &str,
        values: Vec<f64>,
    ) -> Result<(), SessionError> {
        let owner = owner.into();
        let element = Element::of(property)?;
        let object = self.object_mut(owner)?;
        let expected = object.locations().count(element);
        if values.len() != expected {
            return Err(PropertyError::LengthMismatch {
                name: property.to_owned(),
                expected,
                actual: values.len(),
            }
            .into());
        }
        object.properties_mut().insert(property, values);
        debug!(owner = %owner, property, "assigned property values");
        Ok(())
    }

    /// Broadcasts `value` to every element of `owner` under `property`.
    ///
    /// # Errors
    ///
    /// Same as [`Session::set_values`].
    pub fn set_constant(
        &mut self,
        owner: impl Into<ObjectId>,
        property: &str,
        value: f64,
    ) -> Result<(), SessionError> {
        let owner = owner.into();
        let count = self.object(owner)?.locations().count(Element::of(property)?);
        self.set_values(owner, property, vec![value; count])
    }

    /// The context a model bound to `property` on `owner` is evaluated in.
    ///
    /// # Errors
    ///
    /// Fails if `owner` does not exist or `property` has no element prefix.
    pub fn context<'a>(
        &'a self,
        owner: impl Into<ObjectId>,
        property: &str,
        params: &'a ModelParams,
    ) -> Result<ModelContext<'a>, SessionError> {
        let element = Element::of(property)?;
        let object = self.object(owner)?;
        let fluid = object
            .fluids()
            .first()
            .and_then(|id| self.fluids.get(id.0));
        Ok(ModelContext::new(
            object,
            element,
            &self.network,
            &self.geometries,
            fluid,
            params,
        ))
    }
}
