//! Fluid phases and ready-made fluid presets.

mod air;
mod water;

pub use air::Air;
pub use water::Water;

use crate::{network::Locations, property::PropertyStore};

use super::{FluidId, PhysicsId, PropertyObject, Session, SessionError};

/// A phase whose pore properties feed physics models.
///
/// Fluids cover the whole network. Physics objects attached to a fluid are
/// listed in [`physics`](Fluid::physics); the association is recorded by
/// [`Session::associate`].
#[derive(Debug, Clone)]
pub struct Fluid {
    name: String,
    locations: Locations,
    properties: PropertyStore,
    physics: Vec<PhysicsId>,
}

impl Fluid {
    pub(crate) fn new(name: String, locations: Locations) -> Self {
        Self {
            name,
            locations,
            properties: PropertyStore::new(),
            physics: Vec::new(),
        }
    }

    /// Physics objects attached to this fluid, in association order.
    #[must_use]
    pub fn physics(&self) -> &[PhysicsId] {
        &self.physics
    }

    /// Records `physics`; returns `false` if it was already attached.
    pub(crate) fn attach(&mut self, physics: PhysicsId) -> bool {
        if self.physics.contains(&physics) {
            return false;
        }
        self.physics.push(physics);
        true
    }

    pub(crate) fn relocate(&mut self, locations: Locations) {
        self.locations = locations;
    }
}

impl PropertyObject for Fluid {
    fn name(&self) -> &str {
        &self.name
    }

    fn properties(&self) -> &PropertyStore {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut PropertyStore {
        &mut self.properties
    }

    fn locations(&self) -> &Locations {
        &self.locations
    }
}

/// A named fluid with standard state constants and property models.
///
/// ```
/// use pnm_models::{
///     network::Network,
///     session::{PropertyObject, Session, fluid::{FluidPreset, Water}},
/// };
///
/// let net = Network::new("pair", vec![[0.0; 3], [1.0e-5, 0.0, 0.0]], vec![[0, 1]]).unwrap();
/// let mut session = Session::with_standard_catalog(net);
/// let water = session.add_fluid_preset::<Water>().unwrap();
/// session.regenerate(water).unwrap();
///
/// let mu = session.values(water, "pore.viscosity").unwrap();
/// assert!((mu[0] - 8.9e-4).abs() < 1.0e-6);
/// assert_eq!(session.fluid(water).unwrap().name(), Water::NAME);
/// ```
pub trait FluidPreset {
    /// Name given to fluids created from this preset.
    const NAME: &'static str;

    /// Sets constants and binds models on a freshly created fluid.
    ///
    /// # Errors
    ///
    /// Fails if a constant cannot be stored on `fluid`.
    fn configure(session: &mut Session, fluid: FluidId) -> Result<(), SessionError>;
}
