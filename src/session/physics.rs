use crate::{network::Locations, property::PropertyStore};

use super::{FluidId, PropertyObject};

/// Pore-scale transport properties of one or more fluids.
///
/// A physics object covers the whole network. Its models read geometry
/// data network-wide and fluid data from its first associated fluid.
#[derive(Debug, Clone)]
pub struct Physics {
    name: String,
    locations: Locations,
    properties: PropertyStore,
    fluids: Vec<FluidId>,
}

impl Physics {
    pub(crate) fn new(name: String, locations: Locations) -> Self {
        Self {
            name,
            locations,
            properties: PropertyStore::new(),
            fluids: Vec::new(),
        }
    }

    /// Records `fluid`; returns `false` if it was already associated.
    pub(crate) fn attach(&mut self, fluid: FluidId) -> bool {
        if self.fluids.contains(&fluid) {
            return false;
        }
        self.fluids.push(fluid);
        true
    }

    pub(crate) fn relocate(&mut self, locations: Locations) {
        self.locations = locations;
    }
}

impl PropertyObject for Physics {
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

    fn fluids(&self) -> &[FluidId] {
        &self.fluids
    }
}
