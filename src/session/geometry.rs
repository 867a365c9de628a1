use crate::{network::Locations, property::PropertyStore};

use super::PropertyObject;

/// Pore and throat sizes for a subset of the network.
///
/// Geometries are created through
/// [`Session::add_geometry`](super::Session::add_geometry), which checks
/// their locations against the network.
#[derive(Debug, Clone)]
pub struct Geometry {
    name: String,
    locations: Locations,
    properties: PropertyStore,
}

impl Geometry {
    pub(crate) fn new(name: String, locations: Locations) -> Self {
        Self {
            name,
            locations,
            properties: PropertyStore::new(),
        }
    }
}

impl PropertyObject for Geometry {
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
