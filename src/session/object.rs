use crate::{
    network::{Locations, Network},
    property::PropertyStore,
};

use super::FluidId;

/// An object that owns properties and covers part of a network.
///
/// Array positions in [`properties`](PropertyObject::properties) follow
/// [`locations`](PropertyObject::locations): the `i`-th pore value belongs
/// to global pore `locations().pores()[i]`.
pub trait PropertyObject {
    fn name(&self) -> &str;

    fn properties(&self) -> &PropertyStore;

    fn properties_mut(&mut self) -> &mut PropertyStore;

    fn locations(&self) -> &Locations;

    /// Fluids associated with the object, in association order.
    fn fluids(&self) -> &[FluidId] {
        &[]
    }
}

impl PropertyObject for Network {
    fn name(&self) -> &str {
        Network::name(self)
    }

    fn properties(&self) -> &PropertyStore {
        Network::properties(self)
    }

    fn properties_mut(&mut self) -> &mut PropertyStore {
        Network::properties_mut(self)
    }

    fn locations(&self) -> &Locations {
        Network::locations(self)
    }
}
