use crate::{
    network::{Locations, Network},
    property::{Element, PropertyStore},
    session::{Fluid, Geometry, PropertyObject},
};

use super::{ModelError, ModelParams};

/// Everything a model function can read while computing a property.
///
/// The context is fixed by the owner a model is bound to: the owner's own
/// properties and locations, the network, every geometry on the network
/// (for assembling network-wide arrays), the owner's first fluid, and the
/// parameters supplied at bind time.
///
/// Model output is indexed like the owner's arrays for the target
/// [`Element`]: position `i` belongs to `locations().of(element())[i]`.
pub struct ModelContext<'a> {
    owner: &'a dyn PropertyObject,
    element: Element,
    network: &'a Network,
    geometries: &'a [Geometry],
    fluid: Option<&'a Fluid>,
    params: &'a ModelParams,
}

impl<'a> ModelContext<'a> {
    pub(crate) fn new(
        owner: &'a dyn PropertyObject,
        element: Element,
        network: &'a Network,
        geometries: &'a [Geometry],
        fluid: Option<&'a Fluid>,
        params: &'a ModelParams,
    ) -> Self {
        Self {
            owner,
            element,
            network,
            geometries,
            fluid,
            params,
        }
    }

    /// Name of the object the model is bound to.
    #[must_use]
    pub fn owner_name(&self) -> &'a str {
        self.owner.name()
    }

    /// The owner's own property store.
    #[must_use]
    pub fn owner(&self) -> &'a PropertyStore {
        self.owner.properties()
    }

    /// Global indices of the elements the owner covers.
    #[must_use]
    pub fn locations(&self) -> &'a Locations {
        self.owner.locations()
    }

    /// The element the computed property is indexed by.
    #[must_use]
    pub fn element(&self) -> Element {
        self.element
    }

    /// Number of values the model must return.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations().count(self.element)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of pores the owner covers.
    #[must_use]
    pub fn pore_count(&self) -> usize {
        self.locations().count(Element::Pore)
    }

    /// Number of throats the owner covers.
    #[must_use]
    pub fn throat_count(&self) -> usize {
        self.locations().count(Element::Throat)
    }

    #[must_use]
    pub fn network(&self) -> &'a Network {
        self.network
    }

    #[must_use]
    pub fn params(&self) -> &'a ModelParams {
        self.params
    }

    /// The owner's first associated fluid.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MissingFluid`] if the owner has no fluid.
    pub fn fluid(&self) -> Result<&'a Fluid, ModelError> {
        self.fluid.ok_or(ModelError::MissingFluid)
    }

    /// One of the owner's own arrays, indexed like the owner.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MissingProperty`] if the owner has no values
    /// under `name`.
    pub fn owner_values(&self, name: &str) -> Result<&'a [f64], ModelError> {
        self.owner()
            .get(name)
            .ok_or_else(|| ModelError::missing(name))
    }

    /// A network-wide pore array, indexed by global pore.
    ///
    /// See [`ModelContext::throat_data`] for how the array is assembled.
    ///
    /// # Errors
    ///
    /// Same as [`ModelContext::throat_data`].
    pub fn pore_data(&self, name: &str) -> Result<NetworkArray, ModelError> {
        self.network_data(Element::Pore, name)
    }

    /// A network-wide throat array, indexed by global throat.
    ///
    /// Data stored on the network itself wins. Otherwise the array is
    /// interleaved from every geometry that defines `name`, leaving gaps
    /// where no geometry does; if no geometry defines it, an owner covering
    /// the whole network may supply it.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MissingProperty`] if nothing defines `name`.
    pub fn throat_data(&self, name: &str) -> Result<NetworkArray, ModelError> {
        self.network_data(Element::Throat, name)
    }

    fn network_data(&self, element: Element, name: &str) -> Result<NetworkArray, ModelError> {
        let count = self.network.count(element);
        if let Some(values) = self.network.properties().get(name) {
            return Ok(NetworkArray::complete(name, values.to_vec()));
        }

        let mut array = NetworkArray {
            name: name.to_owned(),
            values: vec![f64::NAN; count],
            covered: vec![false; count],
        };
        let mut found = false;
        for geometry in self.geometries {
            let Some(values) = geometry.properties().get(name) else {
                continue;
            };
            found = true;
            for (&index, &value) in geometry.locations().of(element).iter().zip(values) {
                array.values[index] = value;
                array.covered[index] = true;
            }
        }
        if found {
            return Ok(array);
        }

        match self.owner().get(name) {
            Some(values) if self.locations().count(element) == count => {
                Ok(NetworkArray::complete(name, values.to_vec()))
            }
            _ => Err(ModelError::missing(name)),
        }
    }

    /// A pore array from the owner's first fluid, indexed by global pore.
    ///
    /// # Errors
    ///
    /// Fails if there is no fluid or the fluid lacks `name`.
    pub fn fluid_pore_data(&self, name: &str) -> Result<&'a [f64], ModelError> {
        self.fluid()?
            .properties()
            .get(name)
            .ok_or_else(|| ModelError::missing(name))
    }

    /// A fluid pore array interpolated onto every throat as the mean of the
    /// two connected pores, indexed by global throat.
    ///
    /// # Errors
    ///
    /// Same as [`ModelContext::fluid_pore_data`].
    pub fn fluid_throat_data(&self, name: &str) -> Result<Vec<f64>, ModelError> {
        let pores = self.fluid_pore_data(name)?;
        Ok(self
            .network
            .conns()
            .iter()
            .map(|&[a, b]| 0.5 * (pores[a] + pores[b]))
            .collect())
    }

    /// The owner's throats paired with the global pores they connect.
    pub fn throat_conns(&self) -> impl Iterator<Item = (usize, [usize; 2])> + 'a {
        let conns = self.network.conns();
        self.locations()
            .throats()
            .iter()
            .map(move |&throat| (throat, conns[throat]))
    }
}

/// A network-wide array that may have gaps.
///
/// Geometries each cover part of the network, so an array interleaved from
/// them is undefined wherever no geometry holds the property. Reading such
/// an element is an error rather than a silent `NaN`.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkArray {
    name: String,
    values: Vec<f64>,
    covered: Vec<bool>,
}

impl NetworkArray {
    fn complete(name: &str, values: Vec<f64>) -> Self {
        Self {
            name: name.to_owned(),
            covered: vec![true; values.len()],
            values,
        }
    }

    /// The value at a global index.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::IncompleteProperty`] if no object defines the
    /// property at `index`.
    pub fn get(&self, index: usize) -> Result<f64, ModelError> {
        match self.covered.get(index) {
            Some(true) => Ok(self.values[index]),
            _ => Err(ModelError::IncompleteProperty {
                name: self.name.clone(),
                index,
            }),
        }
    }

    /// Whether every element has a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.covered.iter().all(|&set| set)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
