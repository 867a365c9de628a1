//! Pore-network topology.
//!
//! A [`Network`] is a graph of pores (nodes with 3-D coordinates) joined by
//! throats (edges between two distinct pores). Besides topology it carries
//! boolean labels such as `"pore.left"` and a [`PropertyStore`] for
//! network-wide data.
//!
//! Networks are built directly from coordinates and connections with
//! [`Network::new`], or from a voxel image with [`Template::generate`].
//! Boundary pores can be grafted onto a labeled face with
//! [`Network::add_boundary_pores`].

mod boundary;
mod error;
mod locations;
mod template;

pub use error::NetworkError;
pub use locations::Locations;
pub use template::{Template, TemplateConfig, VoxelImage};

use std::collections::BTreeMap;

use tracing::debug;

use crate::property::{Element, PropertyStore};

/// Label every pore carries.
pub const ALL_PORES: &str = "pore.all";

/// Label every throat carries.
pub const ALL_THROATS: &str = "throat.all";

/// Pore coordinates, throat connections, labels, and network-wide data.
#[derive(Debug, Clone)]
pub struct Network {
    name: String,
    coords: Vec<[f64; 3]>,
    conns: Vec<[usize; 2]>,
    labels: BTreeMap<String, Vec<bool>>,
    properties: PropertyStore,
    locations: Locations,
}

impl Network {
    /// Creates a network from pore coordinates and throat connections.
    ///
    /// The `pore.all` and `throat.all` labels are added automatically.
    ///
    /// ```
    /// use pnm_models::network::Network;
    ///
    /// let net = Network::new("pair", vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]], vec![[0, 1]]).unwrap();
    /// assert_eq!(net.pore_count(), 2);
    /// assert_eq!(net.throat_count(), 1);
    /// assert!(Network::new("bad", vec![[0.0; 3]], vec![[0, 0]]).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::InvalidThroat`] if a throat references a pore
    /// that does not exist or connects a pore to itself.
    pub fn new(
        name: impl Into<String>,
        coords: Vec<[f64; 3]>,
        conns: Vec<[usize; 2]>,
    ) -> Result<Self, NetworkError> {
        let pore_count = coords.len();
        for (throat, &pores) in conns.iter().enumerate() {
            let [a, b] = pores;
            if a >= pore_count || b >= pore_count || a == b {
                return Err(NetworkError::InvalidThroat {
                    throat,
                    pores,
                    pore_count,
                });
            }
        }

        let name = name.into();
        let throat_count = conns.len();
        debug!(network = %name, pores = pore_count, throats = throat_count, "constructed network");

        let mut labels = BTreeMap::new();
        labels.insert(ALL_PORES.to_owned(), vec![true; pore_count]);
        labels.insert(ALL_THROATS.to_owned(), vec![true; throat_count]);

        Ok(Self {
            name,
            coords,
            conns,
            labels,
            properties: PropertyStore::new(),
            locations: Locations::all(pore_count, throat_count),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn pore_count(&self) -> usize {
        self.coords.len()
    }

    #[must_use]
    pub fn throat_count(&self) -> usize {
        self.conns.len()
    }

    /// Number of elements of the given kind.
    #[must_use]
    pub fn count(&self, element: Element) -> usize {
        match element {
            Element::Pore => self.pore_count(),
            Element::Throat => self.throat_count(),
        }
    }

    /// Pore center coordinates, indexed by pore.
    #[must_use]
    pub fn coords(&self) -> &[[f64; 3]] {
        &self.coords
    }

    /// The two pores each throat connects, indexed by throat.
    #[must_use]
    pub fn conns(&self) -> &[[usize; 2]] {
        &self.conns
    }

    /// Euclidean distance between the centers of two pores.
    #[must_use]
    pub fn center_distance(&self, a: usize, b: usize) -> f64 {
        let [ax, ay, az] = self.coords[a];
        let [bx, by, bz] = self.coords[b];
        ((ax - bx).powi(2) + (ay - by).powi(2) + (az - bz).powi(2)).sqrt()
    }

    /// Sets a boolean label such as `"pore.inlet"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the name lacks a `pore.`/`throat.` prefix or the
    /// mask length does not match the element count.
    pub fn set_label(&mut self, name: impl Into<String>, mask: Vec<bool>) -> Result<(), NetworkError> {
        let name = name.into();
        let expected = self.count(Element::of(&name)?);
        if mask.len() != expected {
            return Err(crate::property::PropertyError::LengthMismatch {
                name,
                expected,
                actual: mask.len(),
            }
            .into());
        }
        self.labels.insert(name, mask);
        Ok(())
    }

    /// Returns the mask for a label.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::UnknownLabel`] if the label does not exist.
    pub fn label(&self, name: &str) -> Result<&[bool], NetworkError> {
        self.labels
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| NetworkError::UnknownLabel {
                name: name.to_owned(),
            })
    }

    /// Label names in lexical order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.keys().map(String::as_str)
    }

    /// Indices of the elements carrying a label.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::UnknownLabel`] if the label does not exist.
    pub fn labeled(&self, name: &str) -> Result<Vec<usize>, NetworkError> {
        Ok(self
            .label(name)?
            .iter()
            .enumerate()
            .filter_map(|(index, &set)| set.then_some(index))
            .collect())
    }

    /// Network-wide property data.
    #[must_use]
    pub fn properties(&self) -> &PropertyStore {
        &self.properties
    }

    pub(crate) fn properties_mut(&mut self) -> &mut PropertyStore {
        &mut self.properties
    }

    /// Every pore and throat in the network.
    #[must_use]
    pub fn locations(&self) -> &Locations {
        &self.locations
    }

    /// Checks that every index in `locations` exists in this network.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::OutOfRange`] for the first missing element.
    pub fn check_locations(&self, locations: &Locations) -> Result<(), NetworkError> {
        for element in [Element::Pore, Element::Throat] {
            let count = self.count(element);
            if let Some(index) = locations.max(element).filter(|&index| index >= count) {
                return Err(NetworkError::OutOfRange {
                    element,
                    index,
                    count,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize) -> Network {
        let coords = (0..n).map(|i| [i as f64, 0.0, 0.0]).collect();
        let conns = (1..n).map(|i| [i - 1, i]).collect();
        Network::new("line", coords, conns).unwrap()
    }

    #[test]
    fn rejects_dangling_throats() {
        let err = Network::new("bad", vec![[0.0; 3]; 2], vec![[0, 2]]).unwrap_err();
        assert!(matches!(err, NetworkError::InvalidThroat { throat: 0, .. }));
    }

    #[test]
    fn all_labels_cover_everything() {
        let net = line(4);
        assert_eq!(net.labeled(ALL_PORES).unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(net.labeled(ALL_THROATS).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn labels_are_length_checked() {
        let mut net = line(3);
        assert!(net.set_label("pore.inlet", vec![true, false, false]).is_ok());
        assert_eq!(net.labeled("pore.inlet").unwrap(), vec![0]);
        assert!(net.set_label("pore.outlet", vec![true]).is_err());
        assert!(net.set_label("outlet", vec![true; 3]).is_err());
        assert!(matches!(
            net.label("pore.missing"),
            Err(NetworkError::UnknownLabel { .. })
        ));
    }

    #[test]
    fn distances() {
        let net = Network::new("pair", vec![[0.0, 0.0, 0.0], [3.0, 4.0, 0.0]], vec![[0, 1]]).unwrap();
        assert!((net.center_distance(0, 1) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn locations_are_range_checked() {
        let net = line(3);
        assert!(net.check_locations(&Locations::new(vec![0, 2], vec![1])).is_ok());
        assert!(matches!(
            net.check_locations(&Locations::new(vec![3], vec![])),
            Err(NetworkError::OutOfRange {
                element: Element::Pore,
                index: 3,
                count: 3
            })
        ));
        assert!(net.check_locations(&Locations::new(vec![], vec![2])).is_err());
    }
}
