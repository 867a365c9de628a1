use tracing::debug;

use crate::property::Element;

use super::{Locations, Network, NetworkError};

impl Network {
    /// Grafts a layer of boundary pores onto a labeled face.
    ///
    /// Every pore carrying `face_label` is copied, shifted by `offset`, and
    /// joined to its source by a new throat. The new pores and throats are
    /// labeled `pore.<boundary_label>` and `throat.<boundary_label>`.
    ///
    /// Existing pore arrays in the network store are extended with the
    /// source pore's value; existing throat arrays are padded with `NaN`
    /// until they are reassigned.
    ///
    /// Returns the locations of the new elements, ready to be handed to a
    /// boundary geometry.
    ///
    /// ```
    /// use pnm_models::network::Network;
    ///
    /// let mut net = Network::new("pair", vec![[0.0; 3], [1.0, 0.0, 0.0]], vec![[0, 1]]).unwrap();
    /// net.set_label("pore.left", vec![true, false]).unwrap();
    /// let added = net.add_boundary_pores("pore.left", [-0.5, 0.0, 0.0], "left_boundary").unwrap();
    /// assert_eq!(added.pores(), &[2]);
    /// assert_eq!(net.conns()[1], [0, 2]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::NotAPoreLabel`] if `face_label` is not a
    /// `pore.` label, [`NetworkError::UnknownLabel`] if it does not exist, or
    /// [`NetworkError::LabelExists`] if either boundary label is taken.
    pub fn add_boundary_pores(
        &mut self,
        face_label: &str,
        offset: [f64; 3],
        boundary_label: &str,
    ) -> Result<Locations, NetworkError> {
        if Element::of(face_label)? != Element::Pore {
            return Err(NetworkError::NotAPoreLabel {
                name: face_label.to_owned(),
            });
        }
        let sources = self.labeled(face_label)?;
        let pore_label = format!("pore.{boundary_label}");
        let throat_label = format!("throat.{boundary_label}");
        for name in [&pore_label, &throat_label] {
            if self.labels.contains_key(name.as_str()) {
                return Err(NetworkError::LabelExists { name: name.clone() });
            }
        }

        let first_pore = self.pore_count();
        let first_throat = self.throat_count();

        for (k, &source) in sources.iter().enumerate() {
            let [x, y, z] = self.coords[source];
            self.coords.push([x + offset[0], y + offset[1], z + offset[2]]);
            self.conns.push([source, first_pore + k]);
        }

        let added = sources.len();
        for (name, mask) in &mut self.labels {
            let fill = name == super::ALL_PORES || name == super::ALL_THROATS;
            mask.extend(std::iter::repeat_n(fill, added));
        }
        self.labels.insert(
            pore_label,
            (0..self.pore_count()).map(|p| p >= first_pore).collect(),
        );
        self.labels.insert(
            throat_label,
            (0..self.throat_count()).map(|t| t >= first_throat).collect(),
        );

        self.properties.graft(&sources, added);

        self.locations = Locations::all(self.pore_count(), self.throat_count());
        debug!(
            network = %self.name,
            face = face_label,
            boundary = boundary_label,
            added,
            "added boundary pores"
        );

        Ok(Locations::new(
            (first_pore..self.pore_count()).collect(),
            (first_throat..self.throat_count()).collect(),
        ))
    }
}
