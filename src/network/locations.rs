use crate::property::Element;

/// The global pore and throat indices an object covers.
///
/// Indices are kept sorted and unique, so an owner's local array position
/// `i` always corresponds to `pores()[i]` or `throats()[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Locations {
    pores: Vec<usize>,
    throats: Vec<usize>,
}

impl Locations {
    /// Creates a location set, sorting and de-duplicating both lists.
    ///
    /// ```
    /// use pnm_models::network::Locations;
    ///
    /// let locations = Locations::new(vec![3, 1, 3], vec![0]);
    /// assert_eq!(locations.pores(), &[1, 3]);
    /// ```
    #[must_use]
    pub fn new(mut pores: Vec<usize>, mut throats: Vec<usize>) -> Self {
        pores.sort_unstable();
        pores.dedup();
        throats.sort_unstable();
        throats.dedup();
        Self { pores, throats }
    }

    /// Every pore and throat of a network with the given counts.
    #[must_use]
    pub fn all(pore_count: usize, throat_count: usize) -> Self {
        Self {
            pores: (0..pore_count).collect(),
            throats: (0..throat_count).collect(),
        }
    }

    #[must_use]
    pub fn pores(&self) -> &[usize] {
        &self.pores
    }

    #[must_use]
    pub fn throats(&self) -> &[usize] {
        &self.throats
    }

    /// Global indices for the given element.
    #[must_use]
    pub fn of(&self, element: Element) -> &[usize] {
        match element {
            Element::Pore => &self.pores,
            Element::Throat => &self.throats,
        }
    }

    /// Number of covered elements of the given kind.
    #[must_use]
    pub fn count(&self, element: Element) -> usize {
        self.of(element).len()
    }

    /// The largest index of each kind, if any.
    pub(crate) fn max(&self, element: Element) -> Option<usize> {
        self.of(element).last().copied()
    }
}
