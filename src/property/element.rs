use std::fmt;

use super::PropertyError;

/// The network element a property array is indexed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    Pore,
    Throat,
}

impl Element {
    /// Returns the element named by a property's prefix.
    ///
    /// ```
    /// use pnm_models::property::Element;
    ///
    /// assert_eq!(Element::of("pore.diameter").unwrap(), Element::Pore);
    /// assert_eq!(Element::of("throat.length").unwrap(), Element::Throat);
    /// assert!(Element::of("diameter").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidName`] if the name lacks a `pore.` or
    /// `throat.` prefix or has nothing after it.
    pub fn of(name: &str) -> Result<Self, PropertyError> {
        let element = if let Some(rest) = name.strip_prefix("pore.") {
            (!rest.is_empty()).then_some(Element::Pore)
        } else if let Some(rest) = name.strip_prefix("throat.") {
            (!rest.is_empty()).then_some(Element::Throat)
        } else {
            None
        };

        element.ok_or_else(|| PropertyError::InvalidName {
            name: name.to_owned(),
        })
    }

    /// The property-name prefix for this element, without the dot.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Element::Pore => "pore",
            Element::Throat => "throat",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}
