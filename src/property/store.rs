use std::collections::BTreeMap;

use crate::catalog::BoundProperty;

use super::{Element, PropertyError};

/// Materialized property arrays and the producers bound to an object.
///
/// Values and producers are independent: a name may have values only
/// (directly assigned), a producer only (bound but not yet regenerated),
/// or both.
#[derive(Debug, Clone, Default)]
pub struct PropertyStore {
    values: BTreeMap<String, Vec<f64>>,
    producers: Vec<(String, BoundProperty)>,
}

impl PropertyStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the values stored under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.values.get(name).map(Vec::as_slice)
    }

    /// Returns the values stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::NotFound`] if nothing is stored under `name`.
    pub fn values(&self, name: &str) -> Result<&[f64], PropertyError> {
        self.get(name).ok_or_else(|| PropertyError::NotFound {
            name: name.to_owned(),
        })
    }

    /// Stores `values` under `name`, returning the previous array.
    ///
    /// The store does not know the owner's element counts; callers validate
    /// lengths before inserting.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<f64>) -> Option<Vec<f64>> {
        self.values.insert(name.into(), values)
    }

    /// Whether values are stored under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Names of all stored arrays, in lexical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Returns the producer bound under `name`, if any.
    #[must_use]
    pub fn producer(&self, name: &str) -> Option<&BoundProperty> {
        self.producers
            .iter()
            .find(|(bound, _)| bound == name)
            .map(|(_, producer)| producer)
    }

    /// Binds `producer` under `name`.
    ///
    /// A new name is appended to the registration list. Rebinding an existing
    /// name swaps the producer in place and keeps its position. Returns `true`
    /// when an existing binding was replaced.
    pub fn set_producer(&mut self, name: impl Into<String>, producer: BoundProperty) -> bool {
        let name = name.into();
        if let Some((_, slot)) = self.producers.iter_mut().find(|(bound, _)| *bound == name) {
            *slot = producer;
            return true;
        }
        self.producers.push((name, producer));
        false
    }

    /// Whether a producer is bound under `name`.
    #[must_use]
    pub fn is_bound(&self, name: &str) -> bool {
        self.producer(name).is_some()
    }

    /// Bound property names in registration order.
    pub fn registered(&self) -> impl Iterator<Item = &str> {
        self.producers.iter().map(|(name, _)| name.as_str())
    }

    /// Grows every stored array after elements were appended to a network.
    ///
    /// Pore arrays gain one value per entry of `sources`, copied from that
    /// pore. Throat arrays gain `throats` entries of `NaN`.
    pub(crate) fn graft(&mut self, sources: &[usize], throats: usize) {
        for (name, values) in &mut self.values {
            match Element::of(name) {
                Ok(Element::Pore) => {
                    let copied: Vec<f64> = sources.iter().map(|&p| values[p]).collect();
                    values.extend(copied);
                }
                _ => values.extend(std::iter::repeat_n(f64::NAN, throats)),
            }
        }
    }
}
