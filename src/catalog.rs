//! Namespaced model catalog and bound producers.
//!
//! A model function computes one property array from a [`ModelContext`].
//! The [`ModelCatalog`] files model functions under a two-level key,
//! `namespace → model name`, mirroring how the standard models are grouped
//! (`"throat_length" → "straight"`, `"pore_misc" → "constant"`, ...).
//!
//! Binding a model pairs the resolved [`Model`] with the [`ModelParams`]
//! fixed at bind time into a [`BoundProperty`]. The rest of the context
//! (owner, network, first fluid) comes from the owner it is bound to, so a
//! bound property can be re-run at any time without further arguments.

mod context;
mod error;
mod params;

pub use context::{ModelContext, NetworkArray};
pub use error::{ErrorKind, LookupError, ModelError};
pub use params::{ModelParams, ParamValue};

use std::{collections::BTreeMap, fmt, sync::Arc};

/// Signature shared by every model function.
pub type ModelFn = dyn Fn(&ModelContext<'_>) -> Result<Vec<f64>, ModelError> + Send + Sync;

/// A model function together with the catalog key it is filed under.
#[derive(Clone)]
pub struct Model {
    namespace: String,
    name: String,
    function: Arc<ModelFn>,
}

impl Model {
    /// Wraps a function as a model filed under `namespace` and `name`.
    pub fn new<F>(namespace: impl Into<String>, name: impl Into<String>, function: F) -> Self
    where
        F: Fn(&ModelContext<'_>) -> Result<Vec<f64>, ModelError> + Send + Sync + 'static,
    {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            function: Arc::new(function),
        }
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the model against a context.
    ///
    /// # Errors
    ///
    /// Returns whatever [`ModelError`] the model function raises.
    pub fn evaluate(&self, ctx: &ModelContext<'_>) -> Result<Vec<f64>, ModelError> {
        (self.function)(ctx)
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("namespace", &self.namespace)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Two-level registry of model functions: `namespace → name → model`.
///
/// ```
/// use pnm_models::catalog::{LookupError, ModelCatalog};
///
/// let mut catalog = ModelCatalog::new();
/// catalog.register("pore_misc", "zero", |ctx| Ok(vec![0.0; ctx.len()]));
///
/// assert!(catalog.lookup("pore_misc", "zero").is_ok());
/// assert!(matches!(
///     catalog.lookup("pore_misc", "one"),
///     Err(LookupError::UnknownModel { .. })
/// ));
/// assert!(matches!(
///     catalog.lookup("throat_misc", "zero"),
///     Err(LookupError::UnknownNamespace { .. })
/// ));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ModelCatalog {
    namespaces: BTreeMap<String, BTreeMap<String, Model>>,
}

impl ModelCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Files a function under `namespace` and `name`, returning any model it
    /// replaces.
    pub fn register<F>(
        &mut self,
        namespace: impl Into<String>,
        name: impl Into<String>,
        function: F,
    ) -> Option<Model>
    where
        F: Fn(&ModelContext<'_>) -> Result<Vec<f64>, ModelError> + Send + Sync + 'static,
    {
        self.insert(Model::new(namespace, name, function))
    }

    /// Files an existing model under its own key, returning any model it
    /// replaces.
    pub fn insert(&mut self, model: Model) -> Option<Model> {
        self.namespaces
            .entry(model.namespace.clone())
            .or_default()
            .insert(model.name.clone(), model)
    }

    /// Resolves a model by namespace and name.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::UnknownNamespace`] if the namespace does not
    /// exist, or [`LookupError::UnknownModel`] if it has no such model.
    pub fn lookup(&self, namespace: &str, name: &str) -> Result<&Model, LookupError> {
        let models = self
            .namespaces
            .get(namespace)
            .ok_or_else(|| LookupError::UnknownNamespace {
                namespace: namespace.to_owned(),
            })?;

        models.get(name).ok_or_else(|| LookupError::UnknownModel {
            namespace: namespace.to_owned(),
            model: name.to_owned(),
        })
    }

    /// Namespace names in lexical order.
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.namespaces.keys().map(String::as_str)
    }

    /// Model names within a namespace, in lexical order.
    pub fn models(&self, namespace: &str) -> impl Iterator<Item = &str> {
        self.namespaces
            .get(namespace)
            .into_iter()
            .flat_map(|models| models.keys().map(String::as_str))
    }

    /// Merges every model from `other` into this catalog.
    pub fn extend(&mut self, other: ModelCatalog) {
        for model in other.namespaces.into_values().flat_map(BTreeMap::into_values) {
            self.insert(model);
        }
    }
}

/// A resolved model with the parameters fixed when it was bound.
#[derive(Debug, Clone)]
pub struct BoundProperty {
    model: Model,
    params: ModelParams,
}

impl BoundProperty {
    #[must_use]
    pub fn new(model: Model, params: ModelParams) -> Self {
        Self { model, params }
    }

    #[must_use]
    pub fn model(&self) -> &Model {
        &self.model
    }

    #[must_use]
    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        self.model.namespace()
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        self.model.name()
    }
}
