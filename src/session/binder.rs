use tracing::{debug, info, warn};

use crate::{
    catalog::{BoundProperty, ModelError, ModelParams},
    property::{Element, PropertyError},
};

use super::{BindError, ObjectId, RegenerateError, Session, SessionError};

/// Result of [`Session::bind`].
#[derive(Debug, Clone, PartialEq)]
pub enum BindOutcome {
    /// A new property was appended to the registration list.
    Bound,
    /// An existing binding was replaced in place.
    Rebound,
    /// The binding could not be made; the owner is unchanged.
    Skipped(BindError),
}

impl BindOutcome {
    /// Whether a producer is now attached.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        !matches!(self, BindOutcome::Skipped(_))
    }
}

impl Session {
    /// Binds the catalog model `namespace.model` to `property` on `owner`.
    ///
    /// The resolved model and `params` are stored as the property's
    /// producer and the name joins the owner's registration list. The rest
    /// of the evaluation context (owner, network, first fluid) is supplied
    /// whenever the producer runs.
    ///
    /// A binding that cannot be made is not an error: one warning is
    /// logged, the owner is left unchanged, and [`BindOutcome::Skipped`]
    /// carries the reason.
    pub fn bind(
        &mut self,
        owner: impl Into<ObjectId>,
        property: &str,
        namespace: &str,
        model: &str,
        params: ModelParams,
    ) -> BindOutcome {
        let owner = owner.into();
        match self.try_bind(owner, property, namespace, model, params) {
            Ok(replaced) => {
                info!(owner = %owner, property, namespace, model, "bound property model");
                if replaced {
                    BindOutcome::Rebound
                } else {
                    BindOutcome::Bound
                }
            }
            Err(error) => {
                warn!(
                    owner = %owner,
                    property,
                    namespace,
                    model,
                    %error,
                    "could not bind property model, skipping"
                );
                BindOutcome::Skipped(error)
            }
        }
    }

    fn try_bind(
        &mut self,
        owner: ObjectId,
        property: &str,
        namespace: &str,
        model: &str,
        params: ModelParams,
    ) -> Result<bool, BindError> {
        Element::of(property)?;
        let resolved = self.catalog.lookup(namespace, model)?.clone();
        let object = self.object_mut(owner)?;
        Ok(object
            .properties_mut()
            .set_producer(property, BoundProperty::new(resolved, params)))
    }

    /// Runs the producer bound to `property` on `owner` without storing the
    /// result.
    ///
    /// # Errors
    ///
    /// Returns [`RegenerateError::Model`] if the model fails or returns the
    /// wrong number of values, and [`RegenerateError::Session`] if the owner
    /// does not exist or nothing is bound under `property`.
    pub fn produce(
        &self,
        owner: impl Into<ObjectId>,
        property: &str,
    ) -> Result<Vec<f64>, RegenerateError> {
        let owner = owner.into();
        let object = self.object(owner)?;
        let bound = object.properties().producer(property).ok_or_else(|| {
            SessionError::from(PropertyError::NotBound {
                name: property.to_owned(),
            })
        })?;

        let ctx = self.context(owner, property, bound.params())?;
        let fail = |source: ModelError| RegenerateError::Model {
            owner: object.name().to_owned(),
            property: property.to_owned(),
            source,
        };

        let values = bound.model().evaluate(&ctx).map_err(fail)?;
        if values.len() != ctx.len() {
            return Err(fail(ModelError::OutputLength {
                expected: ctx.len(),
                actual: values.len(),
            }));
        }
        Ok(values)
    }

    /// Recomputes every bound property of `owner` in registration order.
    ///
    /// Each result is stored before the next producer runs, so a producer
    /// sees the values of those registered before it. The registration list
    /// itself is not changed.
    ///
    /// # Errors
    ///
    /// Stops at the first failing producer; see [`Session::produce`].
    pub fn regenerate(&mut self, owner: impl Into<ObjectId>) -> Result<(), RegenerateError> {
        let owner = owner.into();
        let registered: Vec<String> = self
            .object(owner)?
            .properties()
            .registered()
            .map(str::to_owned)
            .collect();

        for property in &registered {
            let values = self.produce(owner, property)?;
            debug!(owner = %owner, property = %property, len = values.len(), "regenerated property");
            self.object_mut(owner)?
                .properties_mut()
                .insert(property.as_str(), values);
        }

        info!(owner = %owner, properties = registered.len(), "regenerated");
        Ok(())
    }

    /// Regenerates fluids, then geometries, then physics, each in creation
    /// order.
    ///
    /// # Errors
    ///
    /// Stops at the first owner that fails to regenerate.
    pub fn regenerate_all(&mut self) -> Result<(), RegenerateError> {
        let owners: Vec<ObjectId> = self
            .fluid_ids()
            .map(ObjectId::from)
            .chain(self.geometry_ids().map(ObjectId::from))
            .chain(self.physics_ids().map(ObjectId::from))
            .collect();
        for owner in owners {
            self.regenerate(owner)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        catalog::{ErrorKind, LookupError},
        network::{Locations, Network},
        session::{GeometryId, PropertyObject},
    };

    use super::*;

    fn session() -> (Session, GeometryId) {
        let net = Network::new(
            "line",
            vec![[0.0; 3], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]],
            vec![[0, 1], [1, 2]],
        )
        .unwrap();
        let all = net.locations().clone();
        let mut session = Session::with_standard_catalog(net);
        let geom = session.add_geometry("all", all).unwrap();
        (session, geom)
    }

    fn constant(value: f64) -> ModelParams {
        ModelParams::new().with("value", value)
    }

    #[test]
    fn bind_then_regenerate() {
        let (mut session, geom) = session();
        let outcome = session.bind(geom, "pore.seed", "pore_misc", "constant", constant(0.5));
        assert_eq!(outcome, BindOutcome::Bound);
        assert!(session.values(geom, "pore.seed").is_err());

        session.regenerate(geom).unwrap();
        assert_eq!(session.values(geom, "pore.seed").unwrap(), &[0.5; 3]);
    }

    #[test]
    fn rebinding_replaces_in_place() {
        let (mut session, geom) = session();
        session.bind(geom, "pore.seed", "pore_misc", "constant", constant(0.5));
        session.bind(geom, "pore.diameter", "pore_misc", "constant", constant(1.0));
        let outcome = session.bind(geom, "pore.seed", "pore_misc", "constant", constant(0.7));
        assert_eq!(outcome, BindOutcome::Rebound);

        let store = session.geometry(geom).unwrap().properties();
        let names: Vec<_> = store.registered().collect();
        assert_eq!(names, ["pore.seed", "pore.diameter"]);
        assert_eq!(session.produce(geom, "pore.seed").unwrap(), vec![0.7; 3]);
    }

    #[test]
    fn unresolved_bindings_are_skipped() {
        let (mut session, geom) = session();
        let outcome = session.bind(geom, "pore.seed", "pore_misc", "nonexistent", constant(0.5));
        assert_eq!(
            outcome,
            BindOutcome::Skipped(BindError::Lookup(LookupError::UnknownModel {
                namespace: "pore_misc".into(),
                model: "nonexistent".into(),
            }))
        );

        let outcome = session.bind(geom, "seed", "pore_misc", "constant", constant(0.5));
        assert!(matches!(outcome, BindOutcome::Skipped(BindError::Property(_))));

        let store = session.geometry(geom).unwrap().properties();
        assert_eq!(store.registered().count(), 0);
    }

    #[test]
    fn later_producers_see_earlier_results() {
        let (mut session, geom) = session();
        session.bind(geom, "pore.diameter", "pore_misc", "constant", constant(2.0));
        session.bind(
            geom,
            "throat.diameter",
            "throat_misc",
            "neighbor",
            ModelParams::new().with("pore_prop", "pore.diameter").with("mode", "min"),
        );
        session.regenerate(geom).unwrap();
        assert_eq!(session.values(geom, "throat.diameter").unwrap(), &[2.0, 2.0]);
    }

    #[test]
    fn producer_failures_propagate() {
        let (mut session, geom) = session();
        session.bind(geom, "throat.length", "throat_length", "straight", ModelParams::new());
        let err = session.regenerate(geom).unwrap_err();

        let source = err.model_error().unwrap();
        assert_eq!(source.kind(), ErrorKind::Precondition);
        assert!(matches!(source, ModelError::MissingProperty { name } if name == "pore.diameter"));
    }

    #[test]
    fn output_length_is_checked() {
        let (mut session, geom) = session();
        session
            .catalog_mut()
            .register("custom", "short", |_ctx| Ok(vec![1.0]));
        session.bind(geom, "pore.short", "custom", "short", ModelParams::new());

        let err = session.produce(geom, "pore.short").unwrap_err();
        assert_eq!(
            err.model_error(),
            Some(&ModelError::OutputLength {
                expected: 3,
                actual: 1
            })
        );
    }

    #[test]
    fn produce_requires_a_binding() {
        let (session, geom) = session();
        assert!(matches!(
            session.produce(geom, "pore.seed"),
            Err(RegenerateError::Session(SessionError::Property(
                PropertyError::NotBound { .. }
            )))
        ));
    }

    #[test]
    fn regenerate_all_runs_fluids_first() {
        let (mut session, geom) = session();
        let water = session.add_fluid("water");
        session.bind(water, "pore.temperature", "fluid_misc", "constant", constant(300.0));
        session.bind(geom, "pore.diameter", "pore_misc", "constant", constant(1.0));

        session.regenerate_all().unwrap();
        assert_eq!(session.values(water, "pore.temperature").unwrap(), &[300.0; 3]);
        assert_eq!(session.values(geom, "pore.diameter").unwrap(), &[1.0; 3]);
    }

    #[test]
    fn partial_geometries_size_their_output() {
        let (mut session, _) = session();
        let half = session
            .add_geometry("half", Locations::new(vec![2], vec![1]))
            .unwrap();
        session.bind(half, "pore.seed", "pore_misc", "constant", constant(0.1));
        session.bind(half, "throat.seed", "throat_misc", "constant", constant(0.2));
        session.regenerate(half).unwrap();
        assert_eq!(session.values(half, "pore.seed").unwrap(), &[0.1]);
        assert_eq!(session.values(half, "throat.seed").unwrap(), &[0.2]);
    }
}
