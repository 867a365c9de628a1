use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use approx::assert_relative_eq;
use pnm_models::{
    catalog::{ModelContext, ModelError, ModelParams},
    models::{geometry, physics},
    network::{Locations, Network, Template, TemplateConfig, VoxelImage},
    session::{
        BindOutcome, BoundaryConfig, PropertyObject, Session,
        fluid::{FluidPreset, Water},
    },
};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    Layer,
    layer::{Context, SubscriberExt},
};

/// Counts events at one level.
struct LevelCounter {
    level: Level,
    count: Arc<AtomicUsize>,
}

impl<S: Subscriber> Layer<S> for LevelCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == self.level {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn count_warnings<T>(f: impl FnOnce() -> T) -> (T, usize) {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(LevelCounter {
        level: Level::WARN,
        count: Arc::clone(&count),
    });
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, count.load(Ordering::SeqCst))
}

fn pair(distance: f64) -> Network {
    Network::new("pair", vec![[0.0; 3], [distance, 0.0, 0.0]], vec![[0, 1]]).unwrap()
}

#[test]
fn bound_producer_matches_direct_invocation() {
    let mut session = Session::with_standard_catalog(pair(1.0e-4));
    let geom = session.add_geometry("all", Locations::all(2, 1)).unwrap();
    session
        .set_values(geom, "pore.diameter", vec![2.0e-5, 6.0e-5])
        .unwrap();

    let outcome = session.bind(
        geom,
        "throat.length",
        geometry::THROAT_LENGTH,
        "straight",
        ModelParams::new(),
    );
    assert_eq!(outcome, BindOutcome::Bound);

    let produced = session.produce(geom, "throat.length").unwrap();
    let params = ModelParams::new();
    let ctx = session.context(geom, "throat.length", &params).unwrap();
    let direct = geometry::throat_length::straight(&ctx).unwrap();
    assert_eq!(produced, direct);
    assert_relative_eq!(produced[0], 6.0e-5);
}

#[test]
fn unknown_model_warns_once_and_leaves_owner_alone() {
    let mut session = Session::with_standard_catalog(pair(1.0));
    let geom = session.add_geometry("all", Locations::all(2, 1)).unwrap();
    session.set_constant(geom, "pore.volume", 0.0).unwrap();

    let (outcome, warnings) = count_warnings(|| {
        session.bind(
            geom,
            "throat.length",
            geometry::THROAT_LENGTH,
            "curved",
            ModelParams::new(),
        )
    });

    assert!(!outcome.is_bound());
    assert_eq!(warnings, 1);
    let store = session.geometry(geom).unwrap().properties();
    assert_eq!(store.registered().count(), 0);
    assert_eq!(store.names().collect::<Vec<_>>(), ["pore.volume"]);

    let (outcome, warnings) = count_warnings(|| {
        session.bind(geom, "throat.length", "no_such_namespace", "straight", ModelParams::new())
    });
    assert!(matches!(outcome, BindOutcome::Skipped(_)));
    assert_eq!(warnings, 1);
}

#[test]
fn successful_binding_does_not_warn() {
    let mut session = Session::with_standard_catalog(pair(1.0));
    let geom = session.add_geometry("all", Locations::all(2, 1)).unwrap();
    let (outcome, warnings) = count_warnings(|| {
        session.bind(
            geom,
            "pore.seed",
            geometry::PORE_MISC,
            "random",
            ModelParams::new().with("seed", 7),
        )
    });
    assert!(outcome.is_bound());
    assert_eq!(warnings, 0);
}

#[test]
fn regenerate_is_idempotent() {
    let image = VoxelImage::new([3, 3, 3], vec![1.0; 27]).unwrap();
    let net = Template::generate("cube", &image, TemplateConfig::with_spacing(1.0e-4).unwrap())
        .unwrap();
    let all = net.locations().clone();
    let mut session = Session::with_standard_catalog(net);
    let geom = session.add_geometry("bulk", all).unwrap();

    session.bind(
        geom,
        "pore.seed",
        geometry::PORE_MISC,
        "random",
        ModelParams::new().with("seed", 11).with("max", 0.5),
    );
    session.bind(
        geom,
        "throat.seed",
        geometry::THROAT_MISC,
        "neighbor",
        ModelParams::new().with("pore_prop", "pore.seed"),
    );

    session.regenerate(geom).unwrap();
    let store = session.geometry(geom).unwrap().properties().clone();
    session.regenerate(geom).unwrap();
    let again = session.geometry(geom).unwrap().properties();

    for name in ["pore.seed", "throat.seed"] {
        assert_eq!(store.values(name).unwrap(), again.values(name).unwrap());
    }
}

#[test]
fn regeneration_follows_registration_order() {
    let mut session = Session::with_standard_catalog(pair(1.0));
    let shift = |ctx: &ModelContext<'_>| -> Result<Vec<f64>, ModelError> {
        let source = ctx.params().text("source")?;
        Ok(ctx.owner_values(source)?.iter().map(|v| v + 1.0).collect())
    };
    session.catalog_mut().register("chain", "shift", shift);

    let geom = session.add_geometry("all", Locations::all(2, 1)).unwrap();
    session.bind(
        geom,
        "pore.a",
        geometry::PORE_MISC,
        "constant",
        ModelParams::new().with("value", 1.0),
    );
    for (name, source) in [("pore.b", "pore.a"), ("pore.c", "pore.b")] {
        session.bind(geom, name, "chain", "shift", ModelParams::new().with("source", source));
    }

    session.regenerate(geom).unwrap();
    assert_eq!(session.values(geom, "pore.c").unwrap(), &[3.0, 3.0]);

    let registered: Vec<_> = session
        .geometry(geom)
        .unwrap()
        .properties()
        .registered()
        .map(str::to_owned)
        .collect();
    assert_eq!(registered, ["pore.a", "pore.b", "pore.c"]);
}

#[test]
fn direct_constants_survive_regeneration() {
    let mut session = Session::with_standard_catalog(pair(1.0e-4));
    let all = session.network().locations().clone();
    let boundary = session
        .add_boundary_geometry("boundary", all, BoundaryConfig::default())
        .unwrap();

    session.regenerate(boundary).unwrap();
    session.regenerate(boundary).unwrap();

    assert_eq!(session.values(boundary, "pore.volume").unwrap(), &[0.0, 0.0]);
    assert_eq!(session.values(boundary, "pore.area").unwrap(), &[1.0, 1.0]);
    let store = session.geometry(boundary).unwrap().properties();
    assert!(!store.is_bound("pore.volume"));
    assert!(!store.is_bound("pore.area"));
}

#[test]
fn boundary_throat_length_is_center_distance_minus_radii() {
    let distance = 2.5e-5;
    let mut session = Session::with_standard_catalog(pair(distance));
    let all = session.network().locations().clone();
    let boundary = session
        .add_boundary_geometry("boundary", all, BoundaryConfig::default())
        .unwrap();
    session.regenerate(boundary).unwrap();

    let length = session.values(boundary, "throat.length").unwrap()[0];
    let diameters = session.values(boundary, "pore.diameter").unwrap();
    assert_relative_eq!(length, distance - 0.5 * (diameters[0] + diameters[1]));
    assert_relative_eq!(length, distance);

    let params = ModelParams::new();
    let ctx = session.context(boundary, "throat.length", &params).unwrap();
    assert_eq!(geometry::throat_length::straight(&ctx).unwrap(), vec![length]);
}

#[test]
fn fluid_association_is_symmetric() {
    let mut session = Session::with_standard_catalog(pair(1.0));
    let water = session.add_fluid_preset::<Water>().unwrap();
    let air = session.add_fluid("air");

    let phys = session.add_physics("phys", water).unwrap();
    session.associate(phys, water).unwrap();
    session.associate(phys, air).unwrap();

    assert_eq!(session.physics(phys).unwrap().fluids(), &[water, air]);
    assert_eq!(session.fluid(water).unwrap().physics(), &[phys]);
    assert_eq!(session.fluid(air).unwrap().physics(), &[phys]);
    assert_eq!(session.fluid(water).unwrap().name(), Water::NAME);
}

#[test]
fn template_with_boundaries_end_to_end() {
    let image = VoxelImage::planar([3, 3], vec![1.0; 9]).unwrap();
    let net = Template::generate("slab", &image, TemplateConfig::with_spacing(1.0e-4).unwrap())
        .unwrap();
    let interior = net.locations().clone();
    let mut session = Session::with_standard_catalog(net);

    let bulk = session.add_geometry("bulk", interior).unwrap();
    for (property, namespace, model, params) in [
        (
            "pore.seed",
            geometry::PORE_MISC,
            "random",
            ModelParams::new().with("seed", 3).with("max", 0.9),
        ),
        (
            "pore.diameter",
            geometry::PORE_MISC,
            "constant",
            ModelParams::new().with("value", 5.0e-5),
        ),
        (
            "throat.diameter",
            geometry::THROAT_MISC,
            "neighbor",
            ModelParams::new().with("pore_prop", "pore.diameter").with("mode", "min"),
        ),
        ("throat.length", geometry::THROAT_LENGTH, "straight", ModelParams::new()),
        ("throat.area", geometry::THROAT_AREA, "cylinder", ModelParams::new()),
        ("pore.volume", geometry::PORE_VOLUME, "sphere", ModelParams::new()),
    ] {
        assert!(session.bind(bulk, property, namespace, model, params).is_bound());
    }

    let water = session.add_fluid_preset::<Water>().unwrap();
    let phys = session.add_physics("water_physics", water).unwrap();
    for (property, namespace, model) in [
        ("throat.hydraulic_conductance", physics::HYDRAULIC_CONDUCTANCE, "hagen_poiseuille"),
        ("throat.diffusive_conductance", physics::DIFFUSIVE_CONDUCTANCE, "bulk_diffusion"),
        ("throat.capillary_pressure", physics::CAPILLARY_PRESSURE, "washburn"),
    ] {
        session.bind(phys, property, namespace, model, ModelParams::new());
    }

    let added = session
        .add_boundary_pores("pore.left", [-5.0e-5, 0.0, 0.0], "left_boundary")
        .unwrap();
    let boundary = session
        .add_boundary_geometry("left", added, BoundaryConfig::default())
        .unwrap();

    session.regenerate_all().unwrap();

    assert_eq!(session.network().pore_count(), 12);
    let g = session.values(phys, "throat.hydraulic_conductance").unwrap();
    assert_eq!(g.len(), session.network().throat_count());
    assert!(g.iter().all(|&g| g.is_finite() && g > 0.0));

    let pc = session.values(phys, "throat.capillary_pressure").unwrap();
    assert!(pc.iter().all(|&pc| pc > 0.0));

    let seeds = session.values(boundary, "throat.seed").unwrap();
    assert_eq!(seeds, &[0.9999; 3]);

    let viscosity = session.values(water, "pore.viscosity").unwrap();
    assert_eq!(viscosity.len(), 12);
    let density = session.values(water, "pore.density").unwrap();
    assert!(density.iter().all(|&rho| rho == 997.0));
}
