//! Grafts boundary pores onto a small template network and prints the
//! boundary throat lengths and conductances.
//!
//! Run with `RUST_LOG=pnm_models=debug` to see every binding and
//! regenerated property.

use std::error::Error;

use pnm_models::{
    catalog::ModelParams,
    models::{geometry, physics},
    network::{Template, TemplateConfig, VoxelImage},
    session::{BoundaryConfig, Session, fluid::Water},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("pnm_models=info".parse()?))
        .init();

    let image = VoxelImage::planar([4, 4], vec![1.0; 16])?;
    let network = Template::generate("slab", &image, TemplateConfig::with_spacing(1.0e-4)?)?;
    let interior = network.locations().clone();
    let mut session = Session::with_standard_catalog(network);

    let bulk = session.add_geometry("bulk", interior)?;
    let bindings = [
        (
            "pore.seed",
            geometry::PORE_MISC,
            "random",
            ModelParams::new().with("seed", 42),
        ),
        (
            "pore.diameter",
            geometry::PORE_MISC,
            "random",
            ModelParams::new()
                .with("seed", 7)
                .with("min", 2.0e-5)
                .with("max", 6.0e-5),
        ),
        (
            "throat.diameter",
            geometry::THROAT_MISC,
            "neighbor",
            ModelParams::new()
                .with("pore_prop", "pore.diameter")
                .with("mode", "min"),
        ),
        ("throat.length", geometry::THROAT_LENGTH, "straight", ModelParams::new()),
    ];
    for (property, namespace, model, params) in bindings {
        session.bind(bulk, property, namespace, model, params);
    }
    let water = session.add_fluid_preset::<Water>()?;
    let phys = session.add_physics("water_physics", water)?;
    session.bind(
        phys,
        "throat.hydraulic_conductance",
        physics::HYDRAULIC_CONDUCTANCE,
        "hagen_poiseuille",
        ModelParams::new(),
    );

    let added = session.add_boundary_pores("pore.left", [-5.0e-5, 0.0, 0.0], "left_boundary")?;
    let boundary = session.add_boundary_geometry("left", added.clone(), BoundaryConfig::default())?;

    session.regenerate_all()?;

    let lengths = session.values(boundary, "throat.length")?;
    let conductance = session.values(phys, "throat.hydraulic_conductance")?;
    for (&throat, length) in added.throats().iter().zip(lengths) {
        info!(
            throat,
            length,
            conductance = conductance[throat],
            "boundary throat"
        );
    }
    Ok(())
}
