//! Pore and throat size models.
//!
//! Throat models read their own throat data from the owning geometry and
//! pore data network-wide, since a throat's neighbouring pores may belong
//! to a different geometry.

pub mod pore_misc;
pub mod pore_volume;
pub mod throat_area;
pub mod throat_length;
pub mod throat_misc;
pub mod throat_surface_area;

use crate::catalog::ModelCatalog;

pub const PORE_MISC: &str = "pore_misc";
pub const THROAT_MISC: &str = "throat_misc";
pub const THROAT_LENGTH: &str = "throat_length";
pub const THROAT_AREA: &str = "throat_area";
pub const THROAT_SURFACE_AREA: &str = "throat_surface_area";
pub const PORE_VOLUME: &str = "pore_volume";

/// Files every geometry model under its namespace.
pub fn register(catalog: &mut ModelCatalog) {
    catalog.register(PORE_MISC, "constant", pore_misc::constant);
    catalog.register(PORE_MISC, "random", pore_misc::random);
    catalog.register(THROAT_MISC, "constant", throat_misc::constant);
    catalog.register(THROAT_MISC, "neighbor", throat_misc::neighbor);
    catalog.register(THROAT_LENGTH, "straight", throat_length::straight);
    catalog.register(THROAT_AREA, "cylinder", throat_area::cylinder);
    catalog.register(THROAT_AREA, "cuboid", throat_area::cuboid);
    catalog.register(THROAT_SURFACE_AREA, "cylinder", throat_surface_area::cylinder);
    catalog.register(THROAT_SURFACE_AREA, "cuboid", throat_surface_area::cuboid);
    catalog.register(PORE_VOLUME, "sphere", pore_volume::sphere);
    catalog.register(PORE_VOLUME, "cube", pore_volume::cube);
}
