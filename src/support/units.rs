//! Extensions to [`uom`].
//!
//! Property arrays hold plain SI `f64` values. Physics and fluid models lift
//! those values into [`uom`] quantities for the arithmetic and read the SI
//! value back out, so dimensional mistakes in a formula fail to compile.
//!
//! [`uom`] has no named quantities for pore-network conductances, so this
//! module defines them along with a few transport quantities:
//!
//! ```
//! use pnm_models::support::units::{HydraulicConductance, si};
//! use uom::si::{
//!     dynamic_viscosity::pascal_second, f64::{DynamicViscosity, Length}, length::meter,
//! };
//!
//! let r = Length::new::<meter>(1.0e-6);
//! let l = Length::new::<meter>(1.0e-5);
//! let mu = DynamicViscosity::new::<pascal_second>(1.0e-3);
//!
//! let g: HydraulicConductance = r * r * r * r / (mu * l);
//! assert!((g.value - 1.0e-16).abs() < 1e-28);
//! let unit: HydraulicConductance = si(2.0);
//! assert_eq!(unit.value, 2.0);
//! ```

mod quantities;

pub use quantities::{
    DiffusiveConductance, Diffusivity, HydraulicConductance, MolarGasConstant, MolarMass,
    SurfaceTension, si,
};
