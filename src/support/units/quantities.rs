use std::marker::PhantomData;

use uom::{
    si::{Dimension, ISQ, Quantity, SI},
    typenum::{N1, N2, P1, P2, P4, Z0},
};

/// Hydraulic conductance, m³/(Pa·s) in SI.
pub type HydraulicConductance = Quantity<ISQ<P4, N1, P1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Diffusive conductance, mol/s in SI.
pub type DiffusiveConductance = Quantity<ISQ<Z0, Z0, N1, Z0, Z0, P1, Z0>, SI<f64>, f64>;

/// Molecular diffusivity, m²/s in SI.
pub type Diffusivity = Quantity<ISQ<P2, Z0, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Surface tension, N/m in SI.
pub type SurfaceTension = Quantity<ISQ<Z0, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Molar mass, kg/mol in SI.
pub type MolarMass = Quantity<ISQ<Z0, P1, Z0, Z0, Z0, N1, Z0>, SI<f64>, f64>;

/// Molar gas constant, J/(mol·K) in SI.
pub type MolarGasConstant = Quantity<ISQ<P2, P1, N2, Z0, N1, N1, Z0>, SI<f64>, f64>;

/// Wraps a raw SI value as a quantity of any dimension.
///
/// Property arrays are stored in SI base units, so this is how models lift
/// them into quantities that have no named unit in [`uom`].
#[must_use]
pub fn si<D>(value: f64) -> Quantity<D, SI<f64>, f64>
where
    D: Dimension + ?Sized,
{
    Quantity {
        dimension: PhantomData,
        units: PhantomData,
        value,
    }
}
