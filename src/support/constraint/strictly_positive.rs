use std::{cmp::Ordering, marker::PhantomData};

use num_traits::{One, Zero};

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly greater than zero.
///
/// Throat lengths and fluid viscosities appear in denominators, so the
/// models that divide by them check this constraint first.
///
/// # Examples
///
/// ```
/// use pnm_models::support::constraint::StrictlyPositive;
///
/// let viscosity = StrictlyPositive::new(8.9e-4).unwrap();
/// assert_eq!(viscosity.into_inner(), 8.9e-4);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }

    /// Returns the multiplicative identity (one) as a strictly positive value.
    #[must_use]
    pub fn one<T: PartialOrd + Zero + One>() -> Constrained<T, StrictlyPositive> {
        Constrained {
            value: T::one(),
            _marker: PhantomData,
        }
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
