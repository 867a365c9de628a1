use std::{cmp::Ordering, marker::PhantomData, ops::Add};

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is zero or greater.
///
/// Pore and throat diameters are non-negative: boundary pores carry a
/// diameter of exactly zero.
///
/// # Examples
///
/// ```
/// use pnm_models::support::constraint::{Constrained, NonNegative};
///
/// let d = Constrained::<_, NonNegative>::new(0.0).unwrap();
/// assert_eq!(d.into_inner(), 0.0);
///
/// assert!(NonNegative::new(-1.0e-6).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

/// Adds two non-negative values.
///
/// # Panics
///
/// Panics in debug builds if the sum is unexpectedly negative.
impl<T> Add for Constrained<T, NonNegative>
where
    T: Add<Output = T> + PartialOrd + Zero,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let value = self.value + rhs.value;
        debug_assert!(
            value >= T::zero(),
            "Addition produced a negative value, violating NonNegative bound invariant"
        );
        Self {
            value,
            _marker: PhantomData,
        }
    }
}

impl<T> Zero for Constrained<T, NonNegative>
where
    T: PartialOrd + Zero,
{
    fn zero() -> Self {
        Self {
            value: T::zero(),
            _marker: PhantomData,
        }
    }

    fn is_zero(&self) -> bool {
        self.value == T::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Length, length::micrometer};

    #[test]
    fn pore_diameters() {
        let diameters = [0.0, 1.5e-6, 3.0e-6]
            .into_iter()
            .map(NonNegative::new)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        let total: Constrained<f64, NonNegative> = diameters.into_iter().sum();
        assert!((total.into_inner() - 4.5e-6).abs() < 1e-18);

        assert_eq!(NonNegative::new(-2.0), Err(ConstraintError::Negative));
        assert_eq!(NonNegative::new(f64::NAN), Err(ConstraintError::NotANumber));
    }

    #[test]
    fn lengths() {
        assert!(NonNegative::new(Length::new::<micrometer>(0.0)).is_ok());
        assert!(NonNegative::new(Length::new::<micrometer>(12.0)).is_ok());
        assert!(NonNegative::new(Length::new::<micrometer>(-0.1)).is_err());
    }
}
