use std::cmp::Ordering;

use crate::constraint::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value lies in the right-open unit interval: `0 ≤ x < 1`.
///
/// Uniform draws carry this constraint, which keeps `1 - u` strictly positive
/// and its logarithm finite.
///
/// # Examples
///
/// ```
/// use poisson_core::constraint::{ConstraintError, UnitIntervalRightOpen};
///
/// let u = UnitIntervalRightOpen::new(0.25).unwrap();
/// assert_eq!(u.get(), 0.25);
///
/// assert!(UnitIntervalRightOpen::new(0.0).is_ok());
/// assert_eq!(UnitIntervalRightOpen::new(1.0), Err(ConstraintError::AboveMaximum));
/// assert_eq!(UnitIntervalRightOpen::new(-0.1), Err(ConstraintError::BelowMinimum));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalRightOpen;

impl UnitIntervalRightOpen {
    /// Constructs `Constrained<UnitIntervalRightOpen>` if `0 ≤ value < 1`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than or equal to one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (NaN).
    pub fn new(value: f64) -> Result<Constrained<UnitIntervalRightOpen>, ConstraintError> {
        Constrained::<UnitIntervalRightOpen>::new(value)
    }
}

impl Constraint for UnitIntervalRightOpen {
    fn check(value: f64) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&0.0), value.partial_cmp(&1.0)) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater | Ordering::Equal)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}
