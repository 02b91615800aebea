use crate::constraint::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is finite and greater than zero.
///
/// Event rates use this constraint: a rate of zero would never produce an
/// event, and an infinite rate collapses every gap to zero.
///
/// # Examples
///
/// ```
/// use poisson_core::constraint::{ConstraintError, StrictlyPositive};
///
/// let rate = StrictlyPositive::new(0.5).unwrap();
/// assert_eq!(rate.get(), 0.5);
///
/// assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
/// assert_eq!(StrictlyPositive::new(-1.0), Err(ConstraintError::Negative));
/// assert_eq!(StrictlyPositive::new(f64::NAN), Err(ConstraintError::NotANumber));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs `Constrained<StrictlyPositive>` if `0 < value < ∞`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::NotANumber`] if the value is NaN.
    /// - [`ConstraintError::Zero`] if the value is zero.
    /// - [`ConstraintError::Negative`] if the value is less than zero.
    /// - [`ConstraintError::Infinite`] if the value is positive infinity.
    pub fn new(value: f64) -> Result<Constrained<StrictlyPositive>, ConstraintError> {
        Constrained::<StrictlyPositive>::new(value)
    }
}

impl Constraint for StrictlyPositive {
    fn check(value: f64) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if value == 0.0 {
            Err(ConstraintError::Zero)
        } else if value < 0.0 {
            Err(ConstraintError::Negative)
        } else if value.is_infinite() {
            Err(ConstraintError::Infinite)
        } else {
            Ok(())
        }
    }
}
