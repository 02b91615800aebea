//! Numeric constraints checked once at construction.
//!
//! A [`Constrained<C>`] wraps an `f64` that is known to satisfy the marker
//! constraint `C`. Code that receives one can use the value without
//! re-validating it.
//!
//! # Provided Constraints
//!
//! - [`StrictlyPositive`]: greater than zero and finite
//! - [`UnitIntervalRightOpen`]: `0 ≤ x < 1`

mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use strictly_positive::StrictlyPositive;
pub use unit_interval::UnitIntervalRightOpen;

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: f64) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value must be finite")]
    Infinite,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// An `f64` that satisfies the constraint `C`.
///
/// # Example
///
/// ```
/// use poisson_core::constraint::{Constrained, StrictlyPositive};
///
/// let rate = Constrained::<StrictlyPositive>::new(2.0).unwrap();
/// assert_eq!(rate.get(), 2.0);
///
/// assert!(Constrained::<StrictlyPositive>::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Constrained<C: Constraint> {
    value: f64,
    #[cfg_attr(feature = "serde", serde(skip))]
    _marker: PhantomData<C>,
}

impl<C: Constraint> Constrained<C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: f64) -> Result<Self, ConstraintError> {
        C::check(value)?;
        Ok(Self::new_unchecked(value))
    }

    /// Wraps a value the caller already knows to be valid.
    pub(crate) fn new_unchecked(value: f64) -> Self {
        debug_assert!(C::check(value).is_ok());
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Returns the inner value.
    #[must_use]
    pub fn get(self) -> f64 {
        self.value
    }
}

impl<C: Constraint> AsRef<f64> for Constrained<C> {
    fn as_ref(&self) -> &f64 {
        &self.value
    }
}
