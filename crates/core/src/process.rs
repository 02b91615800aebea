//! Homogeneous Poisson process generator.
//!
//! Gaps between events are independent and Exponential(λ). Each gap is drawn
//! by inversion sampling:
//!
//! ```text
//! gap = -ln(1 - u) / λ,   u ~ Uniform[0, 1)
//! ```
//!
//! # Example
//!
//! ```
//! use poisson_core::{PoissonProcess, source::seeded};
//!
//! let process = PoissonProcess::new(2.0).unwrap();
//! let realization = process.generate(&mut seeded(42), 150);
//!
//! assert_eq!(realization.len(), 150);
//! assert!(realization.times().windows(2).all(|w| w[0] <= w[1]));
//! ```

mod realization;

pub use realization::Realization;

use crate::{
    Error,
    constraint::{Constrained, StrictlyPositive},
    source::UniformSource,
};

/// Event rate λ of a Poisson process.
pub type Rate = Constrained<StrictlyPositive>;

/// A homogeneous Poisson process with a fixed rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoissonProcess {
    rate: Rate,
}

impl PoissonProcess {
    /// Creates a process with the given event rate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `rate` is not finite and
    /// strictly positive.
    pub fn new(rate: f64) -> Result<Self, Error> {
        let rate = StrictlyPositive::new(rate).map_err(Error::invalid("rate"))?;
        Ok(Self::with_rate(rate))
    }

    /// Creates a process from an already validated rate.
    #[must_use]
    pub fn with_rate(rate: Rate) -> Self {
        Self { rate }
    }

    /// Returns the event rate.
    #[must_use]
    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// Returns the mean gap between events, `1/λ`.
    #[must_use]
    pub fn mean_gap(&self) -> f64 {
        self.rate.get().recip()
    }

    /// Draws the gap to the next event.
    pub fn gap<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
        let u = source.next_uniform().get();
        // ln(1 - u), exact for small u
        -(-u).ln_1p() / self.rate.get()
    }

    /// Generates one realization with `event_count` events, starting at time 0.
    pub fn generate<S: UniformSource + ?Sized>(
        &self,
        source: &mut S,
        event_count: usize,
    ) -> Realization {
        let mut clock = 0.0;
        let times = (0..event_count)
            .map(|_| {
                clock += self.gap(source);
                clock
            })
            .collect();

        Realization::from_sorted(times)
    }
}

/// Generates one realization of a Poisson process with the given rate.
///
/// Convenience wrapper around [`PoissonProcess::new`] and
/// [`PoissonProcess::generate`].
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `rate` is not finite and strictly
/// positive.
pub fn generate<S: UniformSource + ?Sized>(
    source: &mut S,
    rate: f64,
    event_count: usize,
) -> Result<Realization, Error> {
    Ok(PoissonProcess::new(rate)?.generate(source, event_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{
        ErrorKind,
        constraint::ConstraintError,
        source::{Replay, seeded},
    };

    #[test]
    fn inversion_formula_with_fixed_draws() {
        let draws = [0.1, 0.5, 0.3, 0.7, 0.2];
        let mut source = Replay::new(draws).unwrap();

        let realization = generate(&mut source, 2.0, 5).unwrap();

        let mut expected = 0.0;
        for (t, u) in realization.times().iter().zip(draws) {
            expected -= (1.0_f64 - u).ln() / 2.0;
            assert_relative_eq!(*t, expected, max_relative = 1e-12);
        }
        assert_relative_eq!(realization.times()[4], 1.2911494978983247, epsilon = 1e-12);
    }

    #[test]
    fn zero_events_is_empty() {
        let realization = generate(&mut seeded(1), 2.0, 0).unwrap();
        assert!(realization.is_empty());
    }

    #[test]
    fn rejects_non_positive_rate() {
        for rate in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let err = generate(&mut seeded(1), rate, 10).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidParameter, "rate={rate}");
        }

        assert_eq!(
            PoissonProcess::new(-1.0).unwrap_err(),
            Error::InvalidParameter {
                name: "rate",
                source: ConstraintError::Negative,
            }
        );
    }

    #[test]
    fn zero_draw_gives_zero_gap() {
        let process = PoissonProcess::new(3.0).unwrap();
        let mut source = Replay::new([0.0]).unwrap();
        assert_relative_eq!(process.gap(&mut source), 0.0);
    }

    #[test]
    fn mean_gap_approaches_inverse_rate() {
        let process = PoissonProcess::new(2.0).unwrap();
        let mut rng = seeded(2024);

        let n = 10_000;
        let total: f64 = (0..n).map(|_| process.gap(&mut rng)).sum();
        let mean = total / f64::from(n);

        assert_relative_eq!(process.mean_gap(), 0.5);
        assert!((mean - 0.5).abs() < 0.05, "mean={mean}");
    }

    #[test]
    fn same_seed_same_realization() {
        let process = PoissonProcess::new(2.0).unwrap();
        let a = process.generate(&mut seeded(99), 50);
        let b = process.generate(&mut seeded(99), 50);
        assert_eq!(a, b);
    }
}
