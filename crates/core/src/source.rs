//! Sources of uniform random draws.
//!
//! The process generator never owns its randomness. Callers pass a
//! [`UniformSource`], which is implemented for every [`rand::Rng`] and for
//! [`Replay`], a fixed sequence used to pin down exact results.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::constraint::{Constrained, ConstraintError, UnitIntervalRightOpen};

/// A uniform draw in `[0, 1)`.
pub type Uniform = Constrained<UnitIntervalRightOpen>;

/// Produces independent uniform draws in `[0, 1)`.
pub trait UniformSource {
    /// Returns the next draw.
    fn next_uniform(&mut self) -> Uniform;
}

impl<R: Rng> UniformSource for R {
    fn next_uniform(&mut self) -> Uniform {
        // `StandardUniform` for f64 samples from [0, 1).
        Uniform::new_unchecked(self.random::<f64>())
    }
}

/// Returns a reproducible generator for the given seed.
#[must_use]
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A source that replays a fixed list of draws, wrapping around at the end.
///
/// # Example
///
/// ```
/// use poisson_core::source::{Replay, UniformSource};
///
/// let mut source = Replay::new([0.1, 0.5]).unwrap();
/// assert_eq!(source.next_uniform().get(), 0.1);
/// assert_eq!(source.next_uniform().get(), 0.5);
/// assert_eq!(source.next_uniform().get(), 0.1);
/// ```
#[derive(Debug, Clone)]
pub struct Replay {
    draws: Vec<Uniform>,
    position: usize,
}

impl Replay {
    /// Creates a replay source from raw draws.
    ///
    /// # Errors
    ///
    /// Returns an error if any draw lies outside `[0, 1)`, or
    /// [`ConstraintError::Zero`] if no draws are given.
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Result<Self, ConstraintError> {
        let draws = draws
            .into_iter()
            .map(UnitIntervalRightOpen::new)
            .collect::<Result<Vec<_>, _>>()?;

        if draws.is_empty() {
            return Err(ConstraintError::Zero);
        }

        Ok(Self { draws, position: 0 })
    }
}

impl UniformSource for Replay {
    fn next_uniform(&mut self) -> Uniform {
        let draw = self.draws[self.position];
        self.position = (self.position + 1) % self.draws.len();
        draw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_sources_repeat() {
        let mut a = seeded(7);
        let mut b = seeded(7);

        for _ in 0..32 {
            assert_eq!(a.next_uniform(), b.next_uniform());
        }
    }

    #[test]
    fn rng_draws_stay_in_unit_interval() {
        let mut rng = seeded(11);

        for _ in 0..10_000 {
            let u = rng.next_uniform().get();
            assert!((0.0..1.0).contains(&u), "u={u}");
        }
    }

    #[test]
    fn replay_rejects_invalid_draws() {
        assert_eq!(
            Replay::new([0.2, 1.0]).unwrap_err(),
            ConstraintError::AboveMaximum
        );
        assert_eq!(
            Replay::new(Vec::new()).unwrap_err(),
            ConstraintError::Zero
        );
    }

    #[test]
    fn replay_wraps_around() {
        let mut source = Replay::new([0.3, 0.6, 0.9]).unwrap();
        let drawn: Vec<f64> = (0..7).map(|_| source.next_uniform().get()).collect();

        assert_eq!(drawn, [0.3, 0.6, 0.9, 0.3, 0.6, 0.9, 0.3]);
    }
}
