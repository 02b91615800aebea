//! Derived samples pooled over repeated, independent realizations.
//!
//! A [`Trials`] describes how many realizations to draw and how many events
//! each one holds. Each builder draws fresh realizations, extracts a statistic
//! from every one, and discards the realization.
//!
//! - [`Trials::event_times`]: time of the k-th event
//! - [`Trials::intervals`]: gaps between consecutive events, pooled
//! - [`Trials::occurrences`]: number of events up to a fixed time

mod set;

pub use set::SampleSet;

use tracing::debug;

use crate::{Error, PoissonProcess, source::UniformSource};

/// Repeated independent realizations of a Poisson process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trials {
    process: PoissonProcess,
    events: usize,
    count: usize,
}

impl Trials {
    /// Creates a plan for `count` realizations of `events` events each.
    #[must_use]
    pub fn new(process: PoissonProcess, events: usize, count: usize) -> Self {
        Self {
            process,
            events,
            count,
        }
    }

    /// Returns the process being sampled.
    #[must_use]
    pub fn process(&self) -> PoissonProcess {
        self.process
    }

    /// Returns the number of events in each realization.
    #[must_use]
    pub fn events(&self) -> usize {
        self.events
    }

    /// Returns the number of realizations.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Collects the time of the event at 0-based `index` from every trial.
    ///
    /// # Errors
    ///
    /// - [`Error::IndexOutOfRange`] if `index` is not below the per-trial
    ///   event count. No randomness is consumed in that case.
    /// - [`Error::EmptyData`] if no trial produced a sample.
    pub fn event_times<S: UniformSource + ?Sized>(
        &self,
        source: &mut S,
        index: usize,
    ) -> Result<SampleSet<f64>, Error> {
        if index >= self.events {
            return Err(Error::IndexOutOfRange {
                index,
                events: self.events,
            });
        }

        let samples: SampleSet<f64> = (0..self.count)
            .filter_map(|_| self.process.generate(source, self.events).event_time(index))
            .collect();

        debug!(
            index,
            trials = self.count,
            samples = samples.len(),
            "collected event times"
        );
        non_empty(samples, "the time of the requested event")
    }

    /// Collects the intervals between consecutive events of every trial into
    /// one pooled set of `count × (events - 1)` samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyData`] if no intervals exist, which happens when
    /// each trial holds fewer than two events or there are no trials.
    pub fn intervals<S: UniformSource + ?Sized>(
        &self,
        source: &mut S,
    ) -> Result<SampleSet<f64>, Error> {
        let mut samples = SampleSet::with_capacity(self.count * self.events.saturating_sub(1));
        for _ in 0..self.count {
            samples.extend(self.process.generate(source, self.events).intervals());
        }

        debug!(
            trials = self.count,
            samples = samples.len(),
            "collected intervals"
        );
        non_empty(samples, "intervals between events")
    }

    /// Counts, for every trial, the events that occurred at or before `time`.
    ///
    /// Each trial contributes exactly one sample in `0..=events`.
    pub fn occurrences<S: UniformSource + ?Sized>(
        &self,
        source: &mut S,
        time: f64,
    ) -> SampleSet<usize> {
        let samples: SampleSet<usize> = (0..self.count)
            .map(|_| self.process.generate(source, self.events).count_until(time))
            .collect();

        debug!(
            time,
            trials = self.count,
            samples = samples.len(),
            "collected occurrence counts"
        );
        samples
    }
}

fn non_empty<T>(samples: SampleSet<T>, what: &'static str) -> Result<SampleSet<T>, Error> {
    if samples.is_empty() {
        Err(Error::EmptyData(what))
    } else {
        Ok(samples)
    }
}
