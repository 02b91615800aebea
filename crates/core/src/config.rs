use std::num::NonZeroUsize;

use crate::{
    Error,
    constraint::{Constrained, StrictlyPositive},
    histogram::DEFAULT_BIN_COUNT,
    process::Rate,
};

/// Parameters of one experiment run.
///
/// The default holds the constants the lab runs with: rate 2, a trajectory of
/// 150 events, 150 trials of 100 events each, event index 4 (the fifth event),
/// timestamp 5 and 20 histogram bins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    rate: Rate,
    trajectory_events: usize,
    events_per_trial: usize,
    trials: usize,
    event_index: usize,
    timestamp: f64,
    bin_count: NonZeroUsize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rate: Constrained::new_unchecked(2.0),
            trajectory_events: 150,
            events_per_trial: 100,
            trials: 150,
            event_index: 4,
            timestamp: 5.0,
            bin_count: DEFAULT_BIN_COUNT,
        }
    }
}

impl Config {
    /// Creates a config with the given rate and default values elsewhere.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `rate` is not finite and
    /// strictly positive.
    pub fn new(rate: f64) -> Result<Self, Error> {
        let rate = StrictlyPositive::new(rate).map_err(Error::invalid("rate"))?;
        Ok(Self {
            rate,
            ..Self::default()
        })
    }

    /// Sets the number of events in the trajectory plot.
    #[must_use]
    pub fn with_trajectory_events(mut self, events: usize) -> Self {
        self.trajectory_events = events;
        self
    }

    /// Sets the number of events generated in each trial.
    #[must_use]
    pub fn with_events_per_trial(mut self, events: usize) -> Self {
        self.events_per_trial = events;
        self
    }

    /// Sets the number of trials pooled into each distribution.
    #[must_use]
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Sets the 0-based index of the event whose time is studied.
    ///
    /// The index is checked against the events per trial when the samples
    /// are built, not here.
    #[must_use]
    pub fn with_event_index(mut self, index: usize) -> Self {
        self.event_index = index;
        self
    }

    /// Sets the time up to which events are counted.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: f64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Sets the number of bins in continuous histograms.
    #[must_use]
    pub fn with_bin_count(mut self, bin_count: NonZeroUsize) -> Self {
        self.bin_count = bin_count;
        self
    }

    /// Returns the event rate.
    #[must_use]
    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// Returns the number of events in the trajectory plot.
    #[must_use]
    pub fn trajectory_events(&self) -> usize {
        self.trajectory_events
    }

    /// Returns the number of events generated in each trial.
    #[must_use]
    pub fn events_per_trial(&self) -> usize {
        self.events_per_trial
    }

    /// Returns the number of trials.
    #[must_use]
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Returns the 0-based index of the studied event.
    #[must_use]
    pub fn event_index(&self) -> usize {
        self.event_index
    }

    /// Returns the time up to which events are counted.
    #[must_use]
    pub fn timestamp(&self) -> f64 {
        self.timestamp
    }

    /// Returns the number of bins in continuous histograms.
    #[must_use]
    pub fn bin_count(&self) -> NonZeroUsize {
        self.bin_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ErrorKind;

    #[test]
    #[allow(clippy::float_cmp)]
    fn default_holds_lab_constants() {
        let config = Config::default();
        assert_eq!(config.rate().get(), 2.0);
        assert_eq!(config.trajectory_events(), 150);
        assert_eq!(config.events_per_trial(), 100);
        assert_eq!(config.trials(), 150);
        assert_eq!(config.event_index(), 4);
        assert_eq!(config.timestamp(), 5.0);
        assert_eq!(config.bin_count().get(), 20);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn new_validates_rate() {
        assert_eq!(Config::new(3.5).unwrap().rate().get(), 3.5);
        assert_eq!(
            Config::new(0.0).unwrap_err().kind(),
            ErrorKind::InvalidParameter
        );
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn setters_chain() {
        let config = Config::default()
            .with_events_per_trial(1)
            .with_event_index(7)
            .with_trials(3)
            .with_timestamp(0.0);

        assert_eq!(config.events_per_trial(), 1);
        assert_eq!(config.event_index(), 7);
        assert_eq!(config.trials(), 3);
        assert_eq!(config.timestamp(), 0.0);
        assert_eq!(config.trajectory_events(), 150);
    }
}
