/// One sample path of a Poisson process: event times in increasing order,
/// measured from an origin at time 0.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Realization {
    times: Vec<f64>,
}

impl Realization {
    /// Wraps event times that are already sorted and non-negative.
    pub(crate) fn from_sorted(times: Vec<f64>) -> Self {
        debug_assert!(times.first().is_none_or(|&t| t >= 0.0));
        debug_assert!(times.windows(2).all(|w| w[0] <= w[1]));
        Self { times }
    }

    /// Returns the event times.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns `true` if the realization has no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Returns the time of the event at 0-based `index`, if there is one.
    #[must_use]
    pub fn event_time(&self, index: usize) -> Option<f64> {
        self.times.get(index).copied()
    }

    /// Returns the gaps between consecutive events.
    ///
    /// A realization with `n` events yields `n - 1` intervals; the gap from
    /// the origin to the first event is not included.
    pub fn intervals(&self) -> impl Iterator<Item = f64> + '_ {
        self.times.windows(2).map(|w| w[1] - w[0])
    }

    /// Returns how many events occurred at or before `time`.
    #[must_use]
    pub fn count_until(&self, time: f64) -> usize {
        self.times.partition_point(|&t| t <= time)
    }

    /// Returns the trajectory of the counting process as `[time, count]` pairs.
    ///
    /// The count at the i-th event (0-based) is `i + 1`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn trajectory(&self) -> Vec<[f64; 2]> {
        self.times
            .iter()
            .enumerate()
            .map(|(i, &t)| [t, (i + 1) as f64])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn sample() -> Realization {
        Realization::from_sorted(vec![0.5, 1.25, 2.0, 4.5])
    }

    #[test]
    fn event_time_by_index() {
        let r = sample();
        assert_eq!(r.event_time(0), Some(0.5));
        assert_eq!(r.event_time(3), Some(4.5));
        assert_eq!(r.event_time(4), None);
    }

    #[test]
    fn intervals_between_consecutive_events() {
        let intervals: Vec<f64> = sample().intervals().collect();
        assert_eq!(intervals.len(), 3);
        assert_relative_eq!(intervals[0], 0.75);
        assert_relative_eq!(intervals[1], 0.75);
        assert_relative_eq!(intervals[2], 2.5);
    }

    #[test]
    fn single_event_has_no_intervals() {
        let r = Realization::from_sorted(vec![0.3]);
        assert_eq!(r.intervals().count(), 0);
    }

    #[test]
    fn count_until_includes_boundary() {
        let r = sample();
        assert_eq!(r.count_until(0.0), 0);
        assert_eq!(r.count_until(0.5), 1);
        assert_eq!(r.count_until(1.9), 2);
        assert_eq!(r.count_until(2.0), 3);
        assert_eq!(r.count_until(100.0), 4);
    }

    #[test]
    fn trajectory_counts_from_one() {
        let points = sample().trajectory();
        assert_eq!(points, [[0.5, 1.0], [1.25, 2.0], [2.0, 3.0], [4.5, 4.0]]);
    }
}
