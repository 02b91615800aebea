//! Frequency distributions built from sample sets.
//!
//! Two modes are supported:
//!
//! - [`Histogram::continuous`] splits `[0, max]` into a fixed number of
//!   equal-width bins. Bins always start at zero, even when every sample lies
//!   far from it.
//! - [`Histogram::discrete`] emits one bin per distinct integer value, in
//!   ascending order, without filling gaps between observed values.

use std::{collections::BTreeMap, num::NonZeroUsize};

use crate::{Error, constraint::ConstraintError, sample::SampleSet};

/// Number of bins used for continuous histograms unless configured otherwise.
pub const DEFAULT_BIN_COUNT: NonZeroUsize = NonZeroUsize::new(20).unwrap();

/// A single histogram bar.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Bin {
    /// Position of the bin on the x-axis.
    pub center: f64,

    /// Number of samples that fell into the bin.
    pub count: usize,
}

/// An ordered sequence of bins.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Histogram {
    bins: Vec<Bin>,
    width: f64,
}

impl Histogram {
    /// Bins real-valued samples into `bin_count` equal-width bins over `[0, max]`.
    ///
    /// With `width = max / bin_count`, a sample `x` lands in bin
    /// `min(floor(x / width), bin_count - 1)`, so the maximum always falls in
    /// the last bin. Bin `i` is centered at `i * width + width / 2`.
    ///
    /// If every sample is zero the width is zero and all samples land in the
    /// first bin. Negative samples are counted in the first bin. NaN samples
    /// are not counted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyData`] if `samples` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use std::num::NonZeroUsize;
    /// use poisson_core::{Histogram, SampleSet};
    ///
    /// let samples = SampleSet::from(vec![0.5, 1.5, 3.5, 4.0]);
    /// let histogram = Histogram::continuous(&samples, NonZeroUsize::new(4).unwrap()).unwrap();
    ///
    /// let counts: Vec<usize> = histogram.bins().iter().map(|bin| bin.count).collect();
    /// assert_eq!(counts, [1, 1, 0, 2]);
    /// assert_eq!(histogram.bins()[0].center, 0.5);
    /// ```
    pub fn continuous(samples: &SampleSet<f64>, bin_count: NonZeroUsize) -> Result<Self, Error> {
        let max = samples.max().ok_or(Error::EmptyData("histogram"))?;
        let bin_count = bin_count.get();

        #[allow(clippy::cast_precision_loss)]
        let width = max / bin_count as f64;

        let mut counts = vec![0_usize; bin_count];
        for &x in samples {
            if x.is_nan() {
                continue;
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let index = if width > 0.0 {
                ((x / width).floor() as usize).min(bin_count - 1)
            } else {
                0
            };
            counts[index] += 1;
        }

        #[allow(clippy::cast_precision_loss)]
        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| Bin {
                center: i as f64 * width + width / 2.0,
                count,
            })
            .collect();

        Ok(Self { bins, width })
    }

    /// Counts each distinct integer value, in ascending order of value.
    ///
    /// An empty sample set yields an empty histogram.
    ///
    /// # Example
    ///
    /// ```
    /// use poisson_core::{Histogram, SampleSet};
    ///
    /// let samples = SampleSet::from(vec![3_usize, 1, 3, 7]);
    /// let histogram = Histogram::discrete(&samples);
    ///
    /// let pairs: Vec<(f64, usize)> = histogram
    ///     .bins()
    ///     .iter()
    ///     .map(|bin| (bin.center, bin.count))
    ///     .collect();
    /// assert_eq!(pairs, [(1.0, 1), (3.0, 2), (7.0, 1)]);
    /// ```
    #[must_use]
    pub fn discrete(samples: &SampleSet<usize>) -> Self {
        let mut frequencies = BTreeMap::<usize, usize>::new();
        for &value in samples {
            *frequencies.entry(value).or_default() += 1;
        }

        #[allow(clippy::cast_precision_loss)]
        let bins = frequencies
            .into_iter()
            .map(|(value, count)| Bin {
                center: value as f64,
                count,
            })
            .collect();

        Self { bins, width: 1.0 }
    }

    /// Returns the bins in ascending order of center.
    #[must_use]
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Returns the bin width: `max / bin_count` for continuous histograms and
    /// `1` for discrete ones.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the total number of samples counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// Returns `true` if there are no bins.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }
}

/// Validates a bin count given as a plain integer.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `bin_count` is zero.
pub fn bin_count(bin_count: usize) -> Result<NonZeroUsize, Error> {
    NonZeroUsize::new(bin_count).ok_or(Error::InvalidParameter {
        name: "bin count",
        source: ConstraintError::Zero,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn bins(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn counts(histogram: &Histogram) -> Vec<usize> {
        histogram.bins().iter().map(|bin| bin.count).collect()
    }

    #[test]
    fn continuous_centers_and_width() {
        let samples = SampleSet::from(vec![1.0, 2.0, 10.0]);
        let histogram = Histogram::continuous(&samples, bins(5)).unwrap();

        assert_relative_eq!(histogram.width(), 2.0);
        let centers: Vec<f64> = histogram.bins().iter().map(|bin| bin.center).collect();
        assert_eq!(centers, [1.0, 3.0, 5.0, 7.0, 9.0]);
        assert_eq!(counts(&histogram), [1, 1, 0, 0, 1]);
    }

    #[test]
    fn continuous_maximum_lands_in_last_bin() {
        // The maximum maps to index 3, one past the last bin, before clamping.
        let samples = SampleSet::from(vec![0.3, 0.05, 0.15]);
        let histogram = Histogram::continuous(&samples, bins(3)).unwrap();

        assert_eq!(counts(&histogram), [1, 1, 1]);
        assert_eq!(histogram.total(), 3);
    }

    #[test]
    fn continuous_bins_start_at_zero_regardless_of_minimum() {
        let samples = SampleSet::from(vec![9.0, 9.5, 10.0]);
        let histogram = Histogram::continuous(&samples, bins(20)).unwrap();

        assert_eq!(histogram.bins().len(), 20);
        assert_relative_eq!(histogram.bins()[0].center, 0.25);
        assert!(histogram.bins()[..18].iter().all(|bin| bin.count == 0));
        assert_eq!(counts(&histogram)[18..], [1, 2]);
    }

    #[test]
    fn continuous_all_zero_samples_share_first_bin() {
        let samples = SampleSet::from(vec![0.0, 0.0, 0.0]);
        let histogram = Histogram::continuous(&samples, bins(4)).unwrap();

        assert_eq!(counts(&histogram), [3, 0, 0, 0]);
        assert_relative_eq!(histogram.width(), 0.0);
    }

    #[test]
    fn continuous_empty_is_an_error() {
        let samples = SampleSet::<f64>::default();
        assert_eq!(
            Histogram::continuous(&samples, DEFAULT_BIN_COUNT).unwrap_err(),
            Error::EmptyData("histogram")
        );
    }

    #[test]
    fn discrete_skips_missing_values() {
        let samples = SampleSet::from(vec![12_usize, 8, 9, 12, 8, 12]);
        let histogram = Histogram::discrete(&samples);

        let pairs: Vec<(f64, usize)> = histogram
            .bins()
            .iter()
            .map(|bin| (bin.center, bin.count))
            .collect();
        assert_eq!(pairs, [(8.0, 2), (9.0, 1), (12.0, 3)]);
        assert_eq!(histogram.total(), 6);
    }

    #[test]
    fn discrete_empty_is_valid() {
        let histogram = Histogram::discrete(&SampleSet::default());
        assert!(histogram.is_empty());
        assert_eq!(histogram.total(), 0);
    }

    #[test]
    fn bin_count_must_be_positive() {
        assert_eq!(bin_count(20).unwrap(), DEFAULT_BIN_COUNT);
        assert_eq!(
            bin_count(0).unwrap_err(),
            Error::InvalidParameter {
                name: "bin count",
                source: ConstraintError::Zero,
            }
        );
    }
}
