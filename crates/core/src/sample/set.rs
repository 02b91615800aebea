/// An unordered collection of scalar observations.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SampleSet<T> {
    values: Vec<T>,
}

impl<T> SampleSet<T> {
    /// Creates an empty set with room for `capacity` samples.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    /// Returns the samples as a slice.
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns an iterator over the samples.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there are no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consumes the set and returns the samples.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.values
    }
}

impl SampleSet<f64> {
    /// Returns the smallest sample, or `None` if the set is empty.
    ///
    /// NaN samples are ignored.
    #[must_use]
    pub fn min(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::min)
    }

    /// Returns the largest sample, or `None` if the set is empty.
    ///
    /// NaN samples are ignored.
    #[must_use]
    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }
}

impl<T> From<Vec<T>> for SampleSet<T> {
    fn from(values: Vec<T>) -> Self {
        Self { values }
    }
}

impl<T> FromIterator<T> for SampleSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for SampleSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a SampleSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<T> AsRef<[T]> for SampleSet<T> {
    fn as_ref(&self) -> &[T] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extremes_of_real_samples() {
        let set = SampleSet::from(vec![2.5, 0.25, 7.0, 3.0]);
        assert_eq!(set.min(), Some(0.25));
        assert_eq!(set.max(), Some(7.0));
    }

    #[test]
    fn empty_set_has_no_extremes() {
        let set = SampleSet::<f64>::default();
        assert!(set.is_empty());
        assert_eq!(set.min(), None);
        assert_eq!(set.max(), None);
    }

    #[test]
    fn extend_appends() {
        let mut set: SampleSet<usize> = [1, 2].into_iter().collect();
        set.extend([3, 4]);
        assert_eq!(set.values(), [1, 2, 3, 4]);
    }
}
