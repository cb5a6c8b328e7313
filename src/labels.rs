use crate::summary::ClusterSummary;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// The label clustering libraries conventionally assign to points that do not
/// belong to any cluster.
pub const NOISE_LABEL: i32 = -1;

/// An immutable cluster assignment, one label per data point, together with the
/// value that marks a point as noise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Labels {
    values: Vec<i32>,
    noise_label: i32,
}

impl Labels {
    /// Wraps the labels returned by a clustering engine, using `-1` as the noise label.
    ///
    /// # Examples
    /// ```
    ///use cluster_summary::Labels;
    ///
    ///let labels = Labels::new(vec![0, 0, 1, -1]);
    ///assert_eq!(4, labels.len());
    ///assert!(labels.is_noise(3));
    /// ```
    pub fn new(values: Vec<i32>) -> Self {
        Self::with_noise_label(values, NOISE_LABEL)
    }

    /// Wraps labels from an engine that marks noise with a value other than `-1`.
    pub fn with_noise_label(values: Vec<i32>, noise_label: i32) -> Self {
        Self { values, noise_label }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    pub fn noise_label(&self) -> i32 {
        self.noise_label
    }

    /// Whether the `n`th data point is noise. Out of range indices are not noise.
    pub fn is_noise(&self, n: usize) -> bool {
        self.values.get(n) == Some(&self.noise_label)
    }

    /// Every distinct value in the assignment, noise included.
    pub fn distinct(&self) -> BTreeSet<i32> {
        self.values.iter().copied().collect()
    }

    /// The number of members of each cluster, keyed by cluster label. Noise is excluded.
    pub fn cluster_sizes(&self) -> BTreeMap<i32, usize> {
        let mut sizes = BTreeMap::new();
        for &label in self.values.iter().filter(|&&l| l != self.noise_label) {
            *sizes.entry(label).or_insert(0) += 1;
        }
        sizes
    }

    /// Cluster and noise counts for this assignment.
    pub fn summary(&self) -> ClusterSummary {
        ClusterSummary::from_labels(self)
    }
}

impl From<Vec<i32>> for Labels {
    fn from(values: Vec<i32>) -> Self {
        Labels::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cluster_sizes_skip_noise() {
        let labels = Labels::new(vec![1, 0, -1, 1, 1, -1]);
        let sizes = labels.cluster_sizes();
        assert_eq!(2, sizes.len());
        assert_eq!(Some(&1), sizes.get(&0));
        assert_eq!(Some(&3), sizes.get(&1));
        assert_eq!(None, sizes.get(&-1));
    }

    #[test]
    fn custom_noise_label() {
        let labels = Labels::with_noise_label(vec![0, 99, 1, 99], 99);
        assert!(labels.is_noise(1));
        assert!(!labels.is_noise(0));
        assert!(!labels.is_noise(10));
        assert_eq!(vec![0, 1], labels.cluster_sizes().into_keys().collect::<Vec<_>>());
    }

    #[test]
    fn distinct_includes_noise() {
        let labels = Labels::from(vec![2, -1, 2, 0]);
        assert_eq!(vec![-1, 0, 2], labels.distinct().into_iter().collect::<Vec<_>>());
    }
}
