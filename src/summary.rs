use crate::labels::{Labels, NOISE_LABEL};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt::{Display, Formatter};

/// Counts derived from a cluster assignment: how many distinct clusters were found and
/// how many points were left as noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClusterSummary {
    cluster_count: usize,
    noise_count: usize,
    n_samples: usize,
}

impl ClusterSummary {
    /// Summarises an assignment using its own noise label.
    ///
    /// # Examples
    /// ```
    ///use cluster_summary::{ClusterSummary, Labels};
    ///
    ///let labels = Labels::new(vec![0, -1, 1, -1, 0]);
    ///let summary = ClusterSummary::from_labels(&labels);
    ///assert_eq!(2, summary.cluster_count());
    ///assert_eq!(2, summary.noise_count());
    /// ```
    pub fn from_labels(labels: &Labels) -> Self {
        Self::from_slice(labels.as_slice(), labels.noise_label())
    }

    pub(crate) fn from_slice(labels: &[i32], noise_label: i32) -> Self {
        let distinct: HashSet<i32> = labels.iter().copied().collect();
        let cluster_count = if distinct.contains(&noise_label) {
            distinct.len() - 1
        } else {
            distinct.len()
        };
        let noise_count = labels.iter().filter(|&&label| label == noise_label).count();
        ClusterSummary {
            cluster_count,
            noise_count,
            n_samples: labels.len(),
        }
    }

    /// The number of distinct cluster labels, noise excluded.
    pub fn cluster_count(&self) -> usize {
        self.cluster_count
    }

    /// The number of points labelled as noise.
    pub fn noise_count(&self) -> usize {
        self.noise_count
    }

    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// The number of points assigned to some cluster.
    pub fn clustered_count(&self) -> usize {
        self.n_samples - self.noise_count
    }

    /// Share of points labelled as noise, or `None` for an empty assignment.
    pub fn noise_ratio(&self) -> Option<f64> {
        if self.n_samples == 0 {
            None
        } else {
            Some(self.noise_count as f64 / self.n_samples as f64)
        }
    }
}

impl Display for ClusterSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Estimated number of clusters: {}", self.cluster_count)?;
        write!(f, "Estimated number of noise points: {}", self.noise_count)
    }
}

/// Counts the clusters and noise points in a list of labels where `-1` marks noise.
///
/// # Returns
/// * A tuple of `(cluster_count, noise_count)`. An empty list yields `(0, 0)`.
///
/// # Examples
/// ```
///use cluster_summary::summarize;
///
///assert_eq!((0, 0), summarize(&[]));
///assert_eq!((0, 3), summarize(&[-1, -1, -1]));
///assert_eq!((3, 0), summarize(&[0, 0, 1, 1, 2]));
///assert_eq!((2, 2), summarize(&[0, -1, 1, -1, 0]));
/// ```
pub fn summarize(labels: &[i32]) -> (usize, usize) {
    summarize_with_noise(labels, NOISE_LABEL)
}

/// Same as [`summarize`] for engines that mark noise with a different value.
pub fn summarize_with_noise(labels: &[i32], noise_label: i32) -> (usize, usize) {
    let summary = ClusterSummary::from_slice(labels, noise_label);
    (summary.cluster_count, summary.noise_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!((0, 0), summarize(&[]));
        let summary = Labels::new(Vec::new()).summary();
        assert_eq!(0, summary.n_samples());
        assert_eq!(None, summary.noise_ratio());
    }

    #[test]
    fn all_noise() {
        assert_eq!((0, 3), summarize(&[-1, -1, -1]));
    }

    #[test]
    fn no_noise() {
        assert_eq!((3, 0), summarize(&[0, 0, 1, 1, 2]));
    }

    #[test]
    fn mixed() {
        assert_eq!((2, 2), summarize(&[0, -1, 1, -1, 0]));
        let summary = Labels::new(vec![0, -1, 1, -1, 0]).summary();
        assert_eq!(3, summary.clustered_count());
        assert_eq!(Some(0.4), summary.noise_ratio());
    }

    #[test]
    fn non_contiguous_labels() {
        assert_eq!((3, 1), summarize(&[7, 42, -1, 7, 3]));
    }

    #[test]
    fn other_noise_label() {
        assert_eq!((2, 1), summarize_with_noise(&[0, 1, 0, 9], 9));
        // With a custom noise label, -1 is an ordinary cluster
        assert_eq!((3, 0), summarize_with_noise(&[0, 1, -1], 9));
    }

    #[test]
    fn display() {
        let summary = Labels::new(vec![0, 1, -1]).summary();
        assert_eq!(
            "Estimated number of clusters: 2\nEstimated number of noise points: 1",
            summary.to_string()
        );
    }
}
