//! The seams between this crate and the libraries that do the heavy lifting. Standardising
//! features and running the clustering algorithm itself are left to other crates; wrap them
//! in these traits to drive them through a [`Pipeline`](crate::Pipeline).

use crate::validation::DataValidator;
use crate::{Error, Labels};
use num_traits::Float;

/// Transforms a feature matrix before clustering, e.g. to zero mean and unit variance.
pub trait Scaler<T> {
    fn scale(&self, data: &[Vec<T>]) -> Result<Vec<Vec<T>>, Error>;
}

/// Assigns every row of a feature matrix to a cluster, or to noise.
pub trait Clusterer<T> {
    fn cluster(&self, data: &[Vec<T>]) -> Result<Labels, Error>;
}

/// Scores how well a cluster assignment fits the data it was computed from.
pub trait QualityMetric<T> {
    /// Name used when reporting the score.
    fn name(&self) -> &str;

    fn score(&self, data: &[Vec<T>], labels: &Labels) -> Result<T, Error>;
}

/// A scaler that leaves the data untouched, for features that were already standardised
/// upstream.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unscaled;

impl<T: Float> Scaler<T> for Unscaled {
    fn scale(&self, data: &[Vec<T>]) -> Result<Vec<Vec<T>>, Error> {
        Ok(data.to_vec())
    }
}

/// A clusterer that hands back labels computed elsewhere, e.g. by an HDBSCAN run whose
/// output was saved alongside the data.
#[derive(Debug, Clone, PartialEq)]
pub struct PrecomputedLabels {
    labels: Labels,
}

impl PrecomputedLabels {
    pub fn new(labels: Labels) -> Self {
        Self { labels }
    }
}

impl<T: Float> Clusterer<T> for PrecomputedLabels {
    fn cluster(&self, data: &[Vec<T>]) -> Result<Labels, Error> {
        DataValidator::new(data).validate_labels(self.labels.as_slice())?;
        Ok(self.labels.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unscaled_is_identity() {
        let data = vec![vec![1.0, -2.0], vec![3.5, 0.0]];
        assert_eq!(data, Unscaled.scale(&data).unwrap());
    }

    #[test]
    fn precomputed_labels_must_match_data() {
        let data = vec![vec![1.0], vec![2.0], vec![3.0]];
        let clusterer = PrecomputedLabels::new(Labels::new(vec![0, 0, -1]));
        assert_eq!(vec![0, 0, -1], clusterer.cluster(&data).unwrap().as_slice());

        let too_few = vec![vec![1.0], vec![2.0]];
        assert!(matches!(
            clusterer.cluster(&too_few),
            Err(Error::LabelCountMismatch { expected: 2, found: 3 })
        ));
    }
}
