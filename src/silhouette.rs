use crate::collaborators::QualityMetric;
use crate::validation::DataValidator;
use crate::{DistanceMetric, Error, Labels};
use num_traits::Float;
use std::collections::BTreeMap;

#[cfg(feature = "parallel")]
mod parallel;
mod serial;

/// The silhouette coefficient, a measure of how well each point sits within its own cluster
/// compared with the nearest other cluster. Ranges from -1 (wrongly assigned) through 0
/// (overlapping clusters) to 1 (dense, well separated clusters).
///
/// For each point, `a` is its mean distance to the other members of its cluster and `b` is
/// the smallest mean distance to the members of any other cluster. The point's coefficient
/// is `(b - a) / max(a, b)`, or zero if it is the only member of its cluster. The overall
/// score is the mean over all points.
///
/// By default noise points are scored as if noise were one more cluster, which is how
/// most libraries treat a label array containing `-1`. Use [`Silhouette::ignoring_noise`]
/// to score only the clustered points.
#[derive(Debug, Clone, PartialEq)]
pub struct Silhouette {
    dist_metric: DistanceMetric,
    ignore_noise: bool,
}

impl Default for Silhouette {
    fn default() -> Self {
        Self::new(DistanceMetric::Euclidean)
    }
}

impl Silhouette {
    pub fn new(dist_metric: DistanceMetric) -> Self {
        Self {
            dist_metric,
            ignore_noise: false,
        }
    }

    /// Excludes noise points from the calculation altogether.
    pub fn ignoring_noise(mut self) -> Self {
        self.ignore_noise = true;
        self
    }

    pub fn dist_metric(&self) -> DistanceMetric {
        self.dist_metric
    }

    /// Calculates the mean silhouette coefficient of a clustering.
    ///
    /// # Parameters
    /// * `data` - the points that were clustered. Rows must share dimensionality and contain
    ///            only finite values.
    /// * `labels` - one label per row of `data`.
    ///
    /// # Returns
    /// * The mean coefficient. An error is returned if the inputs are invalid, or if the number
    ///   of distinct labels scored is not between 2 and the number of points scored minus one.
    ///
    /// # Examples
    /// ```
    ///use cluster_summary::{Labels, Silhouette};
    ///
    ///let data = vec![vec![0.0], vec![1.0], vec![10.0], vec![11.0]];
    ///let labels = Labels::new(vec![0, 0, 1, 1]);
    ///let score: f64 = Silhouette::default().coefficient(&data, &labels).unwrap();
    ///assert!((score - 0.8997494).abs() < 1e-6);
    /// ```
    pub fn coefficient<T: Float>(&self, data: &[Vec<T>], labels: &Labels) -> Result<T, Error> {
        let groups = self.group(data, labels)?;
        Ok(serial::mean_coefficient(&groups, self.dist_metric))
    }

    /// Calculates the mean silhouette coefficient with the per point work spread over the
    /// rayon thread pool. Worthwhile for large datasets only, as the calculation is quadratic
    /// in the number of points.
    #[cfg(feature = "parallel")]
    pub fn coefficient_par<T: Float + Send + Sync>(
        &self,
        data: &[Vec<T>],
        labels: &Labels,
    ) -> Result<T, Error> {
        let groups = self.group(data, labels)?;
        Ok(parallel::mean_coefficient(&groups, self.dist_metric))
    }

    fn group<'d, T: Float>(
        &self,
        data: &'d [Vec<T>],
        labels: &Labels,
    ) -> Result<Groups<'d, T>, Error> {
        let validator = DataValidator::new(data);
        validator.validate_input_data()?;
        validator.validate_labels(labels.as_slice())?;

        let mut group_ids: BTreeMap<i32, usize> = BTreeMap::new();
        let mut points = Vec::with_capacity(data.len());
        let mut membership = Vec::with_capacity(data.len());
        let mut sizes: Vec<usize> = Vec::new();

        for (datapoint, &label) in data.iter().zip(labels.as_slice()) {
            if self.ignore_noise && label == labels.noise_label() {
                continue;
            }
            let next_id = group_ids.len();
            let group_id = *group_ids.entry(label).or_insert(next_id);
            if group_id == sizes.len() {
                sizes.push(0);
            }
            sizes[group_id] += 1;
            points.push(datapoint.as_slice());
            membership.push(group_id);
        }

        let n_groups = sizes.len();
        let n_samples = points.len();
        if n_groups < 2 || n_groups > n_samples - 1 {
            return Err(Error::MetricUndefined { n_groups, n_samples });
        }
        Ok(Groups {
            points,
            membership,
            sizes,
        })
    }
}

impl<T: Float> QualityMetric<T> for Silhouette {
    fn name(&self) -> &str {
        "Silhouette Coefficient"
    }

    fn score(&self, data: &[Vec<T>], labels: &Labels) -> Result<T, Error> {
        self.coefficient(data, labels)
    }
}

/// A [`Silhouette`] that scores through [`Silhouette::coefficient_par`] when driven as a
/// [`QualityMetric`].
#[cfg(feature = "parallel")]
#[derive(Debug, Clone, PartialEq)]
pub struct ParallelSilhouette(pub Silhouette);

#[cfg(feature = "parallel")]
impl<T: Float + Send + Sync> QualityMetric<T> for ParallelSilhouette {
    fn name(&self) -> &str {
        "Silhouette Coefficient"
    }

    fn score(&self, data: &[Vec<T>], labels: &Labels) -> Result<T, Error> {
        self.0.coefficient_par(data, labels)
    }
}

/// The points being scored, each mapped to a dense group index.
pub(crate) struct Groups<'d, T> {
    points: Vec<&'d [T]>,
    membership: Vec<usize>,
    sizes: Vec<usize>,
}

impl<'d, T: Float> Groups<'d, T> {
    pub(crate) fn len(&self) -> usize {
        self.points.len()
    }

    pub(crate) fn sample_coefficient(&self, i: usize, dist_metric: DistanceMetric) -> T {
        let own_group = self.membership[i];
        if self.sizes[own_group] == 1 {
            return T::zero();
        }

        let mut dist_sums = vec![T::zero(); self.sizes.len()];
        for (j, other) in self.points.iter().enumerate() {
            if i == j {
                continue;
            }
            let group = self.membership[j];
            dist_sums[group] = dist_sums[group] + dist_metric.calc_dist(self.points[i], other);
        }

        let a = dist_sums[own_group] / self.as_float(self.sizes[own_group] - 1);
        let b = dist_sums
            .iter()
            .zip(&self.sizes)
            .enumerate()
            .filter(|(group, _)| *group != own_group)
            .map(|(_, (&sum, &size))| sum / self.as_float(size))
            .fold(T::infinity(), T::min);

        let max = a.max(b);
        if max > T::zero() {
            (b - a) / max
        } else {
            T::zero()
        }
    }

    fn as_float(&self, n: usize) -> T {
        T::from(n).unwrap_or(T::one())
    }
}
