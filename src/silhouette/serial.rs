use super::Groups;
use crate::DistanceMetric;
use num_traits::Float;

pub(crate) fn mean_coefficient<T: Float>(groups: &Groups<T>, dist_metric: DistanceMetric) -> T {
    let total = (0..groups.len())
        .map(|i| groups.sample_coefficient(i, dist_metric))
        .fold(T::zero(), std::ops::Add::add);
    total / T::from(groups.len()).unwrap_or(T::one())
}
