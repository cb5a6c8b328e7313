#![cfg(feature = "parallel")]
use super::Groups;
use crate::DistanceMetric;
use num_traits::Float;
use rayon::prelude::*;

pub(crate) fn mean_coefficient<T>(groups: &Groups<T>, dist_metric: DistanceMetric) -> T
where
    T: Float + Send + Sync,
{
    let total = (0..groups.len())
        .into_par_iter()
        .map(|i| groups.sample_coefficient(i, dist_metric))
        .reduce(T::zero, std::ops::Add::add);
    total / T::from(groups.len()).unwrap_or(T::one())
}
