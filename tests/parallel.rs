#![cfg(feature = "parallel")]
use cluster_summary::{Error, Labels, ParallelSilhouette, QualityMetric, Silhouette};

mod common;

macro_rules! define_parallel_test {
    ($test_fn:ident) => {
        #[test]
        fn $test_fn() {
            fn score_fn(data: &[Vec<f64>], labels: &Labels) -> Result<f64, Error> {
                Silhouette::default().coefficient_par(data, labels)
            }

            common::$test_fn(score_fn);
        }
    };
}

define_parallel_test!(test_two_clusters);
define_parallel_test!(test_hdbscan_labels);
define_parallel_test!(test_swapped_labels_score_lower);
define_parallel_test!(test_single_cluster_undefined);
define_parallel_test!(test_empty_data);
define_parallel_test!(test_mismatched_dimensions);
define_parallel_test!(test_non_finite_coordinate);
define_parallel_test!(test_iris_fixture);

#[test]
fn serial_and_parallel_agree() {
    let data: Vec<Vec<f64>> = (0..200)
        .map(|n| vec![(n % 7) as f64 * 1.3, (n / 7) as f64 * 0.4])
        .collect();
    let labels = Labels::new((0..200).map(|n| (n % 4) as i32 - 1).collect());
    let silhouette = Silhouette::default();
    let serial = silhouette.coefficient(&data, &labels).unwrap();
    let parallel = ParallelSilhouette(silhouette).score(&data, &labels).unwrap();
    assert!((serial - parallel).abs() < 1e-9);
}
