use cluster_summary::{Error, LabelledDataset, Labels, ReportParams};

pub type ScoreFn = fn(&[Vec<f64>], &Labels) -> Result<f64, Error>;

fn assert_close(expected: f64, actual: f64) {
    assert!(
        (expected - actual).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub fn test_two_clusters(score_fn: ScoreFn) {
    let data = vec![vec![0.0], vec![1.0], vec![10.0], vec![11.0]];
    let labels = Labels::new(vec![0, 0, 1, 1]);
    let score = score_fn(&data, &labels).unwrap();
    assert_close(1.0 - (1.0 / 10.5 + 1.0 / 9.5) / 2.0, score);
}

pub fn test_hdbscan_labels(score_fn: ScoreFn) {
    let data = vec![
        vec![1.5, 2.2],
        vec![1.0, 1.1],
        vec![1.2, 1.4],
        vec![0.8, 1.0],
        vec![1.1, 1.0],
        vec![3.7, 4.0],
        vec![3.9, 3.9],
        vec![3.6, 4.1],
        vec![3.8, 3.9],
        vec![4.0, 4.1],
        vec![10.0, 10.0],
    ];
    let labels = Labels::new(vec![0, 0, 0, 0, 0, 1, 1, 1, 1, 1, -1]);
    let score = score_fn(&data, &labels).unwrap();
    assert!((0.79..0.80).contains(&score), "score was {score}");
}

pub fn test_swapped_labels_score_lower(score_fn: ScoreFn) {
    let data = vec![vec![0.0], vec![1.0], vec![10.0], vec![11.0]];
    let good = score_fn(&data, &Labels::new(vec![0, 0, 1, 1])).unwrap();
    let bad = score_fn(&data, &Labels::new(vec![0, 1, 0, 1])).unwrap();
    assert!(bad < 0.0);
    assert!(good > bad);
}

pub fn test_single_cluster_undefined(score_fn: ScoreFn) {
    let data = vec![vec![0.0], vec![1.0], vec![2.0]];
    let result = score_fn(&data, &Labels::new(vec![3, 3, 3]));
    assert!(matches!(result, Err(Error::MetricUndefined { n_groups: 1, .. })));
}

pub fn test_empty_data(score_fn: ScoreFn) {
    let data: Vec<Vec<f64>> = Vec::new();
    let result = score_fn(&data, &Labels::new(Vec::new()));
    assert!(matches!(result, Err(Error::EmptyDataset)));
}

pub fn test_mismatched_dimensions(score_fn: ScoreFn) {
    let data = vec![vec![1.5, 2.2], vec![1.0, 1.1], vec![1.2]];
    let result = score_fn(&data, &Labels::new(vec![0, 0, 1]));
    assert!(matches!(result, Err(Error::WrongDimension(..))));
}

pub fn test_non_finite_coordinate(score_fn: ScoreFn) {
    let data = vec![vec![1.5, f64::INFINITY], vec![1.0, 1.1], vec![1.2, 1.0]];
    let result = score_fn(&data, &Labels::new(vec![0, 0, 1]));
    assert!(matches!(result, Err(Error::NonFiniteCoordinate(..))));
}

pub fn test_iris_fixture(score_fn: ScoreFn) {
    let params = ReportParams::builder()
        .feature_columns(["petal_length", "petal_width"])
        .build();
    let dataset = LabelledDataset::from_path(iris_fixture_path(), &params).unwrap();
    let score = score_fn(dataset.records(), dataset.labels()).unwrap();
    assert!(score > 0.0 && score <= 1.0, "score was {score}");
}

pub fn iris_fixture_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/iris_hdbscan.csv")
}
