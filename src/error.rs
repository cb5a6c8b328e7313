use thiserror::Error;

/// Errors arising from invalid input data or from a failing collaborator
/// (clusterer, scaler, quality metric, data source).
#[derive(Debug, Error)]
pub enum Error {
    #[error("The dataset provided is empty")]
    EmptyDataset,

    #[error("Input vectors have mismatched dimensions: {0}")]
    WrongDimension(String),

    #[error("Non finite coordinate: {0}")]
    NonFiniteCoordinate(String),

    /// The number of labels does not match the number of data points.
    #[error("Expected {expected} labels, one per data point, but found {found}")]
    LabelCountMismatch { expected: usize, found: usize },

    /// The quality metric is not defined for this assignment, e.g. the silhouette
    /// coefficient with fewer than two groups.
    #[error(
        "Quality metric is undefined for {n_groups} label group(s) over {n_samples} samples \
        (valid values are 2 to n_samples - 1 inclusive)"
    )]
    MetricUndefined { n_groups: usize, n_samples: usize },

    #[error("Column '{0}' not found")]
    UnknownColumn(String),

    #[error("Invalid value '{value}' in column '{column}' at row {row}")]
    InvalidValue {
        column: String,
        row: usize,
        value: String,
    },

    #[error("No feature columns left once the label and reference columns are removed")]
    NoFeatureColumns,

    /// A reference class index beyond any class the reference could name.
    #[error("Reference class {class} at row {row} is out of range, expected below {bound}")]
    ReferenceOutOfRange { row: usize, class: usize, bound: usize },

    #[error("Unknown distance metric '{0}', expected 'euclidean' or 'manhattan'")]
    UnknownMetric(String),

    /// An external collaborator failed. Its message is passed through untouched.
    #[error("{0}")]
    Collaborator(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;
