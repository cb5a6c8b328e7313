use crate::{DistanceMetric, Silhouette, NOISE_LABEL};
use tracing::warn;

// Defaults for parameters
const LABEL_COLUMN_DEFAULT: &str = "label";
const REFERENCE_COLUMN_DEFAULT: &str = "species";
const NOISE_LABEL_DEFAULT: i32 = NOISE_LABEL;
const DISTANCE_METRIC_DEFAULT: DistanceMetric = DistanceMetric::Euclidean;
const IGNORE_NOISE_DEFAULT: bool = false;

/// Describes where to find the features, labels and reference classes in a labelled
/// dataset, and how to score the labels. Use `ReportParams::default()` unless the dataset
/// departs from the defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportParams {
    pub(crate) feature_columns: Vec<String>,
    pub(crate) label_column: String,
    pub(crate) reference_column: Option<String>,
    pub(crate) reference_required: bool,
    pub(crate) noise_label: i32,
    pub(crate) dist_metric: DistanceMetric,
    pub(crate) ignore_noise: bool,
}

/// Builder object to set custom report parameters.
#[derive(Debug, Clone, Default)]
pub struct ReportParamBuilder {
    feature_columns: Option<Vec<String>>,
    label_column: Option<String>,
    reference_column: Option<Option<String>>,
    noise_label: Option<i32>,
    dist_metric: Option<DistanceMetric>,
    ignore_noise: Option<bool>,
}

impl Default for ReportParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ReportParams {
    /// Enters the builder pattern, allowing custom parameters to be set using
    /// various setter methods.
    ///
    /// # Returns
    /// * the parameter builder
    pub fn builder() -> ReportParamBuilder {
        ReportParamBuilder::default()
    }

    /// The feature columns to read. Empty means every numeric column that is neither the
    /// label nor the reference column.
    pub fn feature_columns(&self) -> &[String] {
        &self.feature_columns
    }

    pub fn label_column(&self) -> &str {
        &self.label_column
    }

    pub fn reference_column(&self) -> Option<&str> {
        self.reference_column.as_deref()
    }

    pub fn noise_label(&self) -> i32 {
        self.noise_label
    }

    pub fn dist_metric(&self) -> DistanceMetric {
        self.dist_metric
    }

    pub fn ignore_noise(&self) -> bool {
        self.ignore_noise
    }

    /// The silhouette metric configured by these parameters.
    pub fn silhouette(&self) -> Silhouette {
        let silhouette = Silhouette::new(self.dist_metric);
        if self.ignore_noise {
            silhouette.ignoring_noise()
        } else {
            silhouette
        }
    }
}

impl ReportParamBuilder {
    /// Sets the columns that make up the feature matrix, in the order given. Clustering
    /// is usually run on a subset of the available measurements, e.g. two of the four
    /// Iris measurements. Defaults to every numeric column other than the label and
    /// reference columns.
    ///
    /// # Parameters
    /// * feature_columns - names of the feature columns
    ///
    /// # Returns
    /// * the parameter builder
    pub fn feature_columns<I, S>(mut self, feature_columns: I) -> ReportParamBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.feature_columns = Some(feature_columns.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the column holding the cluster label of each data point. Defaults to "label".
    pub fn label_column(mut self, label_column: impl Into<String>) -> ReportParamBuilder {
        self.label_column = Some(label_column.into());
        self
    }

    /// Sets the column holding the known class of each data point. Once set explicitly,
    /// the column must be present. Defaults to "species", used only if present.
    pub fn reference_column(mut self, reference_column: impl Into<String>) -> ReportParamBuilder {
        self.reference_column = Some(Some(reference_column.into()));
        self
    }

    /// Disables the comparison against reference classes.
    pub fn no_reference(mut self) -> ReportParamBuilder {
        self.reference_column = Some(None);
        self
    }

    /// Sets the label that marks a data point as noise. Defaults to -1.
    pub fn noise_label(mut self, noise_label: i32) -> ReportParamBuilder {
        self.noise_label = Some(noise_label);
        self
    }

    /// Sets the distance metric used when scoring the clustering. Defaults to Euclidean.
    pub fn dist_metric(mut self, dist_metric: DistanceMetric) -> ReportParamBuilder {
        self.dist_metric = Some(dist_metric);
        self
    }

    /// Sets whether noise points are left out of the quality score. Defaults to false.
    pub fn ignore_noise(mut self, ignore_noise: bool) -> ReportParamBuilder {
        self.ignore_noise = Some(ignore_noise);
        self
    }

    /// Finishes the building of the parameters. Feature columns that clash with the label
    /// or reference column, or that are listed twice, are dropped with a warning.
    ///
    /// # Returns
    /// * The completed report parameters.
    pub fn build(self) -> ReportParams {
        let label_column = self
            .label_column
            .unwrap_or_else(|| String::from(LABEL_COLUMN_DEFAULT));
        let (reference_column, reference_required) = match self.reference_column {
            Some(column) => (column, true),
            None => (Some(String::from(REFERENCE_COLUMN_DEFAULT)), false),
        };
        let feature_columns = Self::validate_feature_columns(
            self.feature_columns.unwrap_or_default(),
            &label_column,
            reference_column.as_deref(),
        );
        ReportParams {
            feature_columns,
            label_column,
            reference_column,
            reference_required,
            noise_label: self.noise_label.unwrap_or(NOISE_LABEL_DEFAULT),
            dist_metric: self.dist_metric.unwrap_or(DISTANCE_METRIC_DEFAULT),
            ignore_noise: self.ignore_noise.unwrap_or(IGNORE_NOISE_DEFAULT),
        }
    }

    fn validate_feature_columns(
        columns: Vec<String>,
        label_column: &str,
        reference_column: Option<&str>,
    ) -> Vec<String> {
        let mut valid: Vec<String> = Vec::with_capacity(columns.len());
        for column in columns {
            if column == label_column || Some(column.as_str()) == reference_column {
                warn!(%column, "feature column is also the label or reference column. Ignored.");
            } else if valid.contains(&column) {
                warn!(%column, "feature column listed more than once. Ignored.");
            } else {
                valid.push(column);
            }
        }
        valid
    }
}
