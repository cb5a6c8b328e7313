use crate::collaborators::{Clusterer, QualityMetric, Scaler};
use crate::validation::DataValidator;
use crate::{ClusterReport, Contingency, Error, Labels};
use num_traits::Float;
use tracing::{debug, info};

/// Chains the steps of a clustering experiment: scale the features, cluster them, then
/// summarise and score the result.
///
/// # Examples
/// ```
///use cluster_summary::{Labels, Pipeline, PrecomputedLabels, Silhouette, Unscaled};
///
///let data = vec![vec![0.0], vec![1.0], vec![10.0], vec![11.0], vec![50.0]];
///let labels = Labels::new(vec![0, 0, 1, 1, -1]);
///let pipeline = Pipeline::new(Unscaled, PrecomputedLabels::new(labels), Silhouette::default());
///let output = pipeline.run(&data).unwrap();
///assert_eq!(2, output.report.cluster_count());
///assert_eq!(1, output.report.noise_count());
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline<S, C, Q> {
    scaler: S,
    clusterer: C,
    metric: Q,
}

/// The intermediate and final results of a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOutput<T> {
    /// The feature matrix as it was passed to the clusterer.
    pub scaled: Vec<Vec<T>>,
    pub labels: Labels,
    pub report: ClusterReport,
}

impl<S, C, Q> Pipeline<S, C, Q> {
    pub fn new(scaler: S, clusterer: C, metric: Q) -> Self {
        Pipeline {
            scaler,
            clusterer,
            metric,
        }
    }

    /// Runs every step on `data`. The first failing step's error is returned unchanged.
    pub fn run<T>(&self, data: &[Vec<T>]) -> Result<PipelineOutput<T>, Error>
    where
        T: Float,
        S: Scaler<T>,
        C: Clusterer<T>,
        Q: QualityMetric<T>,
    {
        DataValidator::new(data).validate_input_data()?;

        let scaled = self.scaler.scale(data)?;
        if scaled.len() != data.len() {
            return Err(Error::WrongDimension(format!(
                "Scaler returned {} rows for {} data points",
                scaled.len(),
                data.len()
            )));
        }
        debug!(n_samples = scaled.len(), "scaled features");

        let labels = self.clusterer.cluster(&scaled)?;
        DataValidator::new(&scaled).validate_labels(labels.as_slice())?;
        let summary = labels.summary();
        info!(
            clusters = summary.cluster_count(),
            noise = summary.noise_count(),
            "clustered data"
        );

        let score = self.metric.score(&scaled, &labels)?;
        let score = score.to_f64().unwrap_or(f64::NAN);
        debug!(metric = self.metric.name(), score, "scored clustering");

        let report = ClusterReport::new(summary, self.metric.name(), score);
        Ok(PipelineOutput {
            scaled,
            labels,
            report,
        })
    }

    /// Runs every step on `data`, then compares the clusters found against the known class
    /// of each data point.
    ///
    /// # Parameters
    /// * `data` - the feature matrix.
    /// * `reference` - the known class of each row of `data`, as an index into
    ///                 `reference_names`.
    /// * `reference_names` - display names of the classes.
    pub fn run_with_reference<T>(
        &self,
        data: &[Vec<T>],
        reference: &[usize],
        reference_names: Vec<String>,
    ) -> Result<PipelineOutput<T>, Error>
    where
        T: Float,
        S: Scaler<T>,
        C: Clusterer<T>,
        Q: QualityMetric<T>,
    {
        let mut output = self.run(data)?;
        let contingency = Contingency::new(&output.labels, reference, reference_names)?;
        debug!(purity = contingency.purity(), "compared clusters with reference");
        output.report = output.report.with_contingency(contingency);
        Ok(output)
    }
}
