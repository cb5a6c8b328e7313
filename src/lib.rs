//! Summaries and quality scores for density-based clustering results.
//!
//! Density-based algorithms such as HDBSCAN and DBSCAN label every data point with a cluster
//! id, or with a sentinel (conventionally -1) when the point is noise. Before results can be
//! reported it is necessary to know:
//!  1. How many distinct clusters were found. The number is an output of the algorithm, not
//!     an input as with KMeans;
//!  2. How many points were left as noise; and
//!  3. How good the clustering is, typically measured by the silhouette coefficient, and how
//!     well the clusters agree with any known classes (e.g. the species in the Iris dataset).
//!
//! This crate computes all three. Scaling the features and running the clustering algorithm
//! itself are left to other crates, plugged in through the [`Scaler`] and [`Clusterer`]
//! traits and chained with a [`Pipeline`].
//!
//! # Examples
//! ```
//!use cluster_summary::{summarize, Labels, Silhouette};
//!
//!let data: Vec<Vec<f64>> = vec![
//!    vec![1.5, 2.2],
//!    vec![1.0, 1.1],
//!    vec![1.2, 1.4],
//!    vec![0.8, 1.0],
//!    vec![1.1, 1.0],
//!    vec![3.7, 4.0],
//!    vec![3.9, 3.9],
//!    vec![3.6, 4.1],
//!    vec![3.8, 3.9],
//!    vec![4.0, 4.1],
//!    vec![10.0, 10.0],
//!];
//!// As labelled by an HDBSCAN run with default hyper parameters
//!let labels = vec![0, 0, 0, 0, 0, 1, 1, 1, 1, 1, -1];
//!assert_eq!((2, 1), summarize(&labels));
//!
//!let score = Silhouette::default().coefficient(&data, &Labels::new(labels)).unwrap();
//!assert!(score > 0.5);
//! ```

pub use crate::collaborators::{Clusterer, PrecomputedLabels, QualityMetric, Scaler, Unscaled};
pub use crate::comparison::Contingency;
pub use crate::dataset::LabelledDataset;
pub use crate::distance::DistanceMetric;
pub use crate::error::{Error, Result};
pub use crate::labels::{Labels, NOISE_LABEL};
pub use crate::params::{ReportParamBuilder, ReportParams};
pub use crate::pipeline::{Pipeline, PipelineOutput};
pub use crate::report::ClusterReport;
#[cfg(feature = "parallel")]
pub use crate::silhouette::ParallelSilhouette;
pub use crate::silhouette::Silhouette;
pub use crate::summary::{summarize, summarize_with_noise, ClusterSummary};

mod collaborators;
mod comparison;
mod dataset;
mod distance;
mod error;
mod labels;
mod params;
mod pipeline;
mod report;
mod silhouette;
mod summary;
mod validation;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_hdbscan_output() {
        let labels = Labels::new(vec![0, 0, 0, 0, 0, 1, 1, 1, 1, 1, -1]);
        let summary = labels.summary();
        assert_eq!(2, summary.cluster_count());
        assert_eq!(1, summary.noise_count());
        assert_eq!(10, summary.clustered_count());
    }

    #[test]
    fn report_from_dataset() {
        let csv = "\
x,y,label
1.5,2.2,0
1.0,1.1,0
1.2,1.4,0
3.7,4.0,1
3.9,3.9,1
3.6,4.1,1
10.0,10.0,-1
";
        let params = ReportParams::default();
        let dataset = LabelledDataset::from_reader(csv.as_bytes(), &params).unwrap();
        let pipeline = Pipeline::new(
            Unscaled,
            PrecomputedLabels::new(dataset.labels().clone()),
            params.silhouette(),
        );
        let output = pipeline.run(dataset.records()).unwrap();
        assert_eq!(2, output.report.cluster_count());
        assert_eq!(1, output.report.noise_count());
        assert!(output.report.contingency().is_none());
        assert!(output.report.score() > 0.0 && output.report.score() <= 1.0);
    }
}
