use anyhow::Context;
use clap::Parser;
use cluster_summary::{
    ClusterReport, DistanceMetric, LabelledDataset, Pipeline, PrecomputedLabels, QualityMetric,
    ReportParams, Unscaled, NOISE_LABEL,
};
use std::path::PathBuf;
use tracing::Level;

/// Summarise a clustering: number of clusters, number of noise points, silhouette
/// coefficient, and agreement with known classes.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// CSV file with a header row, one row per data point. Must contain the cluster label
    /// column and the feature columns the clustering was run on.
    path: PathBuf,

    /// Feature column to score on. Repeat for several. Defaults to every numeric column
    /// other than the label and reference columns.
    #[arg(short, long = "feature")]
    features: Vec<String>,

    /// Column holding the cluster labels.
    #[arg(long, default_value = "label")]
    label_column: String,

    /// Column holding the known class of each point. Defaults to "species" if present.
    #[arg(long, conflicts_with = "no_reference")]
    reference_column: Option<String>,

    /// Skip the comparison against known classes.
    #[arg(long)]
    no_reference: bool,

    /// Label marking a point as noise.
    #[arg(long, default_value_t = NOISE_LABEL, allow_negative_numbers = true)]
    noise_label: i32,

    /// Distance metric for the silhouette coefficient: euclidean or manhattan.
    #[arg(long, default_value = "euclidean")]
    metric: DistanceMetric,

    /// Leave noise points out of the silhouette coefficient.
    #[arg(long)]
    ignore_noise: bool,

    /// Score on the rayon thread pool. Requires the `parallel` feature.
    #[arg(long)]
    parallel: bool,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// Increase logging verbosity. Repeat for more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn report_params(&self) -> ReportParams {
        let mut builder = ReportParams::builder()
            .feature_columns(self.features.iter().cloned())
            .label_column(self.label_column.clone())
            .noise_label(self.noise_label)
            .dist_metric(self.metric)
            .ignore_noise(self.ignore_noise);
        if self.no_reference {
            builder = builder.no_reference();
        } else if let Some(column) = &self.reference_column {
            builder = builder.reference_column(column.clone());
        }
        builder.build()
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    let params = cli.report_params();
    let dataset = LabelledDataset::from_path(&cli.path, &params)
        .with_context(|| format!("Unable to read {}", cli.path.display()))?;

    let report = if cli.parallel {
        score_parallel(&dataset, &params)?
    } else {
        score(&dataset, params.silhouette())?
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}

fn score<Q: QualityMetric<f64>>(dataset: &LabelledDataset, metric: Q) -> anyhow::Result<ClusterReport> {
    let clusterer = PrecomputedLabels::new(dataset.labels().clone());
    let pipeline = Pipeline::new(Unscaled, clusterer, metric);
    let output = match (dataset.reference_classes(), dataset.reference_names()) {
        (Some(classes), Some(names)) => {
            pipeline.run_with_reference(dataset.records(), classes, names.to_vec())
        }
        _ => pipeline.run(dataset.records()),
    };
    Ok(output.context("Unable to score the clustering")?.report)
}

#[cfg(feature = "parallel")]
fn score_parallel(dataset: &LabelledDataset, params: &ReportParams) -> anyhow::Result<ClusterReport> {
    score(dataset, cluster_summary::ParallelSilhouette(params.silhouette()))
}

#[cfg(not(feature = "parallel"))]
fn score_parallel(dataset: &LabelledDataset, params: &ReportParams) -> anyhow::Result<ClusterReport> {
    tracing::warn!("built without the `parallel` feature, scoring serially");
    score(dataset, params.silhouette())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(["cluster-summary"].iter().chain(args)).unwrap()
    }

    #[test]
    fn defaults() {
        let cli = parse(&["iris.csv"]);
        let params = cli.report_params();
        assert_eq!(ReportParams::default(), params);
        assert_eq!(PathBuf::from("iris.csv"), cli.path);
        assert_eq!(Level::WARN, cli.log_level());
        assert!(!cli.json && !cli.parallel);
    }

    #[test]
    fn flags_map_onto_params() {
        let cli = parse(&[
            "iris.csv",
            "--feature",
            "petal_length",
            "-f",
            "petal_width",
            "--label-column",
            "cluster",
            "--reference-column",
            "variety",
            "--metric",
            "manhattan",
            "--ignore-noise",
            "-vv",
        ]);
        let params = cli.report_params();
        assert_eq!(["petal_length", "petal_width"], params.feature_columns());
        assert_eq!("cluster", params.label_column());
        assert_eq!(Some("variety"), params.reference_column());
        assert_eq!(DistanceMetric::Manhattan, params.dist_metric());
        assert!(params.ignore_noise());
        assert_eq!(Level::DEBUG, cli.log_level());
    }

    #[test]
    fn negative_noise_label() {
        let params = parse(&["iris.csv", "--noise-label", "-2"]).report_params();
        assert_eq!(-2, params.noise_label());
    }

    #[test]
    fn no_reference() {
        let params = parse(&["iris.csv", "--no-reference"]).report_params();
        assert_eq!(None, params.reference_column());
    }

    #[test]
    fn no_reference_conflicts_with_reference_column() {
        let result = Cli::try_parse_from([
            "cluster-summary",
            "iris.csv",
            "--no-reference",
            "--reference-column",
            "species",
        ]);
        assert_eq!(ErrorKind::ArgumentConflict, result.unwrap_err().kind());
    }

    #[test]
    fn unknown_metric() {
        let result = Cli::try_parse_from(["cluster-summary", "iris.csv", "--metric", "cosine"]);
        assert_eq!(ErrorKind::ValueValidation, result.unwrap_err().kind());
    }
}
