use crate::{ClusterSummary, Contingency};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Everything worth reporting about one clustering run: the cluster and noise counts, the
/// quality score, and optionally how the clusters line up with known classes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterReport {
    summary: ClusterSummary,
    metric: String,
    score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    purity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    contingency: Option<Contingency>,
}

impl ClusterReport {
    /// # Parameters
    /// * `summary` - cluster and noise counts of the assignment.
    /// * `metric` - name of the quality metric that produced `score`.
    /// * `score` - the quality score.
    pub fn new(summary: ClusterSummary, metric: impl Into<String>, score: f64) -> Self {
        ClusterReport {
            summary,
            metric: metric.into(),
            score,
            purity: None,
            contingency: None,
        }
    }

    /// Attaches a comparison of the clusters against reference classes.
    pub fn with_contingency(mut self, contingency: Contingency) -> Self {
        self.purity = contingency.purity();
        self.contingency = Some(contingency);
        self
    }

    pub fn summary(&self) -> &ClusterSummary {
        &self.summary
    }

    pub fn cluster_count(&self) -> usize {
        self.summary.cluster_count()
    }

    pub fn noise_count(&self) -> usize {
        self.summary.noise_count()
    }

    pub fn metric(&self) -> &str {
        &self.metric
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn contingency(&self) -> Option<&Contingency> {
        self.contingency.as_ref()
    }
}

impl Display for ClusterReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.summary)?;
        write!(f, "{}: {:.3}", self.metric, self.score)?;
        if let Some(purity) = self.purity {
            write!(f, "\nPurity against reference: {purity:.3}")?;
        }
        if let Some(contingency) = &self.contingency {
            write!(f, "\n\n{contingency}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Labels;

    #[test]
    fn display_without_reference() {
        let labels = Labels::new(vec![0, 0, 1, 1, -1]);
        let report = ClusterReport::new(labels.summary(), "Silhouette Coefficient", 0.62481);
        assert_eq!(
            "Estimated number of clusters: 2\n\
            Estimated number of noise points: 1\n\
            Silhouette Coefficient: 0.625",
            report.to_string()
        );
    }

    #[test]
    fn display_with_reference() {
        let labels = Labels::new(vec![0, 0, 1]);
        let table = Contingency::new(&labels, &[0, 0, 1], Vec::new()).unwrap();
        let report = ClusterReport::new(labels.summary(), "Silhouette Coefficient", 0.5)
            .with_contingency(table);
        let text = report.to_string();
        assert!(text.contains("Purity against reference: 1.000"));
        assert!(text.ends_with(&report.contingency().unwrap().to_string()));
    }

    #[test]
    fn serialize() {
        let labels = Labels::new(vec![0, -1]);
        let report = ClusterReport::new(labels.summary(), "Silhouette Coefficient", 0.25);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(1, json["summary"]["cluster_count"]);
        assert_eq!(1, json["summary"]["noise_count"]);
        assert_eq!(0.25, json["score"]);
        assert!(json.get("contingency").is_none());
    }
}
