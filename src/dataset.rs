use crate::{Error, Labels, ReportParams};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// A feature matrix read from a CSV file along with the cluster label of every row and,
/// when available, the known class of every row.
///
/// The file must have a header row. Which columns are features, labels and reference
/// classes is decided by [`ReportParams`].
#[derive(Debug, Clone, PartialEq)]
pub struct LabelledDataset {
    feature_names: Vec<String>,
    records: Vec<Vec<f64>>,
    labels: Labels,
    reference: Option<Reference>,
}

#[derive(Debug, Clone, PartialEq)]
struct Reference {
    names: Vec<String>,
    classes: Vec<usize>,
}

struct ColumnLayout {
    features: Vec<usize>,
    label: usize,
    reference: Option<usize>,
}

impl LabelledDataset {
    /// Reads a labelled dataset from a CSV file.
    pub fn from_path(path: impl AsRef<Path>, params: &ReportParams) -> Result<Self, Error> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading labelled dataset");
        let file = File::open(path)?;
        Self::from_reader(file, params)
    }

    /// Reads a labelled dataset from any CSV source.
    ///
    /// # Examples
    /// ```
    ///use cluster_summary::{LabelledDataset, ReportParams};
    ///
    ///let csv = "\
    ///sepal_length,petal_length,species,label
    ///5.1,1.4,setosa,0
    ///7.0,4.7,versicolor,1
    ///6.3,6.0,virginica,-1
    ///";
    ///let params = ReportParams::builder().feature_columns(["petal_length"]).build();
    ///let dataset = LabelledDataset::from_reader(csv.as_bytes(), &params).unwrap();
    ///assert_eq!(vec![vec![1.4], vec![4.7], vec![6.0]], dataset.records());
    ///assert_eq!(Some(&[0, 1, 2][..]), dataset.reference_classes());
    /// ```
    pub fn from_reader<R: Read>(reader: R, params: &ReportParams) -> Result<Self, Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);
        let headers = reader.headers()?.clone();
        let rows = reader.records().collect::<Result<Vec<StringRecord>, _>>()?;
        let layout = Self::resolve_columns(&headers, &rows, params)?;

        let mut records = Vec::new();
        let mut labels: Vec<i32> = Vec::new();
        let mut reference_ids: HashMap<String, usize> = HashMap::new();
        let mut reference_names = Vec::new();
        let mut classes = Vec::new();

        for (row, record) in rows.iter().enumerate() {
            let features = layout
                .features
                .iter()
                .map(|&column| Self::parse_field(record, &headers, column, row))
                .collect::<Result<Vec<f64>, Error>>()?;
            records.push(features);
            labels.push(Self::parse_field(record, &headers, layout.label, row)?);

            if let Some(column) = layout.reference {
                let name = record.get(column).unwrap_or_default();
                let next_id = reference_ids.len();
                let class = *reference_ids.entry(name.to_string()).or_insert_with(|| {
                    reference_names.push(name.to_string());
                    next_id
                });
                classes.push(class);
            }
        }

        if records.is_empty() {
            return Err(Error::EmptyDataset);
        }
        debug!(
            n_samples = records.len(),
            n_features = layout.features.len(),
            "read labelled dataset"
        );
        Ok(LabelledDataset {
            feature_names: layout
                .features
                .iter()
                .map(|&column| headers[column].to_string())
                .collect(),
            records,
            labels: Labels::with_noise_label(labels, params.noise_label),
            reference: layout.reference.map(|_| Reference {
                names: reference_names,
                classes,
            }),
        })
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// The feature matrix, one row per data point, columns in `feature_names` order.
    pub fn records(&self) -> &[Vec<f64>] {
        &self.records
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn n_samples(&self) -> usize {
        self.records.len()
    }

    /// The reference class of every data point, as an index into `reference_names`.
    pub fn reference_classes(&self) -> Option<&[usize]> {
        self.reference.as_ref().map(|reference| reference.classes.as_slice())
    }

    /// Names of the reference classes, in order of first appearance.
    pub fn reference_names(&self) -> Option<&[String]> {
        self.reference.as_ref().map(|reference| reference.names.as_slice())
    }

    fn resolve_columns(
        headers: &StringRecord,
        rows: &[StringRecord],
        params: &ReportParams,
    ) -> Result<ColumnLayout, Error> {
        let find = |name: &str| headers.iter().position(|header| header == name);

        let label = find(params.label_column.as_str())
            .ok_or_else(|| Error::UnknownColumn(params.label_column.clone()))?;
        let reference = match &params.reference_column {
            Some(name) => match find(name.as_str()) {
                Some(column) => Some(column),
                None if params.reference_required => {
                    return Err(Error::UnknownColumn(name.clone()))
                }
                None => None,
            },
            None => None,
        };

        let features = if params.feature_columns.is_empty() {
            (0..headers.len())
                .filter(|&column| column != label && Some(column) != reference)
                .filter(|&column| {
                    let numeric = rows.iter().all(|record| {
                        record
                            .get(column)
                            .is_some_and(|value| value.parse::<f64>().is_ok())
                    });
                    if !numeric {
                        debug!(column = &headers[column], "skipping non numeric column");
                    }
                    numeric
                })
                .collect::<Vec<_>>()
        } else {
            params
                .feature_columns
                .iter()
                .map(|name| find(name.as_str()).ok_or_else(|| Error::UnknownColumn(name.clone())))
                .collect::<Result<Vec<_>, _>>()?
        };
        if features.is_empty() {
            return Err(Error::NoFeatureColumns);
        }
        Ok(ColumnLayout {
            features,
            label,
            reference,
        })
    }

    fn parse_field<T: std::str::FromStr>(
        record: &StringRecord,
        headers: &StringRecord,
        column: usize,
        row: usize,
    ) -> Result<T, Error> {
        let value = record.get(column).unwrap_or_default();
        value.parse().map_err(|_| Error::InvalidValue {
            column: headers[column].to_string(),
            row,
            value: value.to_string(),
        })
    }
}
