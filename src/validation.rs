use crate::Error;
use num_traits::Float;

/// Checks a feature matrix, and optionally the labels assigned to it, before any
/// distances are computed from it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DataValidator<'a, T> {
    data: &'a [Vec<T>],
}

impl<'a, T: Float> DataValidator<'a, T> {
    pub(crate) fn new(data: &'a [Vec<T>]) -> Self {
        Self { data }
    }

    pub(crate) fn validate_input_data(&self) -> Result<(), Error> {
        if self.data.is_empty() {
            return Err(Error::EmptyDataset);
        }
        let dims_0th = self.data[0].len();
        for (n, datapoint) in self.data.iter().enumerate() {
            if datapoint.iter().any(|element| !element.is_finite()) {
                return Err(Error::NonFiniteCoordinate(format!(
                    "{n}th vector contains non-finite element(s)"
                )));
            }
            let dims_nth = datapoint.len();
            if dims_nth != dims_0th {
                return Err(Error::WrongDimension(format!(
                    "0th data point has {dims_0th} dimensions, but {n}th has {dims_nth}"
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn validate_labels(&self, labels: &[i32]) -> Result<(), Error> {
        if labels.len() != self.data.len() {
            return Err(Error::LabelCountMismatch {
                expected: self.data.len(),
                found: labels.len(),
            });
        }
        Ok(())
    }
}
