use crate::{Error, Labels};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Cross tabulation of a cluster assignment against known reference classes, such as the
/// species of each flower in the Iris dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contingency {
    reference_names: Vec<String>,
    noise_label: i32,
    counts: BTreeMap<i32, Vec<usize>>,
}

impl Contingency {
    /// Counts how many points of each reference class fall in each cluster.
    ///
    /// # Parameters
    /// * `labels` - the cluster assignment.
    /// * `reference` - the known class of each point, as an index into `reference_names`.
    /// * `reference_names` - display names of the classes. Classes without a name are
    ///                       displayed by index. A class index must be below the larger
    ///                       of the number of names and the number of points.
    ///
    /// # Examples
    /// ```
    ///use cluster_summary::{Contingency, Labels};
    ///
    ///let labels = Labels::new(vec![0, 0, 1, -1]);
    ///let species = [0, 0, 1, 1];
    ///let names = vec![String::from("setosa"), String::from("versicolor")];
    ///let table = Contingency::new(&labels, &species, names).unwrap();
    ///assert_eq!(2, table.count(0, 0));
    ///assert_eq!(1, table.count(-1, 1));
    ///assert_eq!(Some(1.0), table.purity());
    /// ```
    pub fn new(
        labels: &Labels,
        reference: &[usize],
        mut reference_names: Vec<String>,
    ) -> Result<Self, Error> {
        if labels.len() != reference.len() {
            return Err(Error::LabelCountMismatch {
                expected: labels.len(),
                found: reference.len(),
            });
        }
        // A point can only introduce one class, so unnamed classes are bounded by the
        // number of points.
        let bound = reference_names.len().max(reference.len());
        let out_of_range = reference
            .iter()
            .enumerate()
            .find(|(_, class)| **class >= bound);
        if let Some((row, &class)) = out_of_range {
            return Err(Error::ReferenceOutOfRange { row, class, bound });
        }
        let n_classes = reference
            .iter()
            .map(|&class| class + 1)
            .max()
            .unwrap_or(0)
            .max(reference_names.len());
        for class in reference_names.len()..n_classes {
            reference_names.push(class.to_string());
        }

        let mut counts: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
        for (&label, &class) in labels.as_slice().iter().zip(reference) {
            counts.entry(label).or_insert_with(|| vec![0; n_classes])[class] += 1;
        }
        Ok(Contingency {
            reference_names,
            noise_label: labels.noise_label(),
            counts,
        })
    }

    /// The labels present in the assignment, in ascending order.
    pub fn labels(&self) -> impl Iterator<Item = i32> + '_ {
        self.counts.keys().copied()
    }

    pub fn reference_names(&self) -> &[String] {
        &self.reference_names
    }

    pub fn count(&self, label: i32, class: usize) -> usize {
        self.counts
            .get(&label)
            .and_then(|row| row.get(class))
            .copied()
            .unwrap_or(0)
    }

    /// The most common reference class within a cluster. Ties go to the lower class index.
    pub fn majority(&self, label: i32) -> Option<usize> {
        let row = self.counts.get(&label)?;
        row.iter()
            .enumerate()
            .fold(None, |best: Option<(usize, usize)>, (class, &count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((class, count)),
            })
            .map(|(class, _)| class)
    }

    /// Share of clustered points whose reference class is the majority class of their
    /// cluster. Noise is left out. `None` if no point was clustered.
    pub fn purity(&self) -> Option<f64> {
        let (matched, total) = self
            .counts
            .iter()
            .filter(|(label, _)| **label != self.noise_label)
            .fold((0, 0), |(matched, total), (_, row)| {
                let largest = row.iter().copied().max().unwrap_or(0);
                (matched + largest, total + row.iter().sum::<usize>())
            });
        if total == 0 {
            None
        } else {
            Some(matched as f64 / total as f64)
        }
    }
}

impl Display for Contingency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let widths: Vec<usize> = self
            .reference_names
            .iter()
            .map(|name| name.len().max(5))
            .collect();
        write!(f, "{:<8}", "cluster")?;
        for (name, &width) in self.reference_names.iter().zip(&widths) {
            write!(f, "  {name:>width$}")?;
        }
        for (label, row) in &self.counts {
            writeln!(f)?;
            if *label == self.noise_label {
                write!(f, "{:<8}", "noise")?;
            } else {
                write!(f, "{label:<8}")?;
            }
            for (count, &width) in row.iter().zip(&widths) {
                write!(f, "  {count:>width$}")?;
            }
        }
        Ok(())
    }
}
