//! Completeness assessment.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::input::Dataset;

use super::round1;

/// Per-column and overall completeness.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataQuality {
    /// Share of non-missing values per column, 0-100.
    pub completeness: IndexMap<String, f64>,
    /// Number of missing (null or empty) values per column.
    pub missing: IndexMap<String, usize>,
    /// Unweighted mean of the per-column completeness, one decimal place.
    pub overall: f64,
}

impl DataQuality {
    /// Assess every column of the dataset.
    ///
    /// An empty dataset yields empty maps and an overall score of 0.
    pub fn assess(dataset: &Dataset) -> Self {
        let total_rows = dataset.row_count();
        if total_rows == 0 {
            return Self::default();
        }

        let mut completeness = IndexMap::with_capacity(dataset.column_count());
        let mut missing = IndexMap::with_capacity(dataset.column_count());

        for column in dataset.columns() {
            let missing_count = dataset
                .column_values(column)
                .filter(|v| v.is_missing())
                .count();
            let present = total_rows - missing_count;

            completeness.insert(column.clone(), present as f64 / total_rows as f64 * 100.0);
            missing.insert(column.clone(), missing_count);
        }

        let overall = if completeness.is_empty() {
            0.0
        } else {
            round1(completeness.values().sum::<f64>() / completeness.len() as f64)
        };

        Self {
            completeness,
            missing,
            overall,
        }
    }

    /// Columns whose completeness is below `threshold` percent.
    pub fn incomplete_columns(&self, threshold: f64) -> impl Iterator<Item = (&str, f64)> {
        self.completeness
            .iter()
            .filter(move |(_, pct)| **pct < threshold)
            .map(|(name, pct)| (name.as_str(), *pct))
    }
}
