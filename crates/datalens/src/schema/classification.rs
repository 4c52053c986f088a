//! Column classification from observed value types.

use serde::{Deserialize, Serialize};

use crate::input::Dataset;

/// Analytical kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// At least one finite number observed.
    Numeric,
    /// Everything that is not numeric.
    Categorical,
}

impl ColumnKind {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ColumnKind::Numeric => "Numeric",
            ColumnKind::Categorical => "Categorical",
        }
    }
}

/// Partition of a dataset's columns, each list in column order.
///
/// `numeric` and `categorical` are disjoint and together cover every
/// column. `boolean` is an independent tag: a column holding booleans is
/// usually also categorical, and can be numeric if it mixes in numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnClassification {
    pub numeric: Vec<String>,
    pub categorical: Vec<String>,
    pub boolean: Vec<String>,
}

impl ColumnClassification {
    /// Classify every column of the dataset.
    pub fn classify(dataset: &Dataset) -> Self {
        let mut classification = Self::default();

        for column in dataset.columns() {
            let mut has_number = false;
            let mut has_bool = false;

            for value in dataset.column_values(column) {
                has_number |= value.as_f64().is_some();
                has_bool |= value.is_bool();
                if has_number && has_bool {
                    break;
                }
            }

            if has_number {
                classification.numeric.push(column.clone());
            } else {
                classification.categorical.push(column.clone());
            }
            if has_bool {
                classification.boolean.push(column.clone());
            }
        }

        classification
    }

    /// Kind of the named column, if it was classified.
    pub fn kind_of(&self, column: &str) -> Option<ColumnKind> {
        if self.numeric.iter().any(|c| c == column) {
            Some(ColumnKind::Numeric)
        } else if self.categorical.iter().any(|c| c == column) {
            Some(ColumnKind::Categorical)
        } else {
            None
        }
    }

    /// Whether the named column carries the boolean tag.
    pub fn is_boolean(&self, column: &str) -> bool {
        self.boolean.iter().any(|c| c == column)
    }
}
