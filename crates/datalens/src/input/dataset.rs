//! Row-oriented dataset handed to the analysis engine.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{DataLensError, Result};

use super::value::Value;

static NULL: Value = Value::Null;

/// A single record: column name to typed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// 1-based ordinal assigned by ingestion.
    pub id: usize,
    /// Cell values keyed by column name.
    pub cells: IndexMap<String, Value>,
}

impl Row {
    /// Create a row from its ordinal and cells.
    pub fn new(id: usize, cells: IndexMap<String, Value>) -> Self {
        Self { id, cells }
    }

    /// Build a row from `(column, value)` pairs.
    pub fn from_pairs<K, V>(id: usize, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let cells = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { id, cells }
    }

    /// Get the value for a column. Absent keys read as [`Value::Null`].
    pub fn get(&self, column: &str) -> &Value {
        self.cells.get(column).unwrap_or(&NULL)
    }
}

/// Ordered rows plus the ordered column list.
///
/// Construction enforces that every row key is a listed column, so the
/// engine can trust the column list without re-checking. Deserialization
/// goes through the same checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDataset")]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Row>,
}

/// Unvalidated wire form of a [`Dataset`].
#[derive(Deserialize)]
struct RawDataset {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl TryFrom<RawDataset> for Dataset {
    type Error = DataLensError;

    fn try_from(raw: RawDataset) -> Result<Self> {
        Dataset::new(raw.columns, raw.rows)
    }
}

impl Dataset {
    /// Create a dataset, validating the input contract.
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(DataLensError::DuplicateColumn(column.clone()));
            }
        }

        for row in &rows {
            if let Some(key) = row.cells.keys().find(|k| !seen.contains(k.as_str())) {
                return Err(DataLensError::UnknownColumn {
                    row: row.id,
                    column: key.clone(),
                });
            }
        }

        Ok(Self { columns, rows })
    }

    /// Convenience constructor that assigns 1-based ids to the given cell maps.
    pub fn from_records<I, R, K, V>(columns: &[&str], records: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let rows = records
            .into_iter()
            .enumerate()
            .map(|(idx, record)| Row::from_pairs(idx + 1, record))
            .collect();
        Self::new(columns.iter().map(|c| c.to_string()).collect(), rows)
    }

    /// Column names in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Iterate over one column's values in row order.
    pub fn column_values<'a>(&'a self, column: &'a str) -> impl Iterator<Item = &'a Value> + 'a {
        self.rows.iter().map(move |row| row.get(column))
    }

    /// Finite numeric values of a column, in row order.
    pub fn numeric_values(&self, column: &str) -> Vec<f64> {
        self.column_values(column)
            .filter_map(Value::as_f64)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_get_absent_is_null() {
        let row = Row::from_pairs(1, [("a", 1.0)]);
        assert_eq!(row.get("a"), &Value::Number(1.0));
        assert_eq!(row.get("b"), &Value::Null);
    }

    #[test]
    fn test_rejects_unknown_column() {
        let rows = vec![Row::from_pairs(1, [("a", 1.0), ("z", 2.0)])];
        let err = Dataset::new(vec!["a".into()], rows).unwrap_err();
        assert!(matches!(err, DataLensError::UnknownColumn { row: 1, ref column } if column == "z"));
    }

    #[test]
    fn test_rejects_duplicate_column() {
        let err = Dataset::new(vec!["a".into(), "a".into()], Vec::new()).unwrap_err();
        assert!(matches!(err, DataLensError::DuplicateColumn(ref c) if c == "a"));
    }

    #[test]
    fn test_numeric_values_skip_non_numbers() {
        let dataset = Dataset::from_records(
            &["x"],
            vec![
                vec![("x", Value::Number(1.0))],
                vec![("x", Value::Null)],
                vec![("x", Value::Text("abc".into()))],
                vec![("x", Value::Bool(true))],
                vec![("x", Value::Number(3.0))],
            ],
        )
        .unwrap();

        assert_eq!(dataset.numeric_values("x"), vec![1.0, 3.0]);
        assert_eq!(dataset.rows()[4].id, 5);
    }

    #[test]
    fn test_deserialize_validates_columns() {
        let json = r#"{"columns":["a","a"],"rows":[{"id":1,"cells":{"a":1.0}}]}"#;
        let err = serde_json::from_str::<Dataset>(json).unwrap_err();
        assert!(err.to_string().contains("Duplicate column name: a"));

        let json = r#"{"columns":["a"],"rows":[{"id":1,"cells":{"a":1.0,"z":2.0}}]}"#;
        let err = serde_json::from_str::<Dataset>(json).unwrap_err();
        assert!(err.to_string().contains("unknown column 'z'"));
    }

    #[test]
    fn test_json_roundtrip() {
        let dataset = Dataset::from_records(
            &["a", "b"],
            vec![vec![("a", Value::Number(1.5)), ("b", Value::from("x"))]],
        )
        .unwrap();

        let json = serde_json::to_string(&dataset).unwrap();
        let back: Dataset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dataset);
    }
}
