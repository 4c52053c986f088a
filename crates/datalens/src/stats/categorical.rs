//! Frequency profiling for categorical columns.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::input::Value;

/// A category and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: usize,
}

/// Cardinality and most frequent values of a categorical column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryProfile {
    /// Number of distinct non-missing values.
    pub unique_count: usize,
    /// Number of non-missing values.
    pub valid_count: usize,
    /// Most frequent values, descending by count; ties keep first-seen order.
    pub top_values: Vec<CategoryCount>,
}

impl CategoryProfile {
    /// Profile a column's values, keeping the `top_n` most frequent.
    ///
    /// Returns `None` if the column has no non-missing values.
    pub fn compute<'a>(values: impl IntoIterator<Item = &'a Value>, top_n: usize) -> Option<Self> {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for value in values.into_iter().filter(|v| !v.is_missing()) {
            *counts.entry(value.to_string()).or_insert(0) += 1;
        }

        if counts.is_empty() {
            return None;
        }

        let unique_count = counts.len();
        let valid_count = counts.values().sum();

        let mut ranked: Vec<CategoryCount> = counts
            .into_iter()
            .map(|(value, count)| CategoryCount { value, count })
            .collect();
        // Stable sort keeps first-seen order among equal counts
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(top_n);

        Some(Self {
            unique_count,
            valid_count,
            top_values: ranked,
        })
    }

    /// Share of the most frequent value among valid values, 0-1.
    pub fn mode_ratio(&self) -> f64 {
        match self.top_values.first() {
            Some(top) if self.valid_count > 0 => top.count as f64 / self.valid_count as f64,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(values: &[&str]) -> Vec<Value> {
        values.iter().map(|v| Value::coerce(v)).collect()
    }

    #[test]
    fn test_top_values_ordering() {
        let values = texts(&["b", "a", "c", "a", "b", "d", "a"]);
        let profile = CategoryProfile::compute(&values, 5).unwrap();

        assert_eq!(profile.unique_count, 4);
        assert_eq!(profile.valid_count, 7);
        let top: Vec<(&str, usize)> = profile
            .top_values
            .iter()
            .map(|c| (c.value.as_str(), c.count))
            .collect();
        assert_eq!(top, vec![("a", 3), ("b", 2), ("c", 1), ("d", 1)]);
    }

    #[test]
    fn test_top_n_truncates() {
        let values = texts(&["a", "b", "c", "d", "e", "f", "g"]);
        let profile = CategoryProfile::compute(&values, 5).unwrap();

        assert_eq!(profile.unique_count, 7);
        assert_eq!(profile.top_values.len(), 5);
        assert_eq!(profile.top_values[0].value, "a");
        assert_eq!(profile.top_values[4].value, "e");
    }

    #[test]
    fn test_missing_values_ignored() {
        let values = vec![Value::Null, Value::Text(String::new()), Value::from("x")];
        let profile = CategoryProfile::compute(&values, 5).unwrap();
        assert_eq!(profile.unique_count, 1);
        assert_eq!(profile.valid_count, 1);
        assert_eq!(profile.mode_ratio(), 1.0);
    }

    #[test]
    fn test_all_missing_is_none() {
        let values = vec![Value::Null, Value::Null];
        assert!(CategoryProfile::compute(&values, 5).is_none());
    }

    #[test]
    fn test_booleans_profiled_as_labels() {
        let values = vec![Value::Bool(true), Value::Bool(false), Value::Bool(true)];
        let profile = CategoryProfile::compute(&values, 5).unwrap();
        assert_eq!(profile.top_values[0].value, "true");
        assert_eq!(profile.top_values[0].count, 2);
    }
}
