//! Pairwise Pearson correlation across numeric columns.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::mean;
use crate::input::Dataset;

/// How two columns' values are paired before correlating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationPairing {
    /// Filter each column to its valid values independently, then truncate
    /// both sequences to the shorter length. Pairs are not guaranteed to
    /// come from the same row when the columns' missing values differ.
    #[default]
    Truncated,
    /// Keep only rows where both columns hold a finite number.
    RowAligned,
}

/// Strength band of a correlation coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrelationStrength {
    Weak,
    Moderate,
    Strong,
}

impl CorrelationStrength {
    /// Classify `|r|` against the strong and moderate thresholds (exclusive).
    pub fn classify(coefficient: f64, strong: f64, moderate: f64) -> Self {
        let magnitude = coefficient.abs();
        if magnitude > strong {
            CorrelationStrength::Strong
        } else if magnitude > moderate {
            CorrelationStrength::Moderate
        } else {
            CorrelationStrength::Weak
        }
    }

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            CorrelationStrength::Weak => "Weak",
            CorrelationStrength::Moderate => "Moderate",
            CorrelationStrength::Strong => "Strong",
        }
    }
}

/// One unordered column pair and its coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationPair<'a> {
    pub first: &'a str,
    pub second: &'a str,
    pub coefficient: f64,
}

/// Symmetric correlation matrix without a diagonal.
///
/// `matrix[a][b]` exists for every pair of distinct numeric columns and is
/// exactly equal to `matrix[b][a]`: each pair is computed once and mirrored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorrelationMatrix {
    cells: IndexMap<String, IndexMap<String, f64>>,
}

impl CorrelationMatrix {
    /// Correlate every pair of the given numeric columns.
    pub fn compute(dataset: &Dataset, columns: &[String], pairing: CorrelationPairing) -> Self {
        let mut cells: IndexMap<String, IndexMap<String, f64>> = columns
            .iter()
            .map(|c| (c.clone(), IndexMap::new()))
            .collect();

        let filtered: Vec<Vec<f64>> = match pairing {
            CorrelationPairing::Truncated => {
                columns.iter().map(|c| dataset.numeric_values(c)).collect()
            }
            CorrelationPairing::RowAligned => Vec::new(),
        };

        for (i, first) in columns.iter().enumerate() {
            for (j, second) in columns.iter().enumerate().skip(i + 1) {
                if first == second {
                    continue;
                }
                let r = match pairing {
                    CorrelationPairing::Truncated => pearson(&filtered[i], &filtered[j]),
                    CorrelationPairing::RowAligned => {
                        let (x, y) = aligned_values(dataset, first, second);
                        pearson(&x, &y)
                    }
                };

                if let Some(row) = cells.get_mut(first) {
                    row.insert(second.clone(), r);
                }
                if let Some(row) = cells.get_mut(second) {
                    row.insert(first.clone(), r);
                }
            }
        }

        Self { cells }
    }

    /// Coefficient for a pair of distinct columns.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        self.cells.get(a)?.get(b).copied()
    }

    /// Row of the matrix for one column.
    pub fn row(&self, column: &str) -> Option<&IndexMap<String, f64>> {
        self.cells.get(column)
    }

    /// Column names in matrix order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(|k| k.as_str())
    }

    /// Every unordered pair once, in column order.
    pub fn pairs(&self) -> Vec<CorrelationPair<'_>> {
        let names: Vec<&str> = self.columns().collect();
        let mut pairs = Vec::new();
        for (i, &first) in names.iter().enumerate() {
            for &second in &names[i + 1..] {
                if let Some(coefficient) = self.get(first, second) {
                    pairs.push(CorrelationPair {
                        first,
                        second,
                        coefficient,
                    });
                }
            }
        }
        pairs
    }

    /// Every ordered pair `(a, b)` with `a != b`, in row-major order.
    pub fn ordered_pairs(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.cells.iter().flat_map(|(a, row)| {
            row.iter().map(move |(b, r)| (a.as_str(), b.as_str(), *r))
        })
    }

    /// Number of columns in the matrix.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the matrix has no columns.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Pearson correlation over the first `min(x.len(), y.len())` elements.
///
/// Computed on centered values, `Σ(x−x̄)(y−ȳ) / sqrt(Σ(x−x̄)² · Σ(y−ȳ)²)`,
/// so a large common offset does not cost precision. Returns 0 for fewer
/// than two pairs or when either side is constant (zero denominator), and
/// clamps the result into `[-1, 1]`.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n < 2 {
        return 0.0;
    }

    let (Some(dx), Some(dy)) = (deviations(&x[..n]), deviations(&y[..n])) else {
        return 0.0;
    };

    let sum_xy: f64 = dx.iter().zip(&dy).map(|(a, b)| a * b).sum();
    let sum_xx: f64 = dx.iter().map(|a| a * a).sum();
    let sum_yy: f64 = dy.iter().map(|b| b * b).sum();
    if sum_xx == 0.0 || sum_yy == 0.0 {
        return 0.0;
    }

    let r = sum_xy / (sum_xx * sum_yy).sqrt();
    if r.is_finite() { r.clamp(-1.0, 1.0) } else { 0.0 }
}

/// Deviations from the mean, scaled by the largest one so that the
/// products in [`pearson`] cannot overflow. `None` for a constant slice.
fn deviations(values: &[f64]) -> Option<Vec<f64>> {
    let first = values[0];
    if values.iter().all(|&v| v == first) {
        return None;
    }

    let mean = mean(values)?;
    let centered: Vec<f64> = values.iter().map(|v| v - mean).collect();
    let scale = centered.iter().fold(0.0f64, |acc, d| acc.max(d.abs()));
    if scale == 0.0 || !scale.is_finite() {
        return None;
    }
    Some(centered.into_iter().map(|d| d / scale).collect())
}

fn aligned_values(dataset: &Dataset, a: &str, b: &str) -> (Vec<f64>, Vec<f64>) {
    dataset
        .rows()
        .iter()
        .filter_map(|row| Some((row.get(a).as_f64()?, row.get(b).as_f64()?)))
        .unzip()
}
