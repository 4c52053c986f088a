//! IQR-fence outlier detection.

use serde::{Deserialize, Serialize};

use super::{positional_quantile, sorted};

/// Outliers found in one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierReport {
    /// Number of values strictly outside the fences.
    pub count: usize,
    /// `count` as a share of the column's valid values, 0-100.
    pub percentage: f64,
    /// `q1 - multiplier * iqr`.
    pub lower_fence: f64,
    /// `q3 + multiplier * iqr`.
    pub upper_fence: f64,
    /// First outlying values in row order, capped.
    pub samples: Vec<f64>,
}

impl OutlierReport {
    /// Detect outliers among `values` (row order) with the IQR method.
    ///
    /// Quartiles are positional, as in [`ColumnStatistics`](super::ColumnStatistics).
    /// Returns `None` when the column has no valid values or the fences
    /// overflow.
    pub fn detect(values: &[f64], multiplier: f64, sample_cap: usize) -> Option<Self> {
        let sorted = sorted(values);
        let q1 = positional_quantile(&sorted, 0.25)?;
        let q3 = positional_quantile(&sorted, 0.75)?;
        let iqr = q3 - q1;
        let lower_fence = q1 - multiplier * iqr;
        let upper_fence = q3 + multiplier * iqr;
        if !lower_fence.is_finite() || !upper_fence.is_finite() {
            return None;
        }

        let mut count = 0;
        let mut samples = Vec::new();
        for &v in values.iter().filter(|v| v.is_finite()) {
            if v < lower_fence || v > upper_fence {
                count += 1;
                if samples.len() < sample_cap {
                    samples.push(v);
                }
            }
        }

        Some(Self {
            count,
            percentage: count as f64 / sorted.len() as f64 * 100.0,
            lower_fence,
            upper_fence,
            samples,
        })
    }

    /// Whether any outliers were found.
    pub fn has_outliers(&self) -> bool {
        self.count > 0
    }
}
