//! Fixed-width histograms for numeric columns.

use serde::{Deserialize, Serialize};

/// One histogram bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Display label, `"{lower}-{upper}"` with one decimal place.
    pub label: String,
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
    /// Share of the column's valid values, 0-100.
    pub percentage: f64,
}

/// Equal-width histogram spanning `[min, max]` of the valid values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
    /// Number of values binned; equals the sum of the bin counts.
    pub total: usize,
}

impl Histogram {
    /// Bin the finite entries of `values` into `bin_count` buckets.
    ///
    /// A value equal to the maximum lands in the last bucket. When every
    /// value is identical all of them land in the first bucket. Returns
    /// `None` when there is nothing to bin or when the span `max - min`
    /// overflows; `bin_count` of zero is treated as one.
    pub fn compute(values: &[f64], bin_count: usize) -> Option<Self> {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() {
            return None;
        }

        let bin_count = bin_count.max(1);
        let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let span = max - min;
        if !span.is_finite() {
            return None;
        }
        let width = span / bin_count as f64;

        let mut counts = vec![0usize; bin_count];
        for &v in &finite {
            let idx = if width > 0.0 {
                (((v - min) / width).floor() as usize).min(bin_count - 1)
            } else {
                0
            };
            counts[idx] += 1;
        }

        let total = finite.len();
        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| {
                let lower = min + i as f64 * width;
                let upper = if i == bin_count - 1 {
                    max
                } else {
                    min + (i + 1) as f64 * width
                };
                HistogramBin {
                    label: format!("{:.1}-{:.1}", lower, upper),
                    lower,
                    upper,
                    count,
                    percentage: count as f64 / total as f64 * 100.0,
                }
            })
            .collect();

        Some(Self { bins, total })
    }
}
