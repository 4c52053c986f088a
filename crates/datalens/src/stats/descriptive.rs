//! Descriptive statistics for numeric columns.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{mean, positional_quantile, sorted};

/// Descriptive statistics for a numeric column, over valid values only.
///
/// Quartiles and the median are positional: with `n` values sorted
/// ascending, `median = sorted[n / 2]`, `q1 = sorted[floor(n * 0.25)]` and
/// `q3 = sorted[floor(n * 0.75)]`. For even `n` the median is therefore the
/// upper-middle element rather than the average of the two middle ones.
///
/// Variance, skewness and kurtosis are population measures (divide by `n`).
/// When every value is identical the standardized moments are undefined;
/// `skewness` and `kurtosis` are then reported as `0.0`. Every field is a
/// finite number: a column whose spread or moments leave the `f64` range
/// has no statistics at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStatistics {
    /// Number of valid values the statistics were computed over.
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Most frequent value; ties go to the value seen first.
    pub mode: f64,
    pub min: f64,
    pub max: f64,
    /// Population standard deviation.
    pub std: f64,
    /// Population variance.
    pub variance: f64,
    pub range: f64,
    /// First quartile (25th percentile, positional).
    pub q1: f64,
    /// Third quartile (75th percentile, positional).
    pub q3: f64,
    /// Third standardized moment.
    pub skewness: f64,
    /// Fourth standardized moment minus 3 (excess kurtosis).
    pub kurtosis: f64,
}

impl ColumnStatistics {
    /// Compute statistics over `values` in row order.
    ///
    /// Non-finite entries are ignored. Returns `None` when nothing valid
    /// remains, or when a derived measure such as the variance or range
    /// overflows, so callers can omit the column instead of reporting zeros
    /// or infinities.
    pub fn compute(values: &[f64]) -> Option<Self> {
        let sorted = sorted(values);
        let n = sorted.len();
        let mean = mean(&sorted)?;

        let min = sorted[0];
        let max = sorted[n - 1];

        let variance = if min == max {
            0.0
        } else {
            sorted.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64
        };
        let std = variance.sqrt();

        let range = max - min;
        if !variance.is_finite() || !range.is_finite() {
            return None;
        }

        let (skewness, kurtosis) = if std > 0.0 {
            let z = |x: &f64| (x - mean) / std;
            let skew = sorted.iter().map(|x| z(x).powi(3)).sum::<f64>() / n as f64;
            let kurt = sorted.iter().map(|x| z(x).powi(4)).sum::<f64>() / n as f64 - 3.0;
            if skew.is_finite() && kurt.is_finite() {
                (skew, kurt)
            } else {
                // Spread too small to standardize against
                (0.0, 0.0)
            }
        } else {
            (0.0, 0.0)
        };

        Some(Self {
            count: n,
            mean,
            median: positional_quantile(&sorted, 0.5)?,
            mode: mode(values)?,
            min,
            max,
            std,
            variance,
            range,
            q1: positional_quantile(&sorted, 0.25)?,
            q3: positional_quantile(&sorted, 0.75)?,
            skewness,
            kurtosis,
        })
    }

    /// Interquartile range.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Coefficient of variation in percent (`std / mean * 100`).
    ///
    /// `None` when the mean is zero or the ratio overflows.
    pub fn coefficient_of_variation(&self) -> Option<f64> {
        if self.mean == 0.0 {
            return None;
        }
        let cv = self.std / self.mean * 100.0;
        cv.is_finite().then_some(cv)
    }
}

/// Most frequent finite value, first-seen wins ties.
fn mode(values: &[f64]) -> Option<f64> {
    let mut counts: IndexMap<u64, (f64, usize)> = IndexMap::new();
    for &v in values.iter().filter(|v| v.is_finite()) {
        // -0.0 and 0.0 are the same value
        let key = if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() };
        counts.entry(key).or_insert((v, 0)).1 += 1;
    }

    let mut best: Option<(f64, usize)> = None;
    for &(value, count) in counts.values() {
        if best.is_none_or(|(_, c)| count > c) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}
