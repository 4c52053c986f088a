//! Per-column and cross-column statistical measures.
//!
//! Every calculator here is a pure function of its inputs. Degenerate cases
//! (no valid values, zero spread, zero baseline) resolve to `None` or to a
//! documented sentinel, never to NaN or infinity.

mod categorical;
mod correlation;
mod descriptive;
mod distribution;
mod outliers;
mod quality;
mod trend;

pub use categorical::{CategoryCount, CategoryProfile};
pub use correlation::{
    CorrelationMatrix, CorrelationPair, CorrelationPairing, CorrelationStrength, pearson,
};
pub use descriptive::ColumnStatistics;
pub use distribution::{Histogram, HistogramBin};
pub use outliers::OutlierReport;
pub use quality::DataQuality;
pub use trend::{Trend, TrendDirection};

/// Sorted ascending copy of finite values.
pub(crate) fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

/// Element at `floor(n * fraction)` of a sorted slice.
///
/// This is the positional quantile used throughout: the median is the
/// element at `floor(n / 2)` (the upper-middle element for even `n`), not
/// the average of the two middle elements.
pub(crate) fn positional_quantile(sorted: &[f64], fraction: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let idx = (sorted.len() as f64 * fraction).floor() as usize;
    Some(sorted[idx.min(sorted.len() - 1)])
}

/// Arithmetic mean, `None` for an empty slice.
///
/// Finite inputs whose plain sum overflows fall back to a running mean
/// that scales each step by `1/k`, so the result stays finite.
pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let plain = values.iter().sum::<f64>() / values.len() as f64;
    if plain.is_finite() {
        return Some(plain);
    }

    let mut running = 0.0;
    for (k, &v) in values.iter().enumerate() {
        let k = (k + 1) as f64;
        running += v / k - running / k;
    }
    running.is_finite().then_some(running)
}

/// Round to one decimal place.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
