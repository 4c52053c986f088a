//! First-half versus second-half trend detection.

use serde::{Deserialize, Serialize};

use super::mean;

/// Direction of change between the two halves of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
    /// The first half averages zero, so no percent change exists.
    Undefined,
}

impl TrendDirection {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            TrendDirection::Increasing => "Increasing",
            TrendDirection::Decreasing => "Decreasing",
            TrendDirection::Stable => "Stable",
            TrendDirection::Undefined => "Undefined",
        }
    }
}

/// Trend of a numeric column along row order.
///
/// Row order is taken as the sequential axis; nothing here is time-aware.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub direction: TrendDirection,
    pub first_half_mean: f64,
    pub second_half_mean: f64,
    /// Signed percent change of the second half relative to the first.
    /// `None` when the direction is undefined.
    pub change_percent: Option<f64>,
    /// Absolute percent change. `None` when the direction is undefined.
    pub magnitude: Option<f64>,
}

impl Trend {
    /// Detect the trend of `values` (row order, valid values only).
    ///
    /// The sequence is split at `floor(n / 2)`. A change above `threshold`
    /// percent is increasing, below `-threshold` decreasing, anything else
    /// stable. Returns `None` when fewer than `min_values` values exist or
    /// the percent change overflows.
    pub fn detect(values: &[f64], threshold: f64, min_values: usize) -> Option<Self> {
        let valid: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if valid.len() < min_values.max(2) {
            return None;
        }

        let mid = valid.len() / 2;
        let first_half_mean = mean(&valid[..mid])?;
        let second_half_mean = mean(&valid[mid..])?;

        if first_half_mean == 0.0 {
            return Some(Self {
                direction: TrendDirection::Undefined,
                first_half_mean,
                second_half_mean,
                change_percent: None,
                magnitude: None,
            });
        }

        let change = (second_half_mean - first_half_mean) / first_half_mean * 100.0;
        if !change.is_finite() {
            return None;
        }
        let direction = if change > threshold {
            TrendDirection::Increasing
        } else if change < -threshold {
            TrendDirection::Decreasing
        } else {
            TrendDirection::Stable
        };

        Some(Self {
            direction,
            first_half_mean,
            second_half_mean,
            change_percent: Some(change),
            magnitude: Some(change.abs()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increasing() {
        let trend = Trend::detect(&[10.0, 10.0, 20.0, 20.0], 5.0, 3).unwrap();
        assert_eq!(trend.direction, TrendDirection::Increasing);
        assert_eq!(trend.change_percent, Some(100.0));
        assert_eq!(trend.magnitude, Some(100.0));
    }

    #[test]
    fn test_decreasing() {
        let trend = Trend::detect(&[20.0, 20.0, 10.0, 10.0], 5.0, 3).unwrap();
        assert_eq!(trend.direction, TrendDirection::Decreasing);
        assert_eq!(trend.change_percent, Some(-50.0));
        assert_eq!(trend.magnitude, Some(50.0));
    }

    #[test]
    fn test_stable_within_threshold() {
        let trend = Trend::detect(&[100.0, 100.0, 104.0, 104.0], 5.0, 3).unwrap();
        assert_eq!(trend.direction, TrendDirection::Stable);
    }

    #[test]
    fn test_odd_count_splits_at_floor() {
        // first half [2], second half [4, 6]
        let trend = Trend::detect(&[2.0, 4.0, 6.0], 5.0, 3).unwrap();
        assert_eq!(trend.first_half_mean, 2.0);
        assert_eq!(trend.second_half_mean, 5.0);
        assert_eq!(trend.change_percent, Some(150.0));
    }

    #[test]
    fn test_zero_baseline_is_undefined() {
        let trend = Trend::detect(&[0.0, 0.0, 5.0, 5.0], 5.0, 3).unwrap();
        assert_eq!(trend.direction, TrendDirection::Undefined);
        assert_eq!(trend.change_percent, None);
        assert_eq!(trend.magnitude, None);
    }

    #[test]
    fn test_too_few_values() {
        assert!(Trend::detect(&[1.0, 2.0], 5.0, 3).is_none());
        assert!(Trend::detect(&[1.0], 5.0, 3).is_none());
    }

    #[test]
    fn test_overflowing_change_is_none() {
        assert!(Trend::detect(&[1e-300, 1e-300, 1e300, 1e300], 5.0, 3).is_none());

        let trend = Trend::detect(&[1e308, 1e308, 1e308, 1e308], 5.0, 3).unwrap();
        assert_eq!(trend.direction, TrendDirection::Stable);
        assert_eq!(trend.change_percent, Some(0.0));
    }
}
