//! Configuration for ingestion and analysis.
//!
//! Every field has a default matching the engine's documented behavior, so a
//! JSON config file only needs the keys it wants to change:
//!
//! ```
//! use datalens::AnalysisConfig;
//!
//! let config: AnalysisConfig = serde_json::from_str(r#"{ "histogram_bins": 20 }"#).unwrap();
//! assert_eq!(config.histogram_bins, 20);
//! assert_eq!(config.top_categories, 5);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DataLensError, Result};
use crate::input::ParserConfig;
use crate::stats::CorrelationPairing;

/// Tunables for the analysis engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Number of equal-width histogram buckets per numeric column.
    pub histogram_bins: usize,
    /// Number of most frequent values kept per categorical column.
    pub top_categories: usize,
    /// Maximum outlying values sampled per column.
    pub outlier_sample_cap: usize,
    /// IQR multiplier for the outlier fences.
    pub iqr_multiplier: f64,
    /// Percent change beyond which a trend is increasing/decreasing.
    pub trend_threshold_percent: f64,
    /// Minimum valid values before a trend is reported.
    pub min_trend_values: usize,
    /// `|r|` above which a correlation is strong and becomes an insight.
    pub correlation_threshold: f64,
    /// `|r|` above which a correlation is moderate.
    pub moderate_correlation_threshold: f64,
    /// Coefficient of variation (percent) above which a column is flagged.
    pub cv_warning_percent: f64,
    /// `|skewness|` above which a column is reported as highly skewed.
    pub skewness_threshold: f64,
    /// How column values are paired for correlation.
    pub correlation_pairing: CorrelationPairing,
    /// Report each strongly correlated pair once instead of once per direction.
    pub dedupe_correlation_insights: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            histogram_bins: 10,
            top_categories: 5,
            outlier_sample_cap: 10,
            iqr_multiplier: 1.5,
            trend_threshold_percent: 5.0,
            min_trend_values: 3,
            correlation_threshold: 0.7,
            moderate_correlation_threshold: 0.3,
            cv_warning_percent: 100.0,
            skewness_threshold: 1.0,
            correlation_pairing: CorrelationPairing::Truncated,
            dedupe_correlation_insights: true,
        }
    }
}

impl AnalysisConfig {
    /// Load a (possibly partial) config from a JSON file and validate it.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| DataLensError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every tunable is in range.
    pub fn validate(&self) -> Result<()> {
        if self.histogram_bins == 0 {
            return Err(DataLensError::Config(
                "histogram_bins must be at least 1".to_string(),
            ));
        }
        if self.min_trend_values < 2 {
            return Err(DataLensError::Config(
                "min_trend_values must be at least 2".to_string(),
            ));
        }

        let non_negative = [
            ("iqr_multiplier", self.iqr_multiplier),
            ("trend_threshold_percent", self.trend_threshold_percent),
            ("cv_warning_percent", self.cv_warning_percent),
            ("skewness_threshold", self.skewness_threshold),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(DataLensError::Config(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        for (name, value) in [
            ("correlation_threshold", self.correlation_threshold),
            ("moderate_correlation_threshold", self.moderate_correlation_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(DataLensError::Config(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }
        if self.moderate_correlation_threshold > self.correlation_threshold {
            return Err(DataLensError::Config(
                "moderate_correlation_threshold cannot exceed correlation_threshold".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration for the [`DataLens`](crate::DataLens) facade.
#[derive(Debug, Clone, Default)]
pub struct DataLensConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Analysis configuration.
    pub analysis: AnalysisConfig,
}
