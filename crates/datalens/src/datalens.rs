//! Main DataLens struct and the analysis pipeline.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{AnalysisConfig, DataLensConfig};
use crate::error::Result;
use crate::input::{Dataset, Parser};
use crate::insight::{Insight, InsightEngine};
use crate::report::AnalysisReport;
use crate::schema::ColumnClassification;
use crate::stats::{
    CategoryProfile, ColumnStatistics, CorrelationMatrix, DataQuality, Histogram, OutlierReport,
    Trend,
};

/// Result of analyzing a dataset.
///
/// Per-column maps only hold columns that have something to report: a
/// column with no valid values is absent rather than filled with zeros.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Number of rows analyzed.
    pub total_rows: usize,
    /// Number of columns in the dataset.
    pub total_columns: usize,
    /// Numeric / categorical / boolean partition of the columns.
    pub classification: ColumnClassification,
    /// Descriptive statistics per numeric column.
    pub statistics: IndexMap<String, ColumnStatistics>,
    /// Histograms per numeric column.
    pub distributions: IndexMap<String, Histogram>,
    /// Frequency profiles per categorical column.
    pub categories: IndexMap<String, CategoryProfile>,
    /// Pairwise Pearson correlations between numeric columns.
    pub correlations: CorrelationMatrix,
    /// IQR outliers per numeric column.
    pub outliers: IndexMap<String, OutlierReport>,
    /// Completeness per column and overall.
    pub quality: DataQuality,
    /// First-half vs second-half trends per numeric column.
    pub trends: IndexMap<String, Trend>,
}

/// Analyze a dataset with the default configuration.
///
/// Pure and deterministic: the same dataset always produces the same
/// analysis and the same insight order.
///
/// ```
/// use datalens::{Dataset, Value};
///
/// let dataset = Dataset::from_records(
///     &["x", "y"],
///     vec![
///         vec![("x", Value::Number(1.0)), ("y", Value::Number(2.0))],
///         vec![("x", Value::Number(2.0)), ("y", Value::Number(4.0))],
///         vec![("x", Value::Number(3.0)), ("y", Value::Number(6.0))],
///     ],
/// )
/// .unwrap();
///
/// let (analysis, insights) = datalens::analyze(&dataset);
/// assert_eq!(analysis.statistics["x"].mean, 2.0);
/// assert_eq!(analysis.correlations.get("x", "y"), Some(1.0));
/// assert_eq!(insights[0].title, "Strong Positive Correlation");
/// ```
pub fn analyze(dataset: &Dataset) -> (Analysis, Vec<Insight>) {
    analyze_with_config(dataset, &AnalysisConfig::default())
}

/// Analyze a dataset with explicit configuration.
pub fn analyze_with_config(dataset: &Dataset, config: &AnalysisConfig) -> (Analysis, Vec<Insight>) {
    let classification = ColumnClassification::classify(dataset);
    debug!(
        "Classified {} columns: {} numeric, {} categorical, {} boolean",
        dataset.column_count(),
        classification.numeric.len(),
        classification.categorical.len(),
        classification.boolean.len()
    );

    let mut statistics = IndexMap::new();
    let mut distributions = IndexMap::new();
    let mut outliers = IndexMap::new();
    let mut trends = IndexMap::new();

    for column in &classification.numeric {
        let values = dataset.numeric_values(column);

        let Some(stats) = ColumnStatistics::compute(&values) else {
            if !values.is_empty() {
                warn!(
                    "Skipping numeric summaries for '{}': values exceed the f64 range",
                    column
                );
            }
            continue;
        };
        statistics.insert(column.clone(), stats);

        if let Some(histogram) = Histogram::compute(&values, config.histogram_bins) {
            distributions.insert(column.clone(), histogram);
        }
        if let Some(report) =
            OutlierReport::detect(&values, config.iqr_multiplier, config.outlier_sample_cap)
        {
            outliers.insert(column.clone(), report);
        }
        if let Some(trend) = Trend::detect(
            &values,
            config.trend_threshold_percent,
            config.min_trend_values,
        ) {
            trends.insert(column.clone(), trend);
        }
    }
    debug!(
        "Computed statistics for {} numeric columns ({} trends)",
        statistics.len(),
        trends.len()
    );

    let categories: IndexMap<String, CategoryProfile> = classification
        .categorical
        .iter()
        .filter_map(|column| {
            CategoryProfile::compute(dataset.column_values(column), config.top_categories)
                .map(|profile| (column.clone(), profile))
        })
        .collect();

    let correlations =
        CorrelationMatrix::compute(dataset, &classification.numeric, config.correlation_pairing);
    debug!(
        "Computed {} correlation pairs ({:?} pairing)",
        correlations.pairs().len(),
        config.correlation_pairing
    );

    let quality = DataQuality::assess(dataset);

    let analysis = Analysis {
        total_rows: dataset.row_count(),
        total_columns: dataset.column_count(),
        classification,
        statistics,
        distributions,
        categories,
        correlations,
        outliers,
        quality,
        trends,
    };

    let insights = InsightEngine::generate(&analysis, config);
    (analysis, insights)
}

/// The main DataLens entry point: ingestion plus analysis.
pub struct DataLens {
    config: DataLensConfig,
    parser: Parser,
}

impl DataLens {
    /// Create a new DataLens instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(DataLensConfig::default())
    }

    /// Create a DataLens instance with custom configuration.
    pub fn with_config(config: DataLensConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        Self { config, parser }
    }

    /// Replace the analysis configuration.
    pub fn with_analysis_config(mut self, analysis: AnalysisConfig) -> Self {
        self.config.analysis = analysis;
        self
    }

    /// The active analysis configuration.
    pub fn analysis_config(&self) -> &AnalysisConfig {
        &self.config.analysis
    }

    /// Analyze an in-memory dataset.
    pub fn analyze(&self, dataset: &Dataset) -> (Analysis, Vec<Insight>) {
        analyze_with_config(dataset, &self.config.analysis)
    }

    /// Parse and analyze a data file.
    pub fn analyze_file(&self, path: impl AsRef<Path>) -> Result<AnalysisReport> {
        self.config.analysis.validate()?;

        let (dataset, source) = self.parser.parse_file(path)?;
        let (analysis, insights) = self.analyze(&dataset);

        Ok(AnalysisReport::new(analysis, insights).with_source(source))
    }
}

impl Default for DataLens {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Value;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_analyze_mixed_columns() {
        let dataset = Dataset::from_records(
            &["price", "city", "empty"],
            vec![
                vec![("price", Value::Number(10.0)), ("city", Value::from("Oslo")), ("empty", Value::from(""))],
                vec![("price", Value::Number(20.0)), ("city", Value::from("Oslo")), ("empty", Value::from(""))],
                vec![("price", Value::Null), ("city", Value::from("Rome")), ("empty", Value::from(""))],
            ],
        )
        .unwrap();

        let (analysis, _) = analyze(&dataset);

        assert_eq!(analysis.total_rows, 3);
        assert_eq!(analysis.total_columns, 3);
        assert_eq!(analysis.classification.numeric, vec!["price"]);
        assert_eq!(analysis.classification.categorical, vec!["city", "empty"]);
        assert_eq!(analysis.statistics["price"].count, 2);
        assert!(analysis.categories.contains_key("city"));
        assert!(!analysis.categories.contains_key("empty"));
        assert!(!analysis.trends.contains_key("price"));
        assert_eq!(analysis.quality.completeness["empty"], 0.0);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::new(vec!["a".into(), "b".into()], Vec::new()).unwrap();
        let (analysis, insights) = analyze(&dataset);

        assert_eq!(analysis.total_rows, 0);
        assert!(analysis.statistics.is_empty());
        assert!(analysis.distributions.is_empty());
        assert!(analysis.categories.is_empty());
        assert!(analysis.correlations.is_empty());
        assert!(analysis.outliers.is_empty());
        assert!(analysis.trends.is_empty());
        assert!(analysis.quality.completeness.is_empty());
        assert_eq!(insights.len(), 1);
    }

    #[test]
    fn test_analyze_file() {
        let file = create_test_file("region,units,revenue\nnorth,10,100\nsouth,20,210\nnorth,30,290\n");

        let report = DataLens::new().analyze_file(file.path()).unwrap();
        let source = report.source.as_ref().unwrap();

        assert_eq!(source.row_count, 3);
        assert_eq!(source.format, "csv");
        assert!(source.hash.starts_with("sha256:"));
        assert_eq!(report.analysis.classification.numeric, vec!["units", "revenue"]);
        assert!(!report.insights.is_empty());
    }

    #[test]
    fn test_analyze_file_rejects_invalid_config() {
        let file = create_test_file("x\n1\n");
        let lens = DataLens::new().with_analysis_config(AnalysisConfig {
            histogram_bins: 0,
            ..Default::default()
        });
        assert!(lens.analyze_file(file.path()).is_err());
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let dataset = Dataset::from_records(
            &["a", "b", "c"],
            (0..50).map(|i| {
                vec![
                    ("a", Value::Number((i * 7 % 13) as f64)),
                    ("b", Value::Number((i * i % 17) as f64)),
                    ("c", Value::from(["x", "y", "z"][i % 3])),
                ]
            }),
        )
        .unwrap();

        let first = analyze(&dataset);
        let second = analyze(&dataset);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first.0).unwrap(),
            serde_json::to_string(&second.0).unwrap()
        );
    }
}
