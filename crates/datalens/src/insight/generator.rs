//! Rule-based insight generation from a completed analysis.
//!
//! Rules run in a fixed order and the result is stably sorted by priority,
//! so the same analysis always yields the same list:
//!
//! 1. a dataset overview,
//! 2. one finding per numeric column (variability, skew, or a summary),
//! 3. one finding per strongly correlated column pair.

use tracing::debug;

use crate::config::AnalysisConfig;
use crate::datalens::Analysis;
use crate::stats::ColumnStatistics;

use super::{Insight, InsightKind, Priority};

/// Generates insights from analysis results.
pub struct InsightEngine;

impl InsightEngine {
    /// Generate the prioritized insight list for an analysis.
    pub fn generate(analysis: &Analysis, config: &AnalysisConfig) -> Vec<Insight> {
        let mut insights = vec![Self::overview(analysis)];

        for column in &analysis.classification.numeric {
            if let Some(stats) = analysis.statistics.get(column) {
                insights.push(Self::column_insight(column, stats, config));
            }
        }

        insights.extend(Self::correlation_insights(analysis, config));

        // Stable: insertion order is kept within a priority tier
        insights.sort_by(|a, b| b.priority.cmp(&a.priority));

        debug!("Generated {} insights", insights.len());
        insights
    }

    fn overview(analysis: &Analysis) -> Insight {
        let classification = &analysis.classification;
        Insight::new(
            InsightKind::Info,
            "Dataset Overview",
            format!(
                "Dataset contains {} records across {} columns: {} numeric, {} categorical and {} boolean.",
                analysis.total_rows,
                analysis.total_columns,
                classification.numeric.len(),
                classification.categorical.len(),
                classification.boolean.len()
            ),
        )
        .with_priority(Priority::Medium)
    }

    fn column_insight(column: &str, stats: &ColumnStatistics, config: &AnalysisConfig) -> Insight {
        if let Some(cv) = stats
            .coefficient_of_variation()
            .filter(|cv| *cv > config.cv_warning_percent)
        {
            return Insight::new(
                InsightKind::Warning,
                format!("High Variability in {}", column),
                format!(
                    "{} has a coefficient of variation of {:.1}% (mean {:.2}, std dev {:.2}); values are widely dispersed.",
                    column, cv, stats.mean, stats.std
                ),
            )
            .with_priority(Priority::High)
            .with_column(column);
        }

        if stats.skewness.abs() > config.skewness_threshold {
            let side = if stats.skewness > 0.0 { "right" } else { "left" };
            return Insight::new(
                InsightKind::Info,
                format!("{} is Highly Skewed", column),
                format!(
                    "{} has a skewness of {:.2}; the distribution has a long {} tail (mean {:.2}, median {:.2}).",
                    column, stats.skewness, side, stats.mean, stats.median
                ),
            )
            .with_priority(Priority::Medium)
            .with_column(column);
        }

        Insight::new(
            InsightKind::Info,
            format!("{} Analysis", column),
            format!(
                "Average: {:.2}, Range: {:.2} - {:.2}, Std Dev: {:.2}",
                stats.mean, stats.min, stats.max, stats.std
            ),
        )
        .with_priority(Priority::Medium)
        .with_column(column)
    }

    fn correlation_insights(analysis: &Analysis, config: &AnalysisConfig) -> Vec<Insight> {
        let candidates: Vec<(&str, &str, f64)> = if config.dedupe_correlation_insights {
            analysis
                .correlations
                .pairs()
                .into_iter()
                .map(|p| (p.first, p.second, p.coefficient))
                .collect()
        } else {
            analysis.correlations.ordered_pairs().collect()
        };

        candidates
            .into_iter()
            .filter(|(_, _, r)| r.abs() > config.correlation_threshold)
            .map(|(a, b, r)| {
                let (kind, direction) = if r > 0.0 {
                    (InsightKind::Trend, "Positive")
                } else {
                    (InsightKind::Warning, "Negative")
                };
                Insight::new(
                    kind,
                    format!("Strong {} Correlation", direction),
                    format!(
                        "{} and {} have a correlation of {:.2}; they tend to move {}.",
                        a,
                        b,
                        r,
                        if r > 0.0 { "together" } else { "in opposite directions" }
                    ),
                )
                .with_priority(Priority::High)
                .with_column(a)
                .with_column(b)
            })
            .collect()
    }
}
