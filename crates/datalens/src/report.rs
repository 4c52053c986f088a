//! Analysis reports: the exportable bundle of analysis and insights.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::datalens::Analysis;
use crate::error::{DataLensError, Result};
use crate::input::SourceMetadata;
use crate::insight::Insight;

/// Analysis results plus the insights derived from them, with optional
/// provenance of the source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// The ingested file, when the analysis came from one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceMetadata>,
    pub analysis: Analysis,
    pub insights: Vec<Insight>,
}

impl AnalysisReport {
    /// Bundle an analysis with its insights.
    pub fn new(analysis: Analysis, insights: Vec<Insight>) -> Self {
        Self {
            source: None,
            analysis,
            insights,
        }
    }

    /// Attach source file metadata.
    pub fn with_source(mut self, source: SourceMetadata) -> Self {
        self.source = Some(source);
        self
    }

    /// Default report path for a data file: `data.csv` -> `data.analysis.json`.
    pub fn default_path(data_path: impl AsRef<Path>) -> PathBuf {
        let data_path = data_path.as_ref();
        let stem = data_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "analysis_report".to_string());
        data_path.with_file_name(format!("{}.analysis.json", stem))
    }

    /// Save the report as pretty-printed JSON.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use datalens::DataLens;
    /// # fn example() -> datalens::Result<()> {
    /// let report = DataLens::new().analyze_file("sales.csv")?;
    /// report.save("sales.analysis.json")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    DataLensError::Persistence(format!(
                        "Failed to create directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let file = File::create(path).map_err(|e| {
            DataLensError::Persistence(format!(
                "Failed to create file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self).map_err(|e| {
            DataLensError::Persistence(format!("Failed to serialize analysis report: {}", e))
        })?;

        info!("Saved analysis report to {}", path.display());
        Ok(())
    }

    /// Load a report previously written by [`save`](Self::save).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| {
            DataLensError::Persistence(format!(
                "Failed to open file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| {
            DataLensError::Persistence(format!(
                "Failed to parse analysis report '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Dataset, Value};
    use tempfile::TempDir;

    fn sample_report() -> AnalysisReport {
        let dataset = Dataset::from_records(
            &["units", "city"],
            vec![
                vec![("units", Value::Number(3.0)), ("city", Value::from("Lima"))],
                vec![("units", Value::Number(5.0)), ("city", Value::from("Quito"))],
                vec![("units", Value::Number(9.0)), ("city", Value::from("Lima"))],
            ],
        )
        .unwrap();
        let (analysis, insights) = crate::analyze(&dataset);
        AnalysisReport::new(analysis, insights)
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("report.json");

        let report = sample_report();
        report.save(&path).unwrap();
        assert!(path.exists());

        let loaded = AnalysisReport::load(&path).unwrap();
        assert_eq!(loaded.analysis, report.analysis);
        assert_eq!(loaded.insights, report.insights);
        assert!(loaded.source.is_none());
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(sample_report()).unwrap();

        assert!(json.get("source").is_none());
        assert_eq!(json["analysis"]["total_rows"], 3);
        assert_eq!(json["analysis"]["statistics"]["units"]["median"], 5.0);
        assert_eq!(json["analysis"]["categories"]["city"]["top_values"][0]["value"], "Lima");
        assert_eq!(json["insights"][0]["type"], "info");
    }

    #[test]
    fn test_load_missing_file() {
        let result = AnalysisReport::load("/nonexistent/report.json");
        assert!(matches!(result, Err(DataLensError::Persistence(_))));
    }

    #[test]
    fn test_default_path() {
        assert_eq!(
            AnalysisReport::default_path("data/sales.csv"),
            PathBuf::from("data/sales.analysis.json")
        );
    }
}
