//! CLI command implementations.

pub mod analyze;
pub mod correlations;
pub mod insights;

use std::path::Path;

use datalens::{AnalysisConfig, AnalysisReport, DataLens};

/// Load the analysis settings, falling back to defaults.
fn load_config(config: Option<&Path>) -> datalens::Result<AnalysisConfig> {
    match config {
        Some(path) => AnalysisConfig::from_json_file(path),
        None => Ok(AnalysisConfig::default()),
    }
}

/// Check the input exists, then parse and analyze it.
fn analyze_file(
    file: &Path,
    config: AnalysisConfig,
) -> Result<AnalysisReport, Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let lens = DataLens::new().with_analysis_config(config);
    Ok(lens.analyze_file(file)?)
}
