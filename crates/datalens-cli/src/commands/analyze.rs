//! Analyze command - analyze a data file and write an analysis report.

use std::path::PathBuf;

use colored::Colorize;
use datalens::AnalysisReport;
use datalens::stats::TrendDirection;

use super::{analyze_file, load_config};

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    bins: Option<usize>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(config.as_deref())?;
    if let Some(bins) = bins {
        config.histogram_bins = bins;
    }

    if !json_output {
        println!(
            "{} {}",
            "Analyzing".cyan().bold(),
            file.display().to_string().white()
        );
    }

    let report = analyze_file(&file, config)?;

    let output_path = output.unwrap_or_else(|| AnalysisReport::default_path(&file));
    report.save(&output_path)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_summary(&report);

    println!();
    println!(
        "{} {}",
        "Saved to".green().bold(),
        output_path.display().to_string().white()
    );

    Ok(())
}

fn print_summary(report: &AnalysisReport) {
    let analysis = &report.analysis;
    let classification = &analysis.classification;

    println!(
        "{} rows x {} columns ({} numeric, {} categorical, {} boolean)",
        analysis.total_rows.to_string().white().bold(),
        analysis.total_columns.to_string().white().bold(),
        classification.numeric.len(),
        classification.categorical.len(),
        classification.boolean.len()
    );

    let overall = analysis.quality.overall;
    let overall_text = format!("{:.1}%", overall);
    let overall_text = if overall >= 95.0 {
        overall_text.green()
    } else if overall >= 80.0 {
        overall_text.yellow()
    } else {
        overall_text.red()
    };
    println!("Overall completeness: {}", overall_text);

    let incomplete: Vec<(&str, f64)> = analysis.quality.incomplete_columns(100.0).collect();
    if !incomplete.is_empty() {
        println!();
        println!("{}", "Incomplete columns:".yellow().bold());
        for (column, pct) in incomplete {
            let missing = analysis.quality.missing.get(column).copied().unwrap_or(0);
            println!("  {:20} {:>6.1}% ({} missing)", column, pct, missing);
        }
    }

    if !analysis.statistics.is_empty() {
        println!();
        println!("{}", "Numeric columns:".yellow().bold());
        println!(
            "  {:20} {:>12} {:>12} {:>12} {:>12}  {}",
            "column", "mean", "median", "std", "outliers", "trend"
        );
        for (column, stats) in &analysis.statistics {
            let outliers = analysis.outliers.get(column).map(|o| o.count).unwrap_or(0);
            let trend = match analysis.trends.get(column) {
                Some(t) => match (t.direction, t.change_percent) {
                    (TrendDirection::Increasing, Some(c)) => format!("↑ {:+.1}%", c).green().to_string(),
                    (TrendDirection::Decreasing, Some(c)) => format!("↓ {:+.1}%", c).red().to_string(),
                    (direction, _) => direction.label().dimmed().to_string(),
                },
                None => "-".dimmed().to_string(),
            };
            println!(
                "  {:20} {:>12.2} {:>12.2} {:>12.2} {:>12}  {}",
                column, stats.mean, stats.median, stats.std, outliers, trend
            );
        }
    }

    if !analysis.categories.is_empty() {
        println!();
        println!("{}", "Categorical columns:".yellow().bold());
        for (column, profile) in &analysis.categories {
            let top: Vec<String> = profile
                .top_values
                .iter()
                .map(|c| format!("{} ({})", c.value, c.count))
                .collect();
            println!(
                "  {:20} {:>5} unique  {}",
                column,
                profile.unique_count,
                top.join(", ").dimmed()
            );
        }
    }

    println!();
    println!(
        "Generated {} insights",
        report.insights.len().to_string().white().bold()
    );
    super::insights::print_insights(&report.insights);
}
