//! Example: Analyze a tabular data file with DataLens.
//!
//! Usage:
//!   cargo run --example analyze -- <file_path>
//!
//! Example:
//!   cargo run --example analyze -- sales.csv

use std::env;
use std::path::Path;

use datalens::stats::CorrelationStrength;
use datalens::{AnalysisConfig, DataLens};

fn main() -> datalens::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example analyze -- <file_path>");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example analyze -- sales.csv");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("DataLens Analysis: {}", file_path);
    println!("{}", separator);
    println!();

    let config = AnalysisConfig::default();
    let report = DataLens::new()
        .with_analysis_config(config.clone())
        .analyze_file(path)?;
    let analysis = &report.analysis;

    if let Some(source) = &report.source {
        println!("## Source Metadata");
        println!("  File: {}", source.file);
        println!("  Format: {}", source.format);
        println!("  Rows: {}", source.row_count);
        println!("  Columns: {}", source.column_count);
        println!("  Hash: {}", source.hash);
        println!();
    }

    println!("## Columns");
    println!("  Numeric:     {:?}", analysis.classification.numeric);
    println!("  Categorical: {:?}", analysis.classification.categorical);
    println!("  Boolean:     {:?}", analysis.classification.boolean);
    println!();

    println!("## Statistics");
    for (column, stats) in &analysis.statistics {
        println!(
            "  {:20} n={:<6} mean={:<12.3} median={:<12.3} std={:<12.3} skew={:.2}",
            column, stats.count, stats.mean, stats.median, stats.std, stats.skewness
        );
        if let Some(histogram) = analysis.distributions.get(column) {
            let peak = histogram.bins.iter().max_by_key(|b| b.count);
            if let Some(bin) = peak {
                println!(
                    "  {:20} peak bucket {} ({:.1}%)",
                    "", bin.label, bin.percentage
                );
            }
        }
    }
    println!();

    println!("## Correlations");
    for pair in analysis.correlations.pairs() {
        let strength = CorrelationStrength::classify(
            pair.coefficient,
            config.correlation_threshold,
            config.moderate_correlation_threshold,
        );
        println!(
            "  {:20} {:20} {:>7.3} {}",
            pair.first,
            pair.second,
            pair.coefficient,
            strength.label()
        );
    }
    println!();

    println!("## Data Quality");
    println!("  Overall completeness: {:.1}%", analysis.quality.overall);
    for (column, pct) in analysis.quality.incomplete_columns(100.0) {
        println!("  {:20} {:.1}%", column, pct);
    }
    println!();

    println!("## Insights ({} total)", report.insights.len());
    for insight in &report.insights {
        println!(
            "  [{:6}] [{:7}] {}",
            insight.priority.label(),
            insight.kind.label(),
            insight.title
        );
        println!("           {}", insight.description);
    }

    Ok(())
}
