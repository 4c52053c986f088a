//! Correlations command - print pairwise correlations between numeric columns.

use std::path::PathBuf;

use colored::Colorize;
use datalens::CorrelationStrength;

use super::{analyze_file, load_config};

pub fn run(
    file: PathBuf,
    config: Option<PathBuf>,
    min: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config.as_deref())?;
    let (strong, moderate) = (config.correlation_threshold, config.moderate_correlation_threshold);
    let report = analyze_file(&file, config)?;

    let pairs: Vec<_> = report
        .analysis
        .correlations
        .pairs()
        .into_iter()
        .filter(|p| p.coefficient.abs() >= min)
        .collect();

    println!(
        "{} {}",
        "Correlations for".cyan().bold(),
        file.display().to_string().white()
    );

    if pairs.is_empty() {
        println!("{}", "No numeric column pairs to report.".dimmed());
        return Ok(());
    }

    println!();
    for pair in pairs {
        let strength = CorrelationStrength::classify(pair.coefficient, strong, moderate);
        let label = match strength {
            CorrelationStrength::Strong => strength.label().red().bold(),
            CorrelationStrength::Moderate => strength.label().yellow(),
            CorrelationStrength::Weak => strength.label().dimmed(),
        };
        println!(
            "  {:20} {:20} {:>7.3}  {}",
            pair.first, pair.second, pair.coefficient, label
        );
    }

    Ok(())
}
