//! Insights command - print the ranked insight list for a data file.

use std::path::PathBuf;

use colored::Colorize;
use datalens::{Insight, InsightKind, Priority};

use super::{analyze_file, load_config};

pub fn run(file: PathBuf, config: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config.as_deref())?;
    let report = analyze_file(&file, config)?;

    println!(
        "{} {}",
        "Insights for".cyan().bold(),
        file.display().to_string().white()
    );
    print_insights(&report.insights);

    Ok(())
}

/// Print insights in rank order, one block per insight.
pub(crate) fn print_insights(insights: &[Insight]) {
    for insight in insights {
        let priority = match insight.priority {
            Priority::High => insight.priority.label().red().bold(),
            Priority::Medium => insight.priority.label().yellow(),
            Priority::Low => insight.priority.label().dimmed(),
        };
        let kind = match insight.kind {
            InsightKind::Warning => insight.kind.label().red(),
            InsightKind::Trend => insight.kind.label().green(),
            InsightKind::Info => insight.kind.label().blue(),
        };

        println!();
        println!("  [{}] {} {}", priority, kind, insight.title.white().bold());
        println!("      {}", insight.description);
    }
}
