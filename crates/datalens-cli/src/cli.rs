//! CLI argument definitions using clap.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// DataLens: exploratory analysis for tabular data
#[derive(Parser)]
#[command(name = "datalens")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Log level implied by the verbosity flags.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a data file and write an analysis report
    Analyze {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path for the report (default: <file>.analysis.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON file with analysis settings
        #[arg(short, long, value_name = "CFG")]
        config: Option<PathBuf>,

        /// Number of histogram bins per numeric column
        #[arg(long, value_name = "N")]
        bins: Option<usize>,

        /// Print the report as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Print the ranked insights for a data file
    Insights {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// JSON file with analysis settings
        #[arg(short, long, value_name = "CFG")]
        config: Option<PathBuf>,
    },

    /// Print pairwise correlations between numeric columns
    Correlations {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// JSON file with analysis settings
        #[arg(short, long, value_name = "CFG")]
        config: Option<PathBuf>,

        /// Only show pairs with |r| at least this value
        #[arg(long, value_name = "R", default_value = "0.0")]
        min: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_log_level_from_flags() {
        let cli = Cli::parse_from(["datalens", "insights", "data.csv"]);
        assert_eq!(cli.log_level(), "warn");

        let cli = Cli::parse_from(["datalens", "-vv", "insights", "data.csv"]);
        assert_eq!(cli.log_level(), "debug");

        let cli = Cli::parse_from(["datalens", "insights", "data.csv", "-q"]);
        assert_eq!(cli.log_level(), "error");
    }

    #[test]
    fn test_analyze_args() {
        let cli = Cli::parse_from([
            "datalens", "analyze", "sales.csv", "-o", "out.json", "--bins", "20", "--json",
        ]);
        match cli.command {
            Commands::Analyze {
                file,
                output,
                bins,
                json,
                config,
            } => {
                assert_eq!(file, PathBuf::from("sales.csv"));
                assert_eq!(output, Some(PathBuf::from("out.json")));
                assert_eq!(bins, Some(20));
                assert!(json);
                assert!(config.is_none());
            }
            _ => panic!("expected analyze"),
        }
    }
}
