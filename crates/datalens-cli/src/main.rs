//! DataLens CLI - exploratory analysis for tabular data.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

/// Install the stderr log subscriber. `RUST_LOG` overrides the flag-derived level.
fn init_logging(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    let result = match cli.command {
        Commands::Analyze {
            file,
            output,
            config,
            bins,
            json,
        } => commands::analyze::run(file, output, config, bins, json),

        Commands::Insights { file, config } => commands::insights::run(file, config),

        Commands::Correlations { file, config, min } => {
            commands::correlations::run(file, config, min)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
