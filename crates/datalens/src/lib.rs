//! DataLens: exploratory analysis engine for tabular datasets.
//!
//! DataLens takes an ordered collection of records, classifies each column
//! as numeric or categorical, computes per-column statistics and
//! cross-column relationships, and distills the results into a ranked list
//! of human-readable insights.
//!
//! # Core Principles
//!
//! - **Pure**: analysis is a deterministic function of the dataset
//! - **Total**: degenerate inputs yield documented values, never NaN or panics
//! - **Ordered**: every per-column map follows the dataset's column order
//!
//! # Example
//!
//! ```no_run
//! use datalens::DataLens;
//!
//! let lens = DataLens::new();
//! let report = lens.analyze_file("sales.csv").unwrap();
//!
//! println!("Numeric columns: {:?}", report.analysis.classification.numeric);
//! for insight in &report.insights {
//!     println!("[{}] {}", insight.priority.label(), insight.title);
//! }
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod insight;
pub mod report;
pub mod schema;
pub mod stats;

mod datalens;

pub use crate::datalens::{Analysis, DataLens, analyze, analyze_with_config};
pub use config::{AnalysisConfig, DataLensConfig};
pub use error::{DataLensError, Result};
pub use input::{Dataset, Parser, ParserConfig, Row, SourceMetadata, Value};
pub use insight::{Insight, InsightEngine, InsightKind, Priority};
pub use report::AnalysisReport;
pub use schema::{ColumnClassification, ColumnKind};
pub use stats::{CorrelationMatrix, CorrelationPairing, CorrelationStrength};
