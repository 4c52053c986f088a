//! Ingestion: typed values, rows, datasets and delimited-text parsing.

mod dataset;
mod parser;
mod source;
mod value;

pub use dataset::{Dataset, Row};
pub use parser::{Parser, ParserConfig};
pub use source::SourceMetadata;
pub use value::Value;
