//! Column classification into numeric, categorical and boolean sets.

mod classification;

pub use classification::{ColumnClassification, ColumnKind};
