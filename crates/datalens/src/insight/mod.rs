//! Prioritized findings derived from an analysis.
//!
//! Insights are plain, serializable records ranked by [`Priority`]; the
//! [`InsightEngine`] derives them from a finished [`Analysis`](crate::Analysis).

mod generator;
mod insight;

pub use generator::InsightEngine;
pub use insight::{Insight, InsightKind, Priority};
