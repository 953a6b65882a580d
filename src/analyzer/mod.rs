// Analyzer module: summary statistics and Z-score outlier detection.

pub mod price_analysis;

pub use price_analysis::{analyze, Z_SCORE_THRESHOLD};
