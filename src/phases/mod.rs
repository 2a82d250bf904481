// Analysis phases: bucket by Y, rank, select the preview

pub mod aggregate;
pub mod analyzer;
pub mod rank;

pub use aggregate::{aggregate, quantize, Aggregation};
pub use analyzer::RegionAnalyzer;
pub use rank::{best_y, extraction_preview, rank_buckets};
