pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items for convenience
pub use config::{AnalysisSettings, Config, ReportSettings};
pub use errors::{ConfigError, LoadError, LoadResult};
pub use types::{Bucket, Frame, OcrResult, RegionAnalysis, TextElement, TimedText};
