// Library exports for the subtitle region probe
//
// Loads video OCR output, buckets text by vertical position and predicts
// which band carries the subtitles.

pub mod core;
pub mod phases;
pub mod services;
pub mod utils;

// Re-export commonly used types and functions
pub use core::{
    config::{AnalysisSettings, Config, ReportSettings},
    errors::{ConfigError, LoadError},
    types::{Bucket, Frame, OcrResult, RegionAnalysis, TextElement, TimedText},
};

pub use phases::RegionAnalyzer;

pub use services::{load_document, parse_document, Reporter};
