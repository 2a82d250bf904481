use crate::core::errors::ConfigError;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::Level;

/// Where the OCR document is read from
#[derive(Debug, Clone)]
pub struct InputConfig {
    pub path: PathBuf,
}

/// Bucketing and region-selection parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisSettings {
    /// Elements shorter than this (in chars) are treated as OCR noise
    pub min_text_chars: usize,
    /// Vertical quantization step in pixels
    pub bucket_size: i64,
    /// Buckets within this many pixels of the best Y feed the preview
    pub tolerance: i64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            min_text_chars: 3,
            bucket_size: 10,
            tolerance: 20,
        }
    }
}

/// Console report layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    pub top_buckets: usize,
    pub preview_limit: usize,
    pub sample_max_chars: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            top_buckets: 5,
            preview_limit: 10,
            sample_max_chars: 30,
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub input: InputConfig,
    pub analysis: AnalysisSettings,
    pub report: ReportSettings,
    pub log_level: Level,
}

pub const DEFAULT_INPUT_PATH: &str = "src/main/java/com/example/demo/exmaple.json";

impl Config {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build and validate a config from an arbitrary key source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self::load(&lookup);
        config.validate()?;
        Ok(config)
    }

    fn load<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults_analysis = AnalysisSettings::default();
        let defaults_report = ReportSettings::default();

        let log_level = lookup("LOG_LEVEL")
            .and_then(|s| match s.to_lowercase().as_str() {
                "trace" => Some(Level::TRACE),
                "debug" => Some(Level::DEBUG),
                "info" => Some(Level::INFO),
                "warn" | "warning" => Some(Level::WARN),
                "error" => Some(Level::ERROR),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        Self {
            input: InputConfig {
                path: lookup("OCR_RESULT_PATH")
                    .map(|s| PathBuf::from(s.trim()))
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_PATH)),
            },
            analysis: AnalysisSettings {
                min_text_chars: parse_or(lookup, "MIN_TEXT_CHARS", defaults_analysis.min_text_chars),
                bucket_size: parse_or(lookup, "BUCKET_SIZE_PX", defaults_analysis.bucket_size),
                tolerance: parse_or(lookup, "REGION_TOLERANCE_PX", defaults_analysis.tolerance),
            },
            report: ReportSettings {
                top_buckets: parse_or(lookup, "TOP_BUCKETS", defaults_report.top_buckets),
                preview_limit: parse_or(lookup, "PREVIEW_LIMIT", defaults_report.preview_limit),
                sample_max_chars: parse_or(lookup, "SAMPLE_MAX_CHARS", defaults_report.sample_max_chars),
            },
            log_level,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.input.path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyInputPath);
        }

        if self.analysis.min_text_chars == 0 {
            return Err(ConfigError::InvalidMinTextChars(self.analysis.min_text_chars));
        }

        if self.analysis.bucket_size <= 0 {
            return Err(ConfigError::InvalidBucketSize(self.analysis.bucket_size));
        }

        if self.analysis.tolerance < 0 {
            return Err(ConfigError::InvalidTolerance(self.analysis.tolerance));
        }

        if self.report.top_buckets == 0 {
            return Err(ConfigError::InvalidReportConfig(
                "top_buckets must be > 0".to_string(),
            ));
        }
        if self.report.preview_limit == 0 {
            return Err(ConfigError::InvalidReportConfig(
                "preview_limit must be > 0".to_string(),
            ));
        }
        if self.report.sample_max_chars == 0 {
            return Err(ConfigError::InvalidReportConfig(
                "sample_max_chars must be > 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn input_path(&self) -> &PathBuf {
        &self.input.path
    }

    pub fn log_level(&self) -> Level {
        self.log_level
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.input_path(), &PathBuf::from(DEFAULT_INPUT_PATH));
        assert_eq!(config.analysis, AnalysisSettings::default());
        assert_eq!(config.report, ReportSettings::default());
        assert_eq!(config.log_level(), Level::WARN);
    }

    #[test]
    fn test_overrides_and_garbage_fallback() {
        let config = Config::from_lookup(lookup_from(&[
            ("OCR_RESULT_PATH", "data/ocr.json"),
            ("BUCKET_SIZE_PX", "25"),
            ("REGION_TOLERANCE_PX", "not-a-number"),
            ("LOG_LEVEL", "DEBUG"),
        ]))
        .unwrap();

        assert_eq!(config.input_path(), &PathBuf::from("data/ocr.json"));
        assert_eq!(config.analysis.bucket_size, 25);
        assert_eq!(config.analysis.tolerance, 20);
        assert_eq!(config.log_level(), Level::DEBUG);
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        assert!(matches!(
            Config::from_lookup(lookup_from(&[("BUCKET_SIZE_PX", "0")])),
            Err(ConfigError::InvalidBucketSize(0))
        ));
        assert!(matches!(
            Config::from_lookup(lookup_from(&[("MIN_TEXT_CHARS", "0")])),
            Err(ConfigError::InvalidMinTextChars(0))
        ));
        assert!(matches!(
            Config::from_lookup(lookup_from(&[("REGION_TOLERANCE_PX", "-5")])),
            Err(ConfigError::InvalidTolerance(-5))
        ));
        assert!(matches!(
            Config::from_lookup(lookup_from(&[("OCR_RESULT_PATH", "  ")])),
            Err(ConfigError::EmptyInputPath)
        ));
        assert!(matches!(
            Config::from_lookup(lookup_from(&[("TOP_BUCKETS", "0")])),
            Err(ConfigError::InvalidReportConfig(_))
        ));
    }
}
