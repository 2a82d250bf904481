// Region analysis: aggregate, rank and pick the preview in one pass

use tracing::{info, instrument, warn};

use crate::core::config::AnalysisSettings;
use crate::core::types::{OcrResult, RegionAnalysis};
use crate::phases::aggregate::aggregate;
use crate::phases::rank::{best_y, extraction_preview, rank_buckets};

/// Finds the subtitle band in a decoded OCR result
pub struct RegionAnalyzer {
    settings: AnalysisSettings,
}

impl RegionAnalyzer {
    pub fn new(settings: AnalysisSettings) -> Self {
        Self { settings }
    }

    #[instrument(skip(self, result), fields(frames = result.frames.len()))]
    pub fn analyze(&self, result: &OcrResult) -> RegionAnalysis {
        let agg = aggregate(result, &self.settings);
        let ranked = rank_buckets(agg.buckets);
        let best = best_y(&ranked);

        let extracted = match best {
            Some(y) => extraction_preview(&ranked, y, self.settings.tolerance),
            None => {
                warn!(
                    "No text elements with >= {} chars; subtitle region cannot be predicted",
                    self.settings.min_text_chars
                );
                Vec::new()
            }
        };

        if let Some(y) = best {
            info!(
                "Predicted subtitle region Y={} ({} buckets, {} lines within ±{}px)",
                y,
                ranked.len(),
                extracted.len(),
                self.settings.tolerance
            );
        }

        RegionAnalysis {
            total_elements: agg.total_elements,
            meaningful_elements: agg.meaningful_elements,
            ranked,
            best_y: best,
            extracted,
        }
    }
}

impl Default for RegionAnalyzer {
    fn default() -> Self {
        Self::new(AnalysisSettings::default())
    }
}
