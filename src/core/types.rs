// Input document model and analysis output types

use serde::{Deserialize, Serialize};

/// Outer envelope returned by the video OCR API
#[derive(Debug, Clone, Deserialize)]
pub struct OcrEnvelope {
    #[serde(rename = "Data")]
    pub data: EnvelopeData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnvelopeData {
    /// JSON-encoded `OcrResult`
    #[serde(rename = "Result")]
    pub result: String,
}

/// Decoded `Data.Result` payload
#[derive(Debug, Clone, Deserialize)]
pub struct OcrResult {
    pub frames: Vec<Frame>,
}

/// One sampled video frame
#[derive(Debug, Clone, Deserialize)]
pub struct Frame {
    /// Milliseconds from the start of the video
    pub timestamp: i64,
    pub elements: Vec<TextElement>,
}

/// A single recognised text run. `score` and other API fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TextElement {
    pub text: String,
    #[serde(rename = "textRectangles")]
    pub text_rectangles: TextRectangle,
}

/// Bounding box in frame pixels; only `top` drives the analysis
#[derive(Debug, Clone, Deserialize)]
pub struct TextRectangle {
    pub top: i64,
}

/// (timestamp ms, text) pair collected from a meaningful element
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct TimedText {
    pub timestamp: i64,
    pub text: String,
}

impl TimedText {
    pub fn new(timestamp: i64, text: impl Into<String>) -> Self {
        Self {
            timestamp,
            text: text.into(),
        }
    }
}

/// Meaningful elements sharing one quantized Y coordinate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub y: i64,
    pub items: Vec<TimedText>,
}

impl Bucket {
    pub fn count(&self) -> usize {
        self.items.len()
    }
}

/// Full result of one analysis run
#[derive(Debug, Clone, Serialize)]
pub struct RegionAnalysis {
    pub total_elements: usize,
    pub meaningful_elements: usize,
    /// Sorted by count descending, then Y ascending
    pub ranked: Vec<Bucket>,
    /// Predicted subtitle band; `None` when no element passed the length filter
    pub best_y: Option<i64>,
    /// Pairs within the tolerance of `best_y`, sorted by timestamp
    pub extracted: Vec<TimedText>,
}

impl RegionAnalysis {
    /// Share of meaningful elements that landed in `bucket`, in percent
    pub fn share_percent(&self, bucket: &Bucket) -> Option<f64> {
        if self.meaningful_elements == 0 {
            return None;
        }
        Some(bucket.count() as f64 * 100.0 / self.meaningful_elements as f64)
    }
}
