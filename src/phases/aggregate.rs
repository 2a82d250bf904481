// Aggregation: bucket meaningful OCR text by quantized top coordinate

use std::collections::BTreeMap;
use tracing::debug;

use crate::core::config::AnalysisSettings;
use crate::core::types::{OcrResult, TimedText};
use crate::utils::char_len;

/// Per-run counters and Y buckets, keyed by quantized top
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    pub total_elements: usize,
    pub meaningful_elements: usize,
    pub buckets: BTreeMap<i64, Vec<TimedText>>,
}

/// Floor `top` to a multiple of `bucket_size` (rounds toward negative infinity).
/// Tops whose floor would fall below `i64::MIN` saturate to `i64::MIN`.
/// `bucket_size` must be positive.
pub fn quantize(top: i64, bucket_size: i64) -> i64 {
    top.checked_sub(top.rem_euclid(bucket_size)).unwrap_or(i64::MIN)
}

/// Count every element and bucket the ones long enough to be real text.
/// Items keep frame/element order within each bucket.
pub fn aggregate(result: &OcrResult, settings: &AnalysisSettings) -> Aggregation {
    let mut agg = Aggregation::default();

    for frame in &result.frames {
        for elem in &frame.elements {
            agg.total_elements += 1;

            if char_len(&elem.text) < settings.min_text_chars {
                continue;
            }
            agg.meaningful_elements += 1;

            let y = quantize(elem.text_rectangles.top, settings.bucket_size);
            agg.buckets
                .entry(y)
                .or_default()
                .push(TimedText::new(frame.timestamp, elem.text.as_str()));
        }
    }

    debug!(
        "Aggregated {} elements ({} meaningful) into {} buckets",
        agg.total_elements,
        agg.meaningful_elements,
        agg.buckets.len()
    );

    agg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Frame, TextElement, TextRectangle};

    fn elem(text: &str, top: i64) -> TextElement {
        TextElement {
            text: text.to_string(),
            text_rectangles: TextRectangle { top },
        }
    }

    fn sample() -> OcrResult {
        OcrResult {
            frames: vec![
                Frame {
                    timestamp: 100,
                    elements: vec![elem("Hi", 200), elem("Hello there", 205)],
                },
                Frame {
                    timestamp: 200,
                    elements: vec![elem("Yo", 500), elem("Goodbye now", 500)],
                },
            ],
        }
    }

    #[test]
    fn test_quantize_floors() {
        assert_eq!(quantize(205, 10), 200);
        assert_eq!(quantize(200, 10), 200);
        assert_eq!(quantize(209, 10), 200);
        assert_eq!(quantize(-1, 10), -10);
        assert_eq!(quantize(-10, 10), -10);
        assert_eq!(quantize(137, 50), 100);
    }

    #[test]
    fn test_quantize_extreme_tops() {
        assert_eq!(quantize(9_223_372_036_854_775_800, 10), 9_223_372_036_854_775_800);
        assert_eq!(quantize(i64::MAX, 10), 9_223_372_036_854_775_800);
        assert_eq!(quantize(-9_223_372_036_854_775_800, 10), -9_223_372_036_854_775_800);
        assert_eq!(quantize(-9_223_372_036_854_775_801, 10), i64::MIN);
        assert_eq!(quantize(i64::MIN, 10), i64::MIN);
    }

    #[test]
    fn test_extreme_tops_bucketed() {
        let result = OcrResult {
            frames: vec![Frame {
                timestamp: 0,
                elements: vec![
                    elem("bottom", 9_223_372_036_854_775_800),
                    elem("top far", -9_223_372_036_854_775_800),
                    elem("minimum", i64::MIN),
                ],
            }],
        };
        let agg = aggregate(&result, &AnalysisSettings::default());

        assert_eq!(agg.meaningful_elements, 3);
        let keys: Vec<i64> = agg.buckets.keys().copied().collect();
        assert_eq!(
            keys,
            vec![i64::MIN, -9_223_372_036_854_775_800, 9_223_372_036_854_775_800]
        );
    }

    #[test]
    fn test_two_frame_example() {
        let agg = aggregate(&sample(), &AnalysisSettings::default());

        assert_eq!(agg.total_elements, 4);
        assert_eq!(agg.meaningful_elements, 2);
        assert_eq!(agg.buckets.len(), 2);
        assert_eq!(agg.buckets[&200], vec![TimedText::new(100, "Hello there")]);
        assert_eq!(agg.buckets[&500], vec![TimedText::new(200, "Goodbye now")]);
    }

    #[test]
    fn test_bucket_totals_match_meaningful_count() {
        let result = OcrResult {
            frames: (0..20)
                .map(|i| Frame {
                    timestamp: i * 40,
                    elements: vec![
                        elem("subtitle line", 610 + (i % 7)),
                        elem("..", 610),
                        elem("logo", 12),
                        elem("字幕字", 3 * i),
                    ],
                })
                .collect(),
        };
        let settings = AnalysisSettings::default();
        let agg = aggregate(&result, &settings);

        assert_eq!(agg.total_elements, 80);
        assert!(agg.meaningful_elements <= agg.total_elements);
        assert_eq!(agg.meaningful_elements, 60);
        let bucketed: usize = agg.buckets.values().map(Vec::len).sum();
        assert_eq!(bucketed, agg.meaningful_elements);

        for frame in &result.frames {
            for e in frame.elements.iter().filter(|e| char_len(&e.text) >= 3) {
                let key = quantize(e.text_rectangles.top, settings.bucket_size);
                let holders: Vec<_> = agg
                    .buckets
                    .iter()
                    .filter(|(_, items)| {
                        items.iter().any(|t| t.timestamp == frame.timestamp && t.text == e.text)
                    })
                    .map(|(y, _)| *y)
                    .collect();
                assert_eq!(holders, vec![key]);
            }
        }
    }

    #[test]
    fn test_empty_result() {
        let agg = aggregate(&OcrResult { frames: vec![] }, &AnalysisSettings::default());
        assert_eq!(agg.total_elements, 0);
        assert_eq!(agg.meaningful_elements, 0);
        assert!(agg.buckets.is_empty());
    }
}
