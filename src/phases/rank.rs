// Ranking of Y buckets and selection of the extraction preview

use std::cmp::Reverse;
use std::collections::BTreeMap;

use crate::core::types::{Bucket, TimedText};

/// Order buckets by element count, most populated first.
/// Equal counts fall back to the lowest Y.
pub fn rank_buckets(buckets: BTreeMap<i64, Vec<TimedText>>) -> Vec<Bucket> {
    let mut ranked: Vec<Bucket> = buckets
        .into_iter()
        .map(|(y, items)| Bucket { y, items })
        .collect();

    ranked.sort_by_key(|b| (Reverse(b.count()), b.y));
    ranked
}

/// Y of the top-ranked bucket
pub fn best_y(ranked: &[Bucket]) -> Option<i64> {
    ranked.first().map(|b| b.y)
}

/// Everything a region-based extractor would pick up around `best_y`,
/// sorted by timestamp (text breaks ties). A negative tolerance selects nothing.
pub fn extraction_preview(ranked: &[Bucket], best_y: i64, tolerance: i64) -> Vec<TimedText> {
    let Ok(tolerance) = u64::try_from(tolerance) else {
        return Vec::new();
    };

    let mut extracted: Vec<TimedText> = ranked
        .iter()
        .filter(|b| b.y.abs_diff(best_y) <= tolerance)
        .flat_map(|b| b.items.iter().cloned())
        .collect();

    extracted.sort();
    extracted
}
