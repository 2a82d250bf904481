// Console report for a region analysis run

use crate::core::config::{AnalysisSettings, ReportSettings};
use crate::core::types::RegionAnalysis;
use crate::utils::truncate_sample;

const RULE_WIDTH: usize = 70;

/// Renders a `RegionAnalysis` as the plain-text diagnostic report
pub struct Reporter {
    analysis: AnalysisSettings,
    report: ReportSettings,
}

impl Reporter {
    pub fn new(analysis: AnalysisSettings, report: ReportSettings) -> Self {
        Self { analysis, report }
    }

    /// Full report text, newline terminated
    pub fn render(&self, result: &RegionAnalysis) -> String {
        let mut lines = vec![
            format!("Total elements: {}", result.total_elements),
            format!(
                "Meaningful elements ({}+ chars): {}",
                self.analysis.min_text_chars, result.meaningful_elements
            ),
        ];

        let best_y = match result.best_y {
            Some(y) => y,
            None => {
                lines.push(String::new());
                lines.push(format!(
                    "No meaningful text elements ({}+ chars) found; subtitle region cannot be predicted.",
                    self.analysis.min_text_chars
                ));
                return join(lines);
            }
        };

        lines.push(String::new());
        lines.push(format!(
            "Top {} Y positions (meaningful text only):",
            self.report.top_buckets
        ));
        lines.push(format!(
            "{:<12} {:<8} {:<16} {}",
            "Y Position", "Count", "% of Meaningful", "Sample Text"
        ));
        lines.push("-".repeat(RULE_WIDTH));

        for bucket in result.ranked.iter().take(self.report.top_buckets) {
            let pct = result.share_percent(bucket).unwrap_or(0.0);
            let sample = bucket
                .items
                .first()
                .map(|item| truncate_sample(&item.text, self.report.sample_max_chars))
                .unwrap_or_default();
            lines.push(format!(
                "Y={:<9} {:<8} {:>6.1}%          '{}'",
                bucket.y,
                bucket.count(),
                pct,
                sample
            ));
        }

        lines.push(String::new());
        lines.push(String::new());
        lines.push("✅ PREDICTED RESULT:".to_string());
        lines.push(format!("Subtitle region will be Y={}", best_y));
        lines.push(String::new());
        lines.push(format!(
            "Text that will be extracted (within ±{}px of Y={}):",
            self.analysis.tolerance, best_y
        ));

        for item in result.extracted.iter().take(self.report.preview_limit) {
            lines.push(format!("  t={}ms: '{}'", item.timestamp, item.text));
        }
        if result.extracted.len() > self.report.preview_limit {
            lines.push(format!(
                "  ... and {} more",
                result.extracted.len() - self.report.preview_limit
            ));
        }

        join(lines)
    }

    /// Machine-readable dump of the same analysis
    pub fn render_json(&self, result: &RegionAnalysis) -> serde_json::Result<String> {
        serde_json::to_string_pretty(result)
    }
}

fn join(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
