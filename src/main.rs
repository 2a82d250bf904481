//! Subtitle region probe - reports which screen band most often carries text
//! Run with: cargo run --release -- [ocr_result.json] [--json]

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use subtitle_probe::{load_document, Config, RegionAnalyzer, Reporter};

const USAGE: &str = "usage: subtitle_probe [OCR_RESULT_JSON] [--json]";

/// Command-line arguments
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    input_path: Option<PathBuf>,
    json_output: bool,
}

/// Accepts at most one input path plus the `--json` flag
fn parse_args<I>(args: I) -> Result<CliArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs::default();

    for arg in args {
        if arg == "--json" {
            parsed.json_output = true;
        } else if arg.starts_with("--") {
            anyhow::bail!("Unknown option: {}\n{}", arg, USAGE);
        } else if parsed.input_path.is_none() {
            parsed.input_path = Some(PathBuf::from(arg));
        } else {
            anyhow::bail!("Unexpected argument: {}\n{}", arg, USAGE);
        }
    }

    Ok(parsed)
}

fn main() -> Result<()> {
    // Load configuration
    let config = Config::new().context("Failed to load configuration")?;

    // Initialize logging (stderr, so stdout carries only the report)
    let filter = EnvFilter::new(format!(
        "subtitle_probe={}",
        match config.log_level() {
            tracing::Level::TRACE => "trace",
            tracing::Level::DEBUG => "debug",
            tracing::Level::INFO => "info",
            tracing::Level::WARN => "warn",
            tracing::Level::ERROR => "error",
        }
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let input_path = args
        .input_path
        .unwrap_or_else(|| config.input_path().clone());
    let json_output = args.json_output;

    let document = load_document(&input_path)
        .with_context(|| format!("Failed to load OCR result from {}", input_path.display()))?;

    let analyzer = RegionAnalyzer::new(config.analysis.clone());
    let analysis = analyzer.analyze(&document);

    info!(
        "Analysis done: {} elements, {} meaningful, best Y {:?}",
        analysis.total_elements, analysis.meaningful_elements, analysis.best_y
    );

    let reporter = Reporter::new(config.analysis.clone(), config.report.clone());
    if json_output {
        let json = reporter
            .render_json(&analysis)
            .context("Failed to serialize analysis")?;
        println!("{}", json);
    } else {
        print!("{}", reporter.render(&analysis));
    }

    Ok(())
}
