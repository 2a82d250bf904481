// Loader for video OCR result documents
//
// The API wraps the frames document as a JSON string inside `Data.Result`,
// so decoding happens in two passes.

use std::path::Path;
use tracing::{debug, info};

use crate::core::errors::{LoadError, LoadResult};
use crate::core::types::{OcrEnvelope, OcrResult};

/// Read and decode the OCR document at `path`
pub fn load_document(path: &Path) -> LoadResult<OcrResult> {
    info!("Loading OCR document: {}", path.display());

    let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_document(&raw)
}

/// Decode an OCR document already held in memory
pub fn parse_document(raw: &str) -> LoadResult<OcrResult> {
    let envelope: OcrEnvelope = serde_json::from_str(raw).map_err(LoadError::InvalidEnvelope)?;

    debug!("Data.Result payload: {} bytes", envelope.data.result.len());

    let result: OcrResult =
        serde_json::from_str(&envelope.data.result).map_err(LoadError::InvalidResult)?;

    info!("Decoded {} frames", result.frames.len());
    Ok(result)
}
