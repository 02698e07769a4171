//! The text-extraction boundary.
//!
//! Binary container formats (PDF, DOCX) are out of scope for this crate;
//! the environment supplies an extractor for them. What ships here is the
//! trait that boundary is expressed through and a passthrough implementation
//! for plain-text formats.

use crate::error::IngestError;

/// Turns an uploaded document's bytes into plain text.
///
/// Implementations are keyed on the filename extension and must be safe to
/// share across threads; batch processing calls them in parallel.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, filename: &str, bytes: &[u8]) -> Result<String, IngestError>;
}

/// Passthrough extractor for plain-text formats (`.txt`, `.md`, `.text`).
///
/// Validates UTF-8 and returns the content unchanged. Any other extension
/// fails with [`IngestError::UnsupportedFormat`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PlainTextExtractor {
    fn extract_text(&self, filename: &str, bytes: &[u8]) -> Result<String, IngestError> {
        let extension = file_extension(filename);
        match extension.as_str() {
            "txt" | "md" | "text" => std::str::from_utf8(bytes)
                .map(str::to_owned)
                .map_err(|e| IngestError::InvalidUtf8(e.to_string())),
            _ => Err(IngestError::UnsupportedFormat { extension }),
        }
    }
}

/// Lowercased extension of `filename`, empty when there is none.
pub fn file_extension(filename: &str) -> String {
    std::path::Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase()
}
