//! Error surface for submission intake.
//!
//! All variants are typed, cloneable, and comparable so callers can branch
//! on the exact failure and tests can assert on it. Every intake error is a
//! client-side problem with the submitted data, not an internal fault.

use thiserror::Error;

/// Errors produced while validating a submission or extracting its text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    /// The record carried no payload.
    #[error("submission has no payload")]
    MissingPayload,

    /// A byte payload did not decode as UTF-8.
    #[error("invalid utf-8 payload: {0}")]
    InvalidUtf8(String),

    /// The payload exceeds the configured size limit.
    #[error("payload exceeds size limit: {0}")]
    PayloadTooLarge(String),

    /// Metadata violated an intake rule.
    #[error("invalid metadata: {0}")]
    InvalidMetadata(String),

    /// No extractor handles this file extension.
    #[error("unsupported submission format: .{extension}")]
    UnsupportedFormat { extension: String },

    /// Invalid intake configuration.
    #[error("invalid ingest config: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_format_names_the_extension() {
        let err = IngestError::UnsupportedFormat {
            extension: "pdf".into(),
        };
        assert!(err.to_string().contains(".pdf"));
    }

    #[test]
    fn errors_are_comparable() {
        assert_eq!(IngestError::MissingPayload, IngestError::MissingPayload);
        assert_ne!(
            IngestError::MissingPayload,
            IngestError::InvalidUtf8("bad".into())
        );
    }
}
