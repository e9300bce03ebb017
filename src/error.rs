//! All error types for the locship crate.
//!
//! There is no local recovery anywhere in the pipeline: every detected
//! error propagates to `main`, which prints it and exits non-zero.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("document in collection `{collection}` is missing a `lang` property")]
    MissingLanguageField { collection: String },

    #[error("collection `{collection}` is empty or has no document for language `{language}`")]
    NoMatchingDocument { collection: String, language: String },

    #[error(
        "language documents in collection `{collection}` have different property counts ({left} vs {right})"
    )]
    ShapeMismatch {
        collection: String,
        left: usize,
        right: usize,
    },

    #[error(
        "unsupported value for `{key}` in collection `{collection}`: translatable values must be strings or numbers"
    )]
    UnsupportedValue { collection: String, key: String },

    #[error("document store error: {0}")]
    Store(#[from] mongodb::error::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_config_error_display() {
        let error = Error::Config("please specify a target platform".to_string());
        assert_eq!(
            error.to_string(),
            "configuration error: please specify a target platform"
        );
    }

    #[test]
    fn test_missing_language_field_names_collection() {
        let error = Error::MissingLanguageField {
            collection: "greeting".to_string(),
        };
        assert!(error.to_string().contains("`greeting`"));
        assert!(error.to_string().contains("lang"));
    }

    #[test]
    fn test_no_matching_document_names_language() {
        let error = Error::NoMatchingDocument {
            collection: "greeting".to_string(),
            language: "ua".to_string(),
        };
        assert!(error.to_string().contains("`greeting`"));
        assert!(error.to_string().contains("`ua`"));
    }

    #[test]
    fn test_shape_mismatch_shows_counts() {
        let error = Error::ShapeMismatch {
            collection: "menu".to_string(),
            left: 4,
            right: 3,
        };
        assert!(error.to_string().contains("(4 vs 3)"));
    }

    #[test]
    fn test_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = Error::Io(io_error);
        assert!(error.to_string().contains("I/O error"));
    }
}
