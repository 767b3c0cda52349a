//! Error types for the tfsum plan summarizer.
//!
//! This module provides the error hierarchy for all stages of the pipeline:
//! plan analysis, output rendering, and configuration loading. Every error is
//! detected synchronously and returned as a typed result; the CLI maps each
//! kind to a distinct exit code.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for tfsum operations.
#[derive(Debug, Error)]
pub enum TfsumError {
    /// Plan analysis errors.
    #[error("Analysis error: {0}")]
    Analyze(#[from] AnalyzeError),

    /// Output rendering errors.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Configuration errors.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors raised while analyzing a plan document.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The plan document is not valid JSON.
    #[error("Invalid JSON in plan document: {message}")]
    InvalidJson {
        /// Description of the JSON error.
        message: String,
    },

    /// A raw change record is missing required fields.
    #[error("Malformed change record at index {index} ({address}): {reason}")]
    MalformedRecord {
        /// Zero-based position of the record in the document.
        index: usize,
        /// Address of the record, or `<unknown>` when absent.
        address: String,
        /// What was missing or invalid.
        reason: String,
    },
}

/// Errors raised while rendering a summary.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The requested output format is not recognized.
    #[error("Unsupported output format '{requested}' (recognized: {recognized})")]
    UnsupportedFormat {
        /// The format name that was requested.
        requested: String,
        /// Comma-separated list of recognized names.
        recognized: String,
    },

    /// Serialization of the summary failed.
    #[error("Failed to serialize summary: {message}")]
    Serialization {
        /// Description of the serialization error.
        message: String,
    },
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file was not found.
    #[error("Configuration file not found: {path}")]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// The configuration file could not be parsed.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
        /// Optional source location.
        location: Option<String>,
    },

    /// A filter option references a value outside the enumerated sets.
    #[error("Invalid value '{value}' for {field} (allowed: {allowed})")]
    InvalidFilterValue {
        /// Option that carried the bad value.
        field: String,
        /// The rejected value.
        value: String,
        /// Comma-separated list of allowed values.
        allowed: String,
    },
}

/// Result type alias for tfsum operations.
pub type Result<T> = std::result::Result<T, TfsumError>;

/// Exit code for malformed or unparseable plan input.
pub const EXIT_MALFORMED_INPUT: u8 = 2;
/// Exit code for an unrecognized output format.
pub const EXIT_UNSUPPORTED_FORMAT: u8 = 3;
/// Exit code for invalid configuration or filter values.
pub const EXIT_INVALID_CONFIG: u8 = 4;

impl TfsumError {
    /// Creates a new internal error with the given message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns the process exit code for this error kind.
    ///
    /// Malformed input, unsupported formats, and invalid filter values each
    /// map to their own non-zero code so scripts can tell them apart.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Analyze(_) => EXIT_MALFORMED_INPUT,
            Self::Render(RenderError::UnsupportedFormat { .. }) => EXIT_UNSUPPORTED_FORMAT,
            Self::Config(_) => EXIT_INVALID_CONFIG,
            _ => 1,
        }
    }
}

impl AnalyzeError {
    /// Creates a malformed-record error for the entry at `index`.
    #[must_use]
    pub fn malformed(index: usize, address: Option<&str>, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            index,
            address: address.unwrap_or("<unknown>").to_string(),
            reason: reason.into(),
        }
    }
}

impl RenderError {
    /// Creates an unsupported-format error listing the recognized names.
    #[must_use]
    pub fn unsupported(requested: impl Into<String>, recognized: &[&str]) -> Self {
        Self::UnsupportedFormat {
            requested: requested.into(),
            recognized: recognized.join(", "),
        }
    }
}

impl ConfigError {
    /// Creates an invalid-filter-value error.
    #[must_use]
    pub fn invalid_filter(
        field: impl Into<String>,
        value: impl Into<String>,
        allowed: &[&str],
    ) -> Self {
        Self::InvalidFilterValue {
            field: field.into(),
            value: value.into(),
            allowed: allowed.join(", "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let malformed: TfsumError = AnalyzeError::malformed(0, None, "missing address").into();
        let unsupported: TfsumError = RenderError::unsupported("xml", &["text", "json"]).into();
        let invalid: TfsumError =
            ConfigError::invalid_filter("min_impact_level", "severe", &["low", "medium", "high"])
                .into();

        assert_eq!(malformed.exit_code(), EXIT_MALFORMED_INPUT);
        assert_eq!(unsupported.exit_code(), EXIT_UNSUPPORTED_FORMAT);
        assert_eq!(invalid.exit_code(), EXIT_INVALID_CONFIG);
        assert_eq!(TfsumError::internal("boom").exit_code(), 1);
    }

    #[test]
    fn test_malformed_record_names_offender() {
        let err = AnalyzeError::malformed(3, Some("aws_instance.web"), "missing action list");
        let message = err.to_string();
        assert!(message.contains("index 3"));
        assert!(message.contains("aws_instance.web"));
    }

    #[test]
    fn test_unsupported_format_names_recognized_set() {
        let err = RenderError::unsupported("yaml", &["text", "json", "table"]);
        let message = err.to_string();
        assert!(message.contains("'yaml'"));
        assert!(message.contains("text, json, table"));
    }
}
