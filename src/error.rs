//! Unified error types for chatstat.
//!
//! This module provides a single [`ChatstatError`] enum for every failure the
//! library surfaces to callers. Conditions the parser recovers from on its own
//! (a malformed line, a corrupt timestamp, a media placeholder) never become
//! errors; they are described by [`DropReason`] and counted in
//! [`ParseStats`](crate::core::ParseStats).
//!
//! # Error Handling Philosophy
//!
//! - **Fatal** errors abort the parse call with no partial result
//!   ([`UnsupportedFormat`](ChatstatError::UnsupportedFormat),
//!   [`AlignmentMismatch`](ChatstatError::AlignmentMismatch))
//! - **Noise** in real-world exports is dropped silently and logged at `debug`

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatstat operations.
///
/// # Example
///
/// ```rust
/// use chatstat::error::Result;
/// use chatstat::ParsedTranscript;
///
/// fn load() -> Result<Option<ParsedTranscript>> {
///     Ok(None)
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatError>;

/// The error type for all chatstat operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatError {
    /// The format tag is not one of the two supported export formats.
    ///
    /// Raised before any text is looked at; there is never a partial result.
    #[error("Unsupported transcript format '{tag}'. Expected one of: {expected}")]
    UnsupportedFormat {
        /// The tag the caller supplied
        tag: String,
        /// Comma-separated list of accepted tags
        expected: &'static str,
    },

    /// The bracketed (iOS) segmenter produced a different number of
    /// timestamps than (sender, body) pairs.
    ///
    /// The records cannot be aligned safely, so the whole parse is rejected.
    #[error(
        "Timestamp/message alignment mismatch: {timestamps} timestamps but {messages} messages"
    )]
    AlignmentMismatch {
        /// Number of timestamp anchors kept after omission filtering
        timestamps: usize,
        /// Number of (sender, body) pairs extracted
        messages: usize,
    },

    /// An I/O error occurred while reading an export file.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The export file is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// A parser configuration was rejected.
    #[error("Invalid configuration{}: {message}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    InvalidConfig {
        /// Description of what's wrong
        message: String,
        /// The config file path, if loaded from disk
        path: Option<PathBuf>,
    },

    /// CSV serialization error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a candidate record was dropped instead of emitted.
///
/// None of these abort a parse; they are the expected noise of real exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropReason {
    /// A dashed-format line did not have the `date, time - ...` shape.
    MalformedLine,
    /// The extracted date/time failed strict parsing.
    TimestampParseFailure,
    /// A dashed-format body was exactly the media placeholder.
    MediaPlaceholder,
    /// A bracketed-format span was an omitted attachment.
    OmissionSpan,
}

impl std::fmt::Display for DropReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DropReason::MalformedLine => write!(f, "malformed line"),
            DropReason::TimestampParseFailure => write!(f, "timestamp parse failure"),
            DropReason::MediaPlaceholder => write!(f, "media placeholder"),
            DropReason::OmissionSpan => write!(f, "omitted attachment"),
        }
    }
}

impl From<std::string::FromUtf8Error> for ChatstatError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatstatError::Utf8 {
            context: "transcript decoding".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatError {
    /// Creates an unsupported format error for the given tag.
    pub fn unsupported_format(tag: impl Into<String>) -> Self {
        ChatstatError::UnsupportedFormat {
            tag: tag.into(),
            expected: "ios, android",
        }
    }

    /// Creates an alignment mismatch error.
    pub fn alignment_mismatch(timestamps: usize, messages: usize) -> Self {
        ChatstatError::AlignmentMismatch {
            timestamps,
            messages,
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        ChatstatError::InvalidConfig {
            message: message.into(),
            path,
        }
    }

    /// Returns `true` if the calling shell must treat this as terminal for
    /// the upload (no partial table may be rendered).
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ChatstatError::UnsupportedFormat { .. } | ChatstatError::AlignmentMismatch { .. }
        )
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatError::Io(_))
    }

    /// Returns `true` if this is an unsupported format error.
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, ChatstatError::UnsupportedFormat { .. })
    }

    /// Returns `true` if this is an alignment mismatch.
    pub fn is_alignment_mismatch(&self) -> bool {
        matches!(self, ChatstatError::AlignmentMismatch { .. })
    }
}
