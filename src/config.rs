//! Configuration types for the transcript parsers.
//!
//! The phrase tables that drive the content filter and the attribution
//! classifier are plain data. Defaults reproduce the exports as WhatsApp
//! writes them in English; callers may replace them (for a localized export,
//! say) but the parser never mutates them.
//!
//! # Parser Configurations
//!
//! - [`BracketedConfig`] - iOS `[DD/MM/YY, H:MM:SS AM]` exports
//! - [`DashedConfig`] - Android `DD/MM/YY, H:MM am - ` exports
//! - [`ParserConfig`] - both, as one serializable unit
//!
//! # Example
//!
//! ```rust
//! use chatstat::config::{BracketedConfig, ParserConfig};
//!
//! let config = ParserConfig::new().with_bracketed(
//!     BracketedConfig::new().with_omission_phrase("document omitted"),
//! );
//! assert!(config.bracketed.omission_phrases.iter().any(|p| p == "document omitted"));
//! ```

#[cfg(feature = "json-output")]
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChatstatError, Result};

/// Attachment placeholders that remove a whole bracketed span.
pub const DEFAULT_OMISSION_PHRASES: &[&str] = &[
    "sticker omitted",
    "image omitted",
    "video omitted",
    "audio omitted",
];

/// Body phrases that mark a bracketed span as a group-level event.
pub const DEFAULT_NOTIFICATION_PHRASES: &[&str] = &[
    "joined using this group's invite link",
    "Messages and calls are end-to-end encrypted.",
];

/// Body text Android writes in place of a dropped attachment.
pub const DEFAULT_MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// Configuration for iOS (bracketed) export parsing.
///
/// # Example
///
/// ```rust
/// use chatstat::config::BracketedConfig;
///
/// let config = BracketedConfig::new().with_strip_tilde(false);
/// assert!(!config.strip_tilde);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BracketedConfig {
    /// Body prefixes that drop the entire span, timestamp included
    pub omission_phrases: Vec<String>,

    /// Body substrings that reassign the sender to the group sentinel
    pub notification_phrases: Vec<String>,

    /// Remove `~` from bodies (contact-name styling artifact) (default: true)
    pub strip_tilde: bool,
}

impl Default for BracketedConfig {
    fn default() -> Self {
        Self {
            omission_phrases: DEFAULT_OMISSION_PHRASES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            notification_phrases: DEFAULT_NOTIFICATION_PHRASES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            strip_tilde: true,
        }
    }
}

impl BracketedConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an omission phrase.
    #[must_use]
    pub fn with_omission_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.omission_phrases.push(phrase.into());
        self
    }

    /// Adds a notification phrase.
    #[must_use]
    pub fn with_notification_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.notification_phrases.push(phrase.into());
        self
    }

    /// Sets whether to strip `~` from bodies.
    #[must_use]
    pub fn with_strip_tilde(mut self, strip: bool) -> Self {
        self.strip_tilde = strip;
        self
    }

    /// Returns the omission phrase the body starts with, if any.
    pub(crate) fn omission_match(&self, body: &str) -> Option<&str> {
        self.omission_phrases
            .iter()
            .map(String::as_str)
            .find(|phrase| body.starts_with(phrase))
    }

    /// Returns `true` if the body announces a group-level event.
    pub(crate) fn is_notification(&self, body: &str) -> bool {
        self.notification_phrases
            .iter()
            .any(|phrase| body.contains(phrase.as_str()))
    }
}

/// Configuration for Android (dashed) export parsing.
///
/// # Example
///
/// ```rust
/// use chatstat::config::DashedConfig;
///
/// let config = DashedConfig::new().with_join_continuation_lines(true);
/// assert!(config.join_continuation_lines);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashedConfig {
    /// Exact body that marks a dropped attachment
    pub media_placeholder: String,

    /// Append non-matching lines to the previous record instead of dropping
    /// them (default: false)
    pub join_continuation_lines: bool,
}

impl Default for DashedConfig {
    fn default() -> Self {
        Self {
            media_placeholder: DEFAULT_MEDIA_PLACEHOLDER.to_string(),
            join_continuation_lines: false,
        }
    }
}

impl DashedConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the media placeholder text.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }

    /// Enables or disables joining of continuation lines.
    #[must_use]
    pub fn with_join_continuation_lines(mut self, enabled: bool) -> Self {
        self.join_continuation_lines = enabled;
        self
    }
}

/// Configuration for both export formats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// iOS export settings
    pub bracketed: BracketedConfig,

    /// Android export settings
    pub dashed: DashedConfig,
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the iOS settings.
    #[must_use]
    pub fn with_bracketed(mut self, bracketed: BracketedConfig) -> Self {
        self.bracketed = bracketed;
        self
    }

    /// Replaces the Android settings.
    #[must_use]
    pub fn with_dashed(mut self, dashed: DashedConfig) -> Self {
        self.dashed = dashed;
        self
    }

    /// Checks that no phrase is empty.
    ///
    /// An empty omission phrase would match every span and an empty
    /// notification phrase every body.
    pub fn validate(&self) -> Result<()> {
        if self.bracketed.omission_phrases.iter().any(String::is_empty) {
            return Err(ChatstatError::invalid_config(
                "omission_phrases must not contain empty strings",
                None,
            ));
        }
        if self.bracketed.notification_phrases.iter().any(String::is_empty) {
            return Err(ChatstatError::invalid_config(
                "notification_phrases must not contain empty strings",
                None,
            ));
        }
        if self.dashed.media_placeholder.is_empty() {
            return Err(ChatstatError::invalid_config(
                "media_placeholder must not be empty",
                None,
            ));
        }
        Ok(())
    }

    /// Parses and validates a JSON configuration.
    ///
    /// Missing fields fall back to their defaults.
    #[cfg(feature = "json-output")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ParserConfig = serde_json::from_str(json)
            .map_err(|e| ChatstatError::invalid_config(e.to_string(), None))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a JSON configuration file.
    #[cfg(feature = "json-output")]
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content).map_err(|err| match err {
            ChatstatError::InvalidConfig { message, .. } => {
                ChatstatError::invalid_config(message, Some(path.to_path_buf()))
            }
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracketed_defaults() {
        let config = BracketedConfig::default();
        assert_eq!(config.omission_phrases.len(), 4);
        assert_eq!(config.notification_phrases.len(), 2);
        assert!(config.strip_tilde);
    }

    #[test]
    fn test_omission_match_is_prefix() {
        let config = BracketedConfig::default();
        assert_eq!(config.omission_match("image omitted"), Some("image omitted"));
        assert_eq!(
            config.omission_match("sticker omitted extra"),
            Some("sticker omitted")
        );
        assert_eq!(config.omission_match("look, image omitted"), None);
    }

    #[test]
    fn test_notification_is_substring() {
        let config = BracketedConfig::default();
        assert!(config.is_notification("Carol joined using this group's invite link"));
        assert!(config.is_notification(
            "Messages and calls are end-to-end encrypted. No one outside of this chat can read them."
        ));
        assert!(!config.is_notification("see you at the link"));
    }

    #[test]
    fn test_dashed_defaults() {
        let config = DashedConfig::default();
        assert_eq!(config.media_placeholder, "<Media omitted>");
        assert!(!config.join_continuation_lines);
    }

    #[test]
    fn test_validate_rejects_empty_phrase() {
        let config =
            ParserConfig::new().with_bracketed(BracketedConfig::new().with_omission_phrase(""));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("omission_phrases"));

        let config =
            ParserConfig::new().with_dashed(DashedConfig::new().with_media_placeholder(""));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(ParserConfig::default().validate().is_ok());
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_from_json_partial() {
        let config =
            ParserConfig::from_json_str(r#"{"dashed": {"join_continuation_lines": true}}"#)
                .unwrap();
        assert!(config.dashed.join_continuation_lines);
        assert_eq!(config.dashed.media_placeholder, DEFAULT_MEDIA_PLACEHOLDER);
        assert_eq!(config.bracketed, BracketedConfig::default());
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_from_json_invalid() {
        let err = ParserConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ChatstatError::InvalidConfig { .. }));
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_from_json_file_attaches_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"dashed": {"media_placeholder": ""}}"#).unwrap();

        let err = ParserConfig::from_json_file(&path).unwrap_err();
        assert!(err.to_string().contains("config.json"));
    }
}
