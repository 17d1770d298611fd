//! Unified parser trait and format dispatch.
//!
//! The caller always says which export format a transcript is in; nothing
//! here sniffs the text to guess. [`FormatTag`] names the two supported
//! formats and [`create_parser`] hands back the matching parser.
//!
//! # Example
//!
//! ```rust
//! use chatstat::parser::{FormatTag, TranscriptParser, create_parser};
//!
//! let parser = create_parser(FormatTag::Dashed);
//! let transcript = parser.parse_str("15/08/23, 9:05 am - Alice: Hello there")?;
//!
//! assert_eq!(transcript.len(), 1);
//! assert_eq!(transcript.records()[0].sender.as_str(), "Alice");
//! # Ok::<(), chatstat::ChatstatError>(())
//! ```
//!
//! # Textual tags
//!
//! ```rust
//! use chatstat::parser::FormatTag;
//! use std::str::FromStr;
//!
//! assert_eq!(FormatTag::from_str("ios")?, FormatTag::Bracketed);
//! assert_eq!(FormatTag::from_str("android")?, FormatTag::Dashed);
//! assert!(FormatTag::from_str("telegram").unwrap_err().is_unsupported_format());
//! # Ok::<(), chatstat::ChatstatError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ParsedTranscript;
use crate::config::ParserConfig;
use crate::error::{ChatstatError, Result};
use crate::parsers::{BracketedParser, DashedParser};

/// The two supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatTag {
    /// iOS export: `[DD/MM/YY, H:MM:SS AM] Sender: body`, messages may wrap
    /// across lines.
    #[serde(alias = "ios", alias = "a")]
    Bracketed,

    /// Android export: `DD/MM/YY, H:MM am - Sender: body`, one line each.
    #[serde(alias = "android", alias = "b")]
    Dashed,
}

impl FormatTag {
    /// Maps the dashboard's boolean upload flag to a tag.
    pub fn from_is_ios(is_ios: bool) -> Self {
        if is_ios {
            FormatTag::Bracketed
        } else {
            FormatTag::Dashed
        }
    }

    /// Returns all tag names including aliases.
    pub fn all_names() -> &'static [&'static str] {
        &["ios", "bracketed", "a", "android", "dashed", "b"]
    }

    /// Returns both formats.
    pub fn all() -> &'static [FormatTag] {
        &[FormatTag::Bracketed, FormatTag::Dashed]
    }
}

impl std::fmt::Display for FormatTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatTag::Bracketed => write!(f, "iOS"),
            FormatTag::Dashed => write!(f, "Android"),
        }
    }
}

impl std::str::FromStr for FormatTag {
    type Err = ChatstatError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ios" | "bracketed" | "a" => Ok(FormatTag::Bracketed),
            "android" | "dashed" | "b" => Ok(FormatTag::Dashed),
            _ => Err(ChatstatError::unsupported_format(s)),
        }
    }
}

/// Trait implemented by both format parsers.
///
/// Implementations must be pure: the same text always yields the same
/// transcript and no state survives between calls.
pub trait TranscriptParser: Send + Sync {
    /// Human-readable name of this parser.
    fn name(&self) -> &'static str;

    /// Format this parser handles.
    fn format(&self) -> FormatTag;

    /// Parses an already-decoded transcript.
    fn parse_str(&self, raw: &str) -> Result<ParsedTranscript>;

    /// Reads a UTF-8 export file and parses it.
    fn parse_file(&self, path: &Path) -> Result<ParsedTranscript> {
        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes).map_err(|source| ChatstatError::Utf8 {
            context: format!("reading {}", path.display()),
            source,
        })?;
        self.parse_str(&text)
    }
}

/// Creates a parser with default configuration.
pub fn create_parser(format: FormatTag) -> Box<dyn TranscriptParser> {
    create_parser_with_config(format, &ParserConfig::default())
}

/// Creates a parser using the matching section of `config`.
pub fn create_parser_with_config(
    format: FormatTag,
    config: &ParserConfig,
) -> Box<dyn TranscriptParser> {
    match format {
        FormatTag::Bracketed => Box::new(BracketedParser::with_config(config.bracketed.clone())),
        FormatTag::Dashed => Box::new(DashedParser::with_config(config.dashed.clone())),
    }
}

/// Parses a transcript in the given format with default configuration.
///
/// # Errors
///
/// [`ChatstatError::AlignmentMismatch`] if a bracketed export cannot be
/// segmented consistently. Malformed lines and bad timestamps are dropped,
/// never reported.
///
/// # Example
///
/// ```rust
/// use chatstat::{FormatTag, parse};
///
/// let transcript = parse("[15/08/23, 9:07:00 AM] Bob: image omitted", FormatTag::Bracketed)?;
/// assert!(transcript.is_empty());
/// # Ok::<(), chatstat::ChatstatError>(())
/// ```
pub fn parse(raw: &str, format: FormatTag) -> Result<ParsedTranscript> {
    parse_with_config(raw, format, &ParserConfig::default())
}

/// Parses a transcript with explicit configuration.
pub fn parse_with_config(
    raw: &str,
    format: FormatTag,
    config: &ParserConfig,
) -> Result<ParsedTranscript> {
    match format {
        FormatTag::Bracketed => BracketedParser::parse_with(raw, &config.bracketed),
        FormatTag::Dashed => DashedParser::parse_with(raw, &config.dashed),
    }
}

/// Parses a transcript whose format is given as text (`"ios"`, `"android"`).
///
/// # Errors
///
/// [`ChatstatError::UnsupportedFormat`] for any other tag, before the text
/// is looked at.
pub fn parse_tagged(raw: &str, tag: &str) -> Result<ParsedTranscript> {
    let format: FormatTag = tag.parse()?;
    parse(raw, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_from_str_aliases() {
        for name in ["ios", "IOS", "bracketed", "a", " ios "] {
            assert_eq!(FormatTag::from_str(name).unwrap(), FormatTag::Bracketed);
        }
        for name in ["android", "Android", "dashed", "b"] {
            assert_eq!(FormatTag::from_str(name).unwrap(), FormatTag::Dashed);
        }
    }

    #[test]
    fn test_from_str_unsupported() {
        let err = FormatTag::from_str("whatsapp-web").unwrap_err();
        assert!(err.is_unsupported_format());
        assert!(err.to_string().contains("whatsapp-web"));
    }

    #[test]
    fn test_all_names_parse() {
        for name in FormatTag::all_names() {
            assert!(FormatTag::from_str(name).is_ok(), "{name} should parse");
        }
    }

    #[test]
    fn test_from_is_ios() {
        assert_eq!(FormatTag::from_is_ios(true), FormatTag::Bracketed);
        assert_eq!(FormatTag::from_is_ios(false), FormatTag::Dashed);
    }

    #[test]
    fn test_serde_aliases() {
        let tag: FormatTag = serde_json::from_str(r#""ios""#).unwrap();
        assert_eq!(tag, FormatTag::Bracketed);
        let tag: FormatTag = serde_json::from_str(r#""dashed""#).unwrap();
        assert_eq!(tag, FormatTag::Dashed);
        assert_eq!(
            serde_json::to_string(&FormatTag::Bracketed).unwrap(),
            r#""bracketed""#
        );
    }

    #[test]
    fn test_create_parser_matches_format() {
        for &format in FormatTag::all() {
            assert_eq!(create_parser(format).format(), format);
        }
        assert_eq!(create_parser(FormatTag::Bracketed).name(), "iOS");
        assert_eq!(create_parser(FormatTag::Dashed).name(), "Android");
    }

    #[test]
    fn test_parse_tagged_rejects_before_parsing() {
        let err = parse_tagged("anything", "telegram").unwrap_err();
        assert!(err.is_terminal());
    }

    #[test]
    fn test_parse_file_reads_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.txt");
        fs::write(&path, "15/08/23, 9:05 am - Alice: Hello").unwrap();

        let transcript = create_parser(FormatTag::Dashed).parse_file(&path).unwrap();
        assert_eq!(transcript.len(), 1);
    }

    #[test]
    fn test_parse_file_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.txt");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = create_parser(FormatTag::Dashed).parse_file(&path).unwrap_err();
        assert!(matches!(err, ChatstatError::Utf8 { .. }));
    }

    #[test]
    fn test_parse_file_missing() {
        let err = create_parser(FormatTag::Bracketed)
            .parse_file(Path::new("/definitely/not/here.txt"))
            .unwrap_err();
        assert!(err.is_io());
    }
}
