//! Output format selection for record tables.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "json-output")]
//! # fn main() -> chatstat::Result<()> {
//! use chatstat::format::{OutputFormat, to_format_string};
//! use chatstat::{FormatTag, parse};
//!
//! let transcript = parse("15/08/23, 9:05 am - Alice: Hello there", FormatTag::Dashed)?;
//! let table = to_format_string(transcript.records(), OutputFormat::Columns)?;
//! assert!(table.starts_with(r#"{"user":["Alice"]"#));
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "json-output"))]
//! # fn main() {}
//! ```

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::{ChatstatError, Result};
use crate::record::MessageRecord;

/// Shape of the emitted record table.
///
/// # Example
///
/// ```rust
/// use chatstat::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("ndjson").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Comma-separated table with a header row
    #[default]
    Csv,

    /// JSON array of row objects
    Json,

    /// One JSON row object per line
    #[cfg_attr(feature = "cli", value(alias = "ndjson"))]
    #[serde(alias = "ndjson")]
    Jsonl,

    /// One JSON object mapping each column name to its values
    Columns,
}

impl OutputFormat {
    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson", "columns"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[
            OutputFormat::Csv,
            OutputFormat::Json,
            OutputFormat::Jsonl,
            OutputFormat::Columns,
        ]
    }

    fn required_feature(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl | OutputFormat::Columns => "json-output",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
            OutputFormat::Columns => write!(f, "JSON columns"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            "columns" => Ok(OutputFormat::Columns),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes records to `writer` in the chosen format.
///
/// # Errors
///
/// Returns [`ChatstatError::InvalidConfig`] if the format's writer was
/// compiled out, or any I/O or serialization error from the writer.
#[allow(unused_variables, unused_mut)]
pub fn write_to_format<W: Write>(
    records: &[MessageRecord],
    mut writer: W,
    format: OutputFormat,
) -> Result<()> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(records, writer),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(records, writer),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(records, writer),
        #[cfg(feature = "json-output")]
        OutputFormat::Columns => {
            let table = crate::core::output::to_json_columns(records)?;
            writeln!(writer, "{table}")?;
            Ok(())
        }
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Converts records to a string in the chosen format.
#[allow(unused_variables)]
pub fn to_format_string(records: &[MessageRecord], format: OutputFormat) -> Result<String> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(records),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(records),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(records),
        #[cfg(feature = "json-output")]
        OutputFormat::Columns => crate::core::output::to_json_columns(records),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

fn missing_feature(format: OutputFormat) -> ChatstatError {
    ChatstatError::invalid_config(
        format!(
            "output format {format} requires the '{}' feature",
            format.required_feature()
        ),
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_str("ndjson").unwrap(),
            OutputFormat::Jsonl
        );
        assert_eq!(
            OutputFormat::from_str("columns").unwrap(),
            OutputFormat::Columns
        );
        assert!(OutputFormat::from_str("xlsx").is_err());
    }

    #[test]
    fn test_all_names_parse() {
        for name in OutputFormat::all_names() {
            assert!(OutputFormat::from_str(name).is_ok(), "{name} should parse");
        }
    }

    #[test]
    fn test_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Csv);
    }

    #[test]
    fn test_format_serde() {
        let json = serde_json::to_string(&OutputFormat::Columns).unwrap();
        assert_eq!(json, "\"columns\"");
        let parsed: OutputFormat = serde_json::from_str("\"ndjson\"").unwrap();
        assert_eq!(parsed, OutputFormat::Jsonl);
    }

    #[cfg(all(feature = "csv-output", feature = "json-output"))]
    #[test]
    fn test_write_matches_string() {
        let transcript = crate::parse(
            "15/08/23, 9:05 am - Alice: one\n15/08/23, 9:06 am - Bob: two",
            crate::FormatTag::Dashed,
        )
        .unwrap();

        for &format in OutputFormat::all() {
            let mut buf = Vec::new();
            write_to_format(transcript.records(), &mut buf, format).unwrap();
            let written = String::from_utf8(buf).unwrap();
            let string = to_format_string(transcript.records(), format).unwrap();
            assert_eq!(written.trim_end(), string.trim_end(), "{format}");
        }
    }
}
