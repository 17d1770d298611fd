//! # chatstat
//!
//! Turns a WhatsApp chat export (`.txt`) into an ordered table of messages,
//! each carrying its sender, body, timestamp and calendar features ready for
//! statistics and plotting.
//!
//! ## Supported exports
//!
//! - **iOS** ([`FormatTag::Bracketed`]): `[15/08/23, 9:06:40 AM] Alice: Hello`.
//!   Messages may wrap across lines; attachment notices such as
//!   `image omitted` are removed and group events are attributed to
//!   `group_notification`.
//! - **Android** ([`FormatTag::Dashed`]): `15/08/23, 9:05 am - Alice: Hello`.
//!   One message per line; sender-less lines are attributed to `System` and
//!   `<Media omitted>` rows are dropped.
//!
//! The caller always names the format; nothing is guessed from the text.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstat::{FormatTag, Sender, parse};
//!
//! let raw = "15/08/23, 9:05 am - Alice: Hello there\n\
//!            15/08/23, 9:06 am - Alice created group \"Trip\"\n\
//!            15/08/23, 9:07 am - Bob: <Media omitted>";
//!
//! let transcript = parse(raw, FormatTag::Dashed)?;
//! assert_eq!(transcript.len(), 2);
//!
//! let first = &transcript.records()[0];
//! assert_eq!(first.sender, Sender::User("Alice".into()));
//! assert_eq!(first.day_name(), "Tuesday");
//! assert_eq!(first.hour_range(), "09-10");
//!
//! assert_eq!(transcript.records()[1].sender, Sender::System);
//! # Ok::<(), chatstat::ChatstatError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`]: [`FormatTag`], the [`TranscriptParser`](parser::TranscriptParser)
//!   trait and the `parse*` entry points
//! - [`parsers`]: [`BracketedParser`](parsers::BracketedParser) and
//!   [`DashedParser`](parsers::DashedParser)
//! - [`parsing`]: normalization, segmentation and timestamp building blocks
//! - [`record`]: [`MessageRecord`], [`Sender`], [`ParsedTranscript`]
//! - [`features`]: calendar fields derived from a timestamp
//! - [`config`]: phrase lists and per-format switches
//! - [`core`]: [`ParseStats`](core::ParseStats) and the table writers
//! - [`format`]: [`OutputFormat`](format::OutputFormat) selection
//! - [`error`]: [`ChatstatError`], [`Result`]
//! - [`prelude`]: convenient re-exports
//!
//! ## Logging
//!
//! The library emits [`tracing`] events (dropped lines at `trace`/`debug`,
//! alignment failures at `warn`) and never installs a subscriber itself.

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod format;
#[cfg(feature = "cli")]
pub mod logging;
pub mod parser;
pub mod parsers;
pub mod parsing;
pub mod record;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatError, DropReason, Result};
pub use parser::{FormatTag, parse, parse_tagged, parse_with_config};
pub use record::{MessageRecord, ParsedTranscript, Sender};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstat::prelude::*;
///
/// let transcript = parse("[15/08/23, 9:06:40 AM] Alice: Hi", FormatTag::Bracketed)?;
/// assert_eq!(transcript.senders(), vec!["Alice"]);
/// # Ok::<(), ChatstatError>(())
/// ```
pub mod prelude {
    pub use crate::error::{ChatstatError, DropReason, Result};

    pub use crate::parser::{
        FormatTag, TranscriptParser, create_parser, create_parser_with_config, parse,
        parse_tagged, parse_with_config,
    };

    pub use crate::config::{BracketedConfig, DashedConfig, ParserConfig};

    pub use crate::record::{MessageRecord, ParsedTranscript, Sender};

    pub use crate::features::CalendarFeatures;

    pub use crate::core::ParseStats;

    pub use crate::parsers::{BracketedParser, DashedParser};

    pub use crate::format::OutputFormat;

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::to_csv;
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_json_columns, to_jsonl};
}
