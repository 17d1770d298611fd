//! Transcript parsers for the two supported export formats.
//!
//! Each parser implements [`TranscriptParser`](crate::parser::TranscriptParser).
//!
//! # Available Parsers
//!
//! - [`BracketedParser`] - iOS exports (`[DD/MM/YY, H:MM:SS AM] Sender: body`)
//! - [`DashedParser`] - Android exports (`DD/MM/YY, H:MM am - Sender: body`)
//!
//! # Example
//!
//! ```rust
//! use chatstat::parser::{FormatTag, TranscriptParser, create_parser};
//!
//! let parser = create_parser(FormatTag::Bracketed);
//! assert_eq!(parser.name(), "iOS");
//! ```

mod bracketed;
mod dashed;

pub use bracketed::BracketedParser;
pub use dashed::DashedParser;
