//! Record table writers.
//!
//! Every writer emits the same twelve columns in the same order
//! (see [`COLUMNS`](crate::record::COLUMNS)):
//!
//! | Writer | Shape |
//! |--------|-------|
//! | [`to_csv`] | comma-separated table with a header row |
//! | [`to_json`] | array of row objects |
//! | [`to_jsonl`] | one row object per line |
//! | [`to_json_columns`] | one object of column arrays |
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstat::Result<()> {
//! use chatstat::core::output::{to_csv, to_jsonl};
//! use chatstat::{FormatTag, parse};
//!
//! let transcript = parse("15/08/23, 9:05 am - Alice: Hello there", FormatTag::Dashed)?;
//!
//! let csv = to_csv(transcript.records())?;
//! assert!(csv.starts_with("user,message,date,only_date,"));
//!
//! let jsonl = to_jsonl(transcript.records())?;
//! assert_eq!(jsonl.lines().count(), 1);
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, to_json_columns, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
