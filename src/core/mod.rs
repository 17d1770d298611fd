//! Core types shared by both parsers: parse counters and record writers.

pub mod output;
pub mod stats;

pub use stats::ParseStats;

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_json_columns, to_jsonl, write_json, write_jsonl};
