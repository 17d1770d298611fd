//! Command-line interface definition using clap.
//!
//! The export format is taken as free text and resolved through
//! [`FormatTag`](crate::parser::FormatTag)'s `FromStr`, so an unknown tag is
//! reported as [`ChatstatError::UnsupportedFormat`](crate::ChatstatError)
//! like any other library error.
//!
//! ```rust
//! use chatstat::cli::Args;
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatstat", "android", "chat.txt", "-f", "jsonl", "-vv"]);
//! assert_eq!(args.platform, "android");
//! assert_eq!(args.verbose, 2);
//! ```

use std::path::PathBuf;

use clap::Parser;

use crate::format::OutputFormat;

/// Turn WhatsApp chat exports into a table of messages with calendar
/// features.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstat")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstat ios _chat.txt
    chatstat android chat.txt --format jsonl
    chatstat android chat.txt --join-continuations --summary
    chatstat ios _chat.txt --config phrases.json -f columns")]
pub struct Args {
    /// Export format: ios (bracketed) or android (dashed)
    #[arg(value_name = "FORMAT")]
    pub platform: String,

    /// Path to the exported .txt transcript
    pub input: PathBuf,

    /// Output table format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Print parse counters to stderr after the table
    #[arg(long)]
    pub summary: bool,

    /// JSON file overriding phrase lists and placeholders
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Append unprefixed Android lines to the previous message
    #[arg(long)]
    pub join_continuations: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
