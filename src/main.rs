//! # chatstat CLI
//!
//! Parses one export and prints its record table to stdout.

use std::io::{self, Write};
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::info;

use chatstat::cli::Args;
use chatstat::config::ParserConfig;
use chatstat::format::write_to_format;
use chatstat::parser::{FormatTag, create_parser_with_config};
use chatstat::{ChatstatError, ParsedTranscript, logging};

fn main() {
    let args = <Args as ClapParser>::parse();
    logging::init(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ChatstatError> {
    let start = Instant::now();
    let format: FormatTag = args.platform.parse()?;

    let mut config = match &args.config {
        Some(path) => ParserConfig::from_json_file(path)?,
        None => ParserConfig::default(),
    };
    if args.join_continuations {
        config.dashed.join_continuation_lines = true;
    }

    let parser = create_parser_with_config(format, &config);
    info!(parser = parser.name(), input = %args.input.display(), "Parsing");
    let transcript = parser.parse_file(&args.input)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_to_format(transcript.records(), &mut out, args.format)?;
    out.flush()?;

    info!(
        records = transcript.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "Done"
    );

    if args.summary {
        print_summary(&transcript);
    }

    Ok(())
}

fn print_summary(transcript: &ParsedTranscript) {
    let stats = transcript.stats();
    eprintln!("Format:       {}", transcript.format());
    eprintln!("Candidates:   {}", stats.candidates);
    eprintln!(
        "Records:      {} ({:.1}% kept)",
        stats.records,
        stats.retention_ratio()
    );
    eprintln!("Senders:      {}", transcript.senders().len());
    if stats.omitted_spans > 0 {
        eprintln!("Omitted:      {}", stats.omitted_spans);
    }
    if stats.media_placeholders > 0 {
        eprintln!("Media:        {}", stats.media_placeholders);
    }
    if stats.malformed_lines > 0 {
        eprintln!("Malformed:    {}", stats.malformed_lines);
    }
    if stats.bad_timestamps > 0 {
        eprintln!("Bad dates:    {}", stats.bad_timestamps);
    }
    if stats.continuation_lines > 0 {
        eprintln!("Joined lines: {}", stats.continuation_lines);
    }
}
