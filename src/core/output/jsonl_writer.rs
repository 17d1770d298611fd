//! JSON Lines output writer.

use std::io::Write;

use crate::error::Result;
use crate::record::MessageRecord;

/// Writes one JSON object per record, newline-terminated.
///
/// # Format
/// ```text
/// {"user":"Alice","message":"Hello",...,"period":"09-10"}
/// {"user":"Bob","message":"Hi",...,"period":"09-10"}
/// ```
pub fn write_jsonl<W: Write>(records: &[MessageRecord], mut writer: W) -> Result<()> {
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Same output as [`write_jsonl`], returned as a string.
pub fn to_jsonl(records: &[MessageRecord]) -> Result<String> {
    let mut buf = Vec::new();
    write_jsonl(records, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}
