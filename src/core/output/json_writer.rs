//! JSON output writers: row-oriented and column-oriented.

use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::record::{DATE_FORMAT, MessageRecord, ONLY_DATE_FORMAT};

/// Writes records as a pretty-printed JSON array of row objects.
///
/// # Format
/// ```json
/// [
///   {"user": "Alice", "message": "Hello", "date": "2023-08-15 09:05:00", ...}
/// ]
/// ```
pub fn write_json<W: Write>(records: &[MessageRecord], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writeln!(writer)?;
    Ok(())
}

/// Converts records to a pretty-printed JSON array.
pub fn to_json(records: &[MessageRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Converts records to one object holding a parallel array per column.
///
/// This is the shape dataframe loaders accept directly:
/// ```json
/// {"user": ["Alice", "Bob"], "message": ["Hi", "Yo"], ..., "period": ["09-10", "09-10"]}
/// ```
pub fn to_json_columns(records: &[MessageRecord]) -> Result<String> {
    Ok(serde_json::to_string(&ColumnTable::from_records(records))?)
}

/// Column-major view of a record table. Field order is the wire order.
#[derive(Serialize)]
struct ColumnTable<'a> {
    user: Vec<&'a str>,
    message: Vec<&'a str>,
    date: Vec<String>,
    only_date: Vec<String>,
    year: Vec<i32>,
    month: Vec<&'static str>,
    month_num: Vec<u32>,
    day: Vec<u32>,
    day_name: Vec<&'static str>,
    hour: Vec<u32>,
    minute: Vec<u32>,
    period: Vec<&'a str>,
}

impl<'a> ColumnTable<'a> {
    fn from_records(records: &'a [MessageRecord]) -> Self {
        let n = records.len();
        let mut table = Self {
            user: Vec::with_capacity(n),
            message: Vec::with_capacity(n),
            date: Vec::with_capacity(n),
            only_date: Vec::with_capacity(n),
            year: Vec::with_capacity(n),
            month: Vec::with_capacity(n),
            month_num: Vec::with_capacity(n),
            day: Vec::with_capacity(n),
            day_name: Vec::with_capacity(n),
            hour: Vec::with_capacity(n),
            minute: Vec::with_capacity(n),
            period: Vec::with_capacity(n),
        };

        for record in records {
            let f = &record.features;
            table.user.push(record.sender.as_str());
            table.message.push(&record.body);
            table
                .date
                .push(record.timestamp.format(DATE_FORMAT).to_string());
            table
                .only_date
                .push(f.date_only.format(ONLY_DATE_FORMAT).to_string());
            table.year.push(f.year);
            table.month.push(f.month_name);
            table.month_num.push(f.month_number);
            table.day.push(f.day_of_month);
            table.day_name.push(f.day_name);
            table.hour.push(f.hour);
            table.minute.push(f.minute);
            table.period.push(&f.hour_range);
        }

        table
    }
}
