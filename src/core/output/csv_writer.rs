//! CSV output writer.

use std::io::Write;

use crate::error::Result;
use crate::record::{COLUMNS, DATE_FORMAT, MessageRecord, ONLY_DATE_FORMAT};

/// Writes records as comma-separated rows under a [`COLUMNS`] header.
///
/// The header is written even when there are no records, so an empty
/// transcript still yields a table with the right shape.
pub fn write_csv<W: Write>(records: &[MessageRecord], writer: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().from_writer(writer);

    writer.write_record(COLUMNS)?;
    for record in records {
        writer.write_record(build_row(record))?;
    }

    writer.flush()?;
    Ok(())
}

/// Same table as [`write_csv`], returned as a string.
pub fn to_csv(records: &[MessageRecord]) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(records, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

fn build_row(record: &MessageRecord) -> [String; 12] {
    let f = &record.features;
    [
        record.sender.as_str().to_string(),
        record.body.clone(),
        record.timestamp.format(DATE_FORMAT).to_string(),
        f.date_only.format(ONLY_DATE_FORMAT).to_string(),
        f.year.to_string(),
        f.month_name.to_string(),
        f.month_number.to_string(),
        f.day_of_month.to_string(),
        f.day_name.to_string(),
        f.hour.to_string(),
        f.minute.to_string(),
        f.hour_range.clone(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Sender;
    use chrono::NaiveDate;

    fn record(sender: Sender, body: &str) -> MessageRecord {
        let ts = NaiveDate::from_ymd_opt(2023, 8, 15)
            .unwrap()
            .and_hms_opt(14, 30, 5)
            .unwrap();
        MessageRecord::new(ts, sender, body)
    }

    #[test]
    fn test_header_and_row() {
        let csv = to_csv(&[record(Sender::User("Alice".into()), "Hello")]).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "user,message,date,only_date,year,month,month_num,day,day_name,hour,minute,period"
        );
        assert_eq!(
            lines.next().unwrap(),
            "Alice,Hello,2023-08-15 14:30:05,2023-08-15,2023,August,8,15,Tuesday,14,30,14-15"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_empty_table_keeps_header() {
        let csv = to_csv(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
        assert!(csv.starts_with("user,message,"));
    }

    #[test]
    fn test_commas_and_quotes_escaped() {
        let csv = to_csv(&[record(Sender::System, "a, \"b\"")]).unwrap();
        assert!(csv.contains("System,\"a, \"\"b\"\"\","));
    }

    #[test]
    fn test_roundtrip_through_reader() {
        let csv = to_csv(&[
            record(Sender::GroupNotification, "Carol joined"),
            record(Sender::User("Bob".into()), "line with, comma"),
        ])
        .unwrap();

        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "group_notification");
        assert_eq!(&rows[1][1], "line with, comma");
        assert_eq!(&rows[1][11], "14-15");
    }
}
