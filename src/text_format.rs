//! Line oriented text format for input and sorted output.
//!
//! Input, one record per line:
//!
//! ```text
//! 2023-01-01<TAB>Ivanov Aleksei Petrovich
//! ```
//!
//! The position of a record is its 1-based line number. Malformed lines are skipped, reported
//! to the [`Reporter`], and still count towards the line numbers.
//!
//! Output, one record per line as `date<TAB>name<TAB>position`, followed by a summary line with
//! the sorting time in milliseconds.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use crate::error::{ParseError, ParseErrorKind};
use crate::record::{Date, FullName, Record};
use crate::report::{Event, Reporter};

const READ_PROGRESS_INTERVAL: usize = 10_000;

/// Parses a single input line into a record at `position`.
pub fn parse_line(line: &str, position: usize) -> Result<Record, ParseError> {
    let err = |kind| ParseError {
        line: position,
        kind,
    };

    let mut fields = line.trim_end_matches('\r').split('\t');
    let (date_field, name_field) = match (fields.next(), fields.next()) {
        (Some(date), Some(name)) => (date, name),
        _ => return Err(err(ParseErrorKind::MissingField)),
    };

    let date = parse_date(date_field.trim())
        .ok_or_else(|| err(ParseErrorKind::InvalidDate(date_field.into())))?;
    let name = parse_name(name_field)
        .ok_or_else(|| err(ParseErrorKind::InvalidName(name_field.into())))?;

    Ok(Record::new(date, name, position))
}

/// Reads up to `limit` records. Malformed lines are reported and skipped.
pub fn read_records<R: BufRead>(
    reader: R,
    limit: usize,
    reporter: &mut dyn Reporter,
) -> io::Result<Vec<Record>> {
    let mut records = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        if records.len() >= limit {
            break;
        }

        let line = line?;
        match parse_line(&line, i + 1) {
            Ok(record) => {
                records.push(record);
                if records.len() % READ_PROGRESS_INTERVAL == 0 {
                    reporter.report(Event::RecordsRead {
                        count: records.len(),
                    });
                }
            }
            Err(error) => reporter.report(Event::MalformedLine { error }),
        }
    }

    reporter.report(Event::RecordsRead {
        count: records.len(),
    });

    Ok(records)
}

/// Writes records in input format, without positions.
pub fn write_input<W: Write>(mut writer: W, records: &[Record]) -> io::Result<()> {
    for record in records {
        writeln!(writer, "{}\t{}", record.date(), record.name())?;
    }

    writer.flush()
}

/// Writes the sorted records followed by the summary line.
pub fn write_sorted<W: Write>(
    mut writer: W,
    records: &[Record],
    elapsed: Duration,
) -> io::Result<()> {
    for record in records {
        writeln!(writer, "{record}")?;
    }
    writeln!(writer, "Sorting time: {} ms", elapsed.as_millis())?;

    writer.flush()
}

fn parse_date(s: &str) -> Option<Date> {
    let mut parts = s.split('-');
    let year = parts.next()?.parse::<i32>().ok()?;
    let month = parts.next()?.parse::<u32>().ok()?;
    let day = parts.next()?.parse::<u32>().ok()?;

    if parts.next().is_some() || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    Some(Date::new(day, month, year))
}

fn parse_name(s: &str) -> Option<FullName> {
    let mut parts = s.split_whitespace();
    let last = parts.next()?;
    let first = parts.next()?;
    let middle = parts.next()?;

    if parts.next().is_some() {
        return None;
    }

    Some(FullName::new(last, first, middle))
}
