//! Time report row parsing.
//!
//! A time report is CSV with a header row followed by rows of
//! `date,hours worked,employee id,job group`, for example:
//!
//! ```text
//! date,hours worked,employee id,job group
//! 4/1/2020,10,1,A
//! 14/1/2020,5.5,2,B
//! ```

use std::io::Read;
use std::str::FromStr;

use chrono::NaiveDate;
use csv::{StringRecord, StringRecordsIntoIter};
use rust_decimal::Decimal;

use crate::error::RowErrorKind;
use crate::models::{JobGroup, PunchRecord};

/// Date format used in time reports: day/month/year, zero padding optional.
pub const TIME_REPORT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Number of fields in every data row.
pub const TIME_REPORT_FIELD_COUNT: usize = 4;

/// Most hours a single punch may record: one calendar day.
pub const MAX_PUNCH_HOURS: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// One data row of a time report, validated or rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRow {
    /// 1-based line number in the file (the header is line 1).
    pub line: u64,
    /// The validated punch, or why the row was rejected.
    pub outcome: Result<PunchRecord, RowErrorKind>,
}

/// Streams the data rows of a time report, skipping its header.
pub struct TimeReportRows<R> {
    records: StringRecordsIntoIter<R>,
}

impl<R: Read> TimeReportRows<R> {
    /// Wraps a reader over the raw file content.
    pub fn new(reader: R) -> Self {
        let records = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader)
            .into_records();
        Self { records }
    }
}

impl<R: Read> Iterator for TimeReportRows<R> {
    type Item = ParsedRow;

    fn next(&mut self) -> Option<Self::Item> {
        let row = match self.records.next()? {
            Ok(record) => ParsedRow {
                line: record.position().map(|p| p.line()).unwrap_or_default(),
                outcome: parse_record(&record),
            },
            Err(err) => ParsedRow {
                line: err.position().map(|p| p.line()).unwrap_or_default(),
                outcome: Err(RowErrorKind::UnreadableRow {
                    message: err.to_string(),
                }),
            },
        };
        Some(row)
    }
}

/// Validates one CSV record into a punch.
///
/// Fields are checked in column order, so the first bad field decides the error.
pub fn parse_record(record: &StringRecord) -> Result<PunchRecord, RowErrorKind> {
    if record.len() != TIME_REPORT_FIELD_COUNT {
        return Err(RowErrorKind::InconsistentColumns {
            found: record.len(),
        });
    }

    let work_date = parse_work_date(&record[0])?;
    let hours = parse_hours(&record[1])?;
    let employee_id = parse_employee_id(&record[2])?;
    let job_group = JobGroup::from_str(&record[3])?;

    Ok(PunchRecord {
        employee_id,
        work_date,
        hours,
        job_group,
    })
}

fn parse_work_date(value: &str) -> Result<NaiveDate, RowErrorKind> {
    let invalid = || RowErrorKind::InvalidDate {
        value: value.to_string(),
    };

    // chrono's %Y also takes short and signed years; time reports never do.
    let year = value.rsplit('/').next().unwrap_or_default();
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, TIME_REPORT_DATE_FORMAT).map_err(|_| invalid())
}

fn parse_hours(value: &str) -> Result<Decimal, RowErrorKind> {
    match Decimal::from_str(value) {
        Ok(hours) if !hours.is_sign_negative() && hours <= MAX_PUNCH_HOURS => Ok(hours),
        _ => Err(RowErrorKind::InvalidHours {
            value: value.to_string(),
        }),
    }
}

fn parse_employee_id(value: &str) -> Result<u32, RowErrorKind> {
    match value.parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(RowErrorKind::InvalidEmployeeId {
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rows(content: &str) -> Vec<ParsedRow> {
        TimeReportRows::new(content.as_bytes()).collect()
    }

    fn record(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_parses_valid_rows_and_skips_header() {
        let parsed = rows("date,hours worked,employee id,job group\n4/1/2020,10,1,A\n14/11/2023,7.5,2,B\n");
        assert_eq!(parsed.len(), 2);

        assert_eq!(parsed[0].line, 2);
        assert_eq!(
            parsed[0].outcome,
            Ok(PunchRecord {
                employee_id: 1,
                work_date: NaiveDate::from_ymd_opt(2020, 1, 4).unwrap(),
                hours: dec("10"),
                job_group: JobGroup::A,
            })
        );

        assert_eq!(parsed[1].line, 3);
        let second = parsed[1].outcome.as_ref().unwrap();
        assert_eq!(second.work_date, NaiveDate::from_ymd_opt(2023, 11, 14).unwrap());
        assert_eq!(second.hours, dec("7.5"));
        assert_eq!(second.job_group, JobGroup::B);
    }

    #[test]
    fn test_header_only_file_has_no_rows() {
        assert!(rows("date,hours worked,employee id,job group\n").is_empty());
        assert!(rows("").is_empty());
    }

    #[test]
    fn test_fields_are_trimmed() {
        let parsed = rows("date,hours,id,group\n 1/2/2020 , 3 ,4 , A\n");
        assert_eq!(parsed.len(), 1);
        assert!(parsed[0].outcome.is_ok());
    }

    #[test]
    fn test_rejects_wrong_field_count() {
        assert_eq!(
            parse_record(&record(&["1/2/2020", "3", "4"])),
            Err(RowErrorKind::InconsistentColumns { found: 3 })
        );
        assert_eq!(
            parse_record(&record(&["1/2/2020", "3", "4", "A", "x"])),
            Err(RowErrorKind::InconsistentColumns { found: 5 })
        );
    }

    #[test]
    fn test_rejects_invalid_date() {
        for value in [
            "2020-01-04",
            "31/2/2020",
            "4/13/2020",
            "",
            "yesterday",
            "4/1/20",
            "4/1/+2020",
            "4/1/-5",
            "4/1/0",
            "4/1/02020",
            "4/1/２０２０",
        ] {
            assert_eq!(
                parse_record(&record(&[value, "3", "4", "A"])),
                Err(RowErrorKind::InvalidDate {
                    value: value.to_string()
                }),
                "date '{}' should be rejected",
                value
            );
        }
    }

    #[test]
    fn test_accepts_leap_day() {
        let punch = parse_record(&record(&["29/2/2020", "3", "4", "A"])).unwrap();
        assert_eq!(punch.work_date, NaiveDate::from_ymd_opt(2020, 2, 29).unwrap());
    }

    #[test]
    fn test_rejects_invalid_hours() {
        for value in [
            "-1",
            "7.5h",
            "abc",
            "",
            "-0.5",
            "24.01",
            "25",
            "79228162514264337593543950335",
        ] {
            assert_eq!(
                parse_record(&record(&["1/2/2020", value, "4", "A"])),
                Err(RowErrorKind::InvalidHours {
                    value: value.to_string()
                }),
                "hours '{}' should be rejected",
                value
            );
        }
    }

    #[test]
    fn test_accepts_zero_and_fractional_hours() {
        let zero = parse_record(&record(&["1/2/2020", "0", "4", "A"])).unwrap();
        assert_eq!(zero.hours, Decimal::ZERO);
        let fractional = parse_record(&record(&["1/2/2020", "0.25", "4", "A"])).unwrap();
        assert_eq!(fractional.hours, dec("0.25"));
    }

    #[test]
    fn test_accepts_full_day_and_four_digit_years() {
        let punch = parse_record(&record(&["04/01/0999", "24", "4", "B"])).unwrap();
        assert_eq!(punch.hours, MAX_PUNCH_HOURS);
        assert_eq!(punch.work_date, NaiveDate::from_ymd_opt(999, 1, 4).unwrap());
    }

    #[test]
    fn test_rejects_invalid_employee_id() {
        for value in ["0", "-3", "1.5", "abc", ""] {
            assert_eq!(
                parse_record(&record(&["1/2/2020", "3", value, "A"])),
                Err(RowErrorKind::InvalidEmployeeId {
                    value: value.to_string()
                }),
                "employee id '{}' should be rejected",
                value
            );
        }
    }

    #[test]
    fn test_rejects_unknown_job_group() {
        assert_eq!(
            parse_record(&record(&["1/2/2020", "3", "4", "C"])),
            Err(RowErrorKind::UnknownJobGroup {
                value: "C".to_string()
            })
        );
    }

    #[test]
    fn test_first_bad_field_wins() {
        assert!(matches!(
            parse_record(&record(&["bad", "bad", "bad", "bad"])),
            Err(RowErrorKind::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_malformed_row_reports_its_line() {
        let parsed = rows("header,a,b,c\n1/1/2020,1,1,A\n1/1/2020,1,1,Z\n1/1/2020,1,1,A\n");
        assert_eq!(parsed.len(), 3);
        assert!(parsed[0].outcome.is_ok());
        assert_eq!(parsed[1].line, 3);
        assert!(parsed[1].outcome.is_err());
    }

    #[test]
    fn test_non_utf8_row_is_unreadable() {
        let mut content = b"header,a,b,c\n".to_vec();
        content.extend_from_slice(&[0xff, 0xfe, b',', b'1', b',', b'1', b',', b'A', b'\n']);
        let parsed: Vec<ParsedRow> = TimeReportRows::new(content.as_slice()).collect();
        assert_eq!(parsed.len(), 1);
        assert!(matches!(
            parsed[0].outcome,
            Err(RowErrorKind::UnreadableRow { .. })
        ));
    }
}
