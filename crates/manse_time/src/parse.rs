//! Parsing of user-entered dates and times of day.
//!
//! Times accept `HH:MM` or `HH:MM:SS`; dates accept `YYYY-MM-DD`.
//! Shape, non-numeric and range failures are reported separately.

use chrono::{NaiveDate, NaiveTime};

use crate::error::TimeError;

/// Parse a time of day in `HH:MM` or `HH:MM:SS` form.
pub fn parse_time_of_day(s: &str) -> Result<NaiveTime, TimeError> {
    let parts: Vec<&str> = s.trim().split(':').collect();
    if parts.len() != 2 && parts.len() != 3 {
        return Err(TimeError::InvalidFormat(format!(
            "expected HH:MM or HH:MM:SS, got {s:?}"
        )));
    }
    let mut fields = [0_i64; 3];
    for (slot, part) in fields.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse::<i64>()
            .map_err(|_| TimeError::NonNumeric(format!("{part:?} in {s:?}")))?;
    }
    let [hour, minute, second] = fields;
    check_range("hour", hour, 23)?;
    check_range("minute", minute, 59)?;
    check_range("second", second, 59)?;
    NaiveTime::from_hms_opt(hour as u32, minute as u32, second as u32).ok_or(
        TimeError::OutOfRange {
            field: "time of day",
            value: hour * 10_000 + minute * 100 + second,
        },
    )
}

/// Parse a civil date in `YYYY-MM-DD` form.
pub fn parse_date(s: &str) -> Result<NaiveDate, TimeError> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    Err(classify_date_error(s))
}

/// Name the reason chrono rejected a date string.
fn classify_date_error(s: &str) -> TimeError {
    // A leading minus belongs to the year, not to a separator.
    let (sign, body) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s),
    };
    let parts: Vec<&str> = body.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return TimeError::InvalidFormat(format!("expected YYYY-MM-DD, got {s:?}"));
    };
    let Ok(year) = year.parse::<i32>() else {
        return TimeError::NonNumeric(format!("year {year:?}"));
    };
    let Ok(month) = month.parse::<u32>() else {
        return TimeError::NonNumeric(format!("month {month:?}"));
    };
    let Ok(day) = day.parse::<u32>() else {
        return TimeError::NonNumeric(format!("day {day:?}"));
    };
    if !(1..=12).contains(&month) {
        return TimeError::OutOfRange {
            field: "month",
            value: i64::from(month),
        };
    }
    TimeError::InvalidDate {
        year: sign * year,
        month,
        day,
    }
}

fn check_range(field: &'static str, value: i64, max: i64) -> Result<(), TimeError> {
    if (0..=max).contains(&value) {
        Ok(())
    } else {
        Err(TimeError::OutOfRange { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_minute() {
        let t = parse_time_of_day("12:00").unwrap();
        assert_eq!(t, NaiveTime::from_hms_opt(12, 0, 0).unwrap());
    }

    #[test]
    fn hour_minute_second() {
        let t = parse_time_of_day(" 23:30:15 ").unwrap();
        assert_eq!(t, NaiveTime::from_hms_opt(23, 30, 15).unwrap());
    }

    #[test]
    fn wrong_shape() {
        assert!(matches!(
            parse_time_of_day("1230"),
            Err(TimeError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_time_of_day("1:2:3:4"),
            Err(TimeError::InvalidFormat(_))
        ));
    }

    #[test]
    fn non_numeric() {
        assert!(matches!(
            parse_time_of_day("12:xx"),
            Err(TimeError::NonNumeric(_))
        ));
    }

    #[test]
    fn out_of_range() {
        assert_eq!(
            parse_time_of_day("24:00"),
            Err(TimeError::OutOfRange {
                field: "hour",
                value: 24
            })
        );
        assert_eq!(
            parse_time_of_day("12:60"),
            Err(TimeError::OutOfRange {
                field: "minute",
                value: 60
            })
        );
        assert!(parse_time_of_day("-1:00").is_err());
    }

    #[test]
    fn date_parses() {
        let d = parse_date("1990-01-01").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(1990, 1, 1).unwrap());
    }

    #[test]
    fn date_rejects_impossible_day() {
        assert!(matches!(
            parse_date("2023-02-29"),
            Err(TimeError::InvalidDate { .. })
        ));
        assert!(matches!(
            parse_date("2023-13-01"),
            Err(TimeError::OutOfRange { .. })
        ));
        assert!(matches!(parse_date("2023/01/01"), Err(TimeError::InvalidFormat(_))));
    }

    #[test]
    fn date_error_kinds() {
        assert!(matches!(parse_date("1990-0x-01"), Err(TimeError::NonNumeric(_))));
        assert!(matches!(parse_date("1990-01"), Err(TimeError::InvalidFormat(_))));
        assert_eq!(
            parse_date("1990-00-10"),
            Err(TimeError::OutOfRange {
                field: "month",
                value: 0
            })
        );
        assert_eq!(
            parse_date("2023-04-31"),
            Err(TimeError::InvalidDate {
                year: 2023,
                month: 4,
                day: 31
            })
        );
    }

    #[test]
    fn date_accepts_unpadded_fields() {
        let d = parse_date(" 1990-1-5 ").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(1990, 1, 5).unwrap());
    }
}
