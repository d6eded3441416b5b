//! Parsing of the one-or-two date strings accepted by `--date-range`.

use chrono::NaiveDate;
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateRangeError {
    #[error("too many arguments passed to --date-range; pass at most 2 dates")]
    TooManyArguments,

    #[error("bad date {0:?}: dates must be in YYYY-MM-DD format")]
    BadDateFormat(String),
}

/// A single creation date or an inclusive interval of creation dates.
///
/// A `Between` pair is kept in the order the user supplied it. A descending
/// pair matches nothing; no reordering or validation is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    On(NaiveDate),
    Between(NaiveDate, NaiveDate),
}

impl DateRange {
    /// Inclusive on both ends for `Between`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match *self {
            DateRange::On(day) => date == day,
            DateRange::Between(start, end) => date >= start && date <= end,
        }
    }
}

/// Parse the raw `--date-range` arguments into a [`DateRange`].
pub fn parse_date_range(args: &[String]) -> Result<DateRange, DateRangeError> {
    match args {
        [day] => Ok(DateRange::On(parse_date(day)?)),
        [start, end] => Ok(DateRange::Between(parse_date(start)?, parse_date(end)?)),
        _ => Err(DateRangeError::TooManyArguments),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, DateRangeError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| DateRangeError::BadDateFormat(raw.to_string()))
}
