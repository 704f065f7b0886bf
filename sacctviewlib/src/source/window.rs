//! Query time window.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::SacctError;
use crate::Result;

/// Format the accounting tool expects for `-S`/`-E`.
pub const QUERY_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Parse `YYYY-MM-DD` (midnight) or `YYYY-MM-DDThh:mm`.
pub fn parse_datetime(input: &str) -> Result<NaiveDateTime> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    NaiveDateTime::parse_from_str(input, QUERY_TIME_FORMAT).map_err(|_| SacctError::InvalidDate {
        input: input.to_string(),
    })
}

/// Start and end of the accounting query, validated so `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TimeWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self> {
        if end < start {
            return Err(SacctError::InvalidTimeRange {
                start: start.format(QUERY_TIME_FORMAT).to_string(),
                end: end.format(QUERY_TIME_FORMAT).to_string(),
            });
        }
        Ok(TimeWindow { start, end })
    }

    /// Build a window from optional user input.
    ///
    /// A missing start defaults to midnight of `now`'s day, a missing end to `now`.
    pub fn resolve(start: Option<&str>, end: Option<&str>, now: NaiveDateTime) -> Result<Self> {
        let start = match start {
            Some(s) => parse_datetime(s)?,
            None => now.date().and_time(NaiveTime::MIN),
        };
        let end = match end {
            Some(e) => parse_datetime(e)?,
            None => now,
        };
        Self::new(start, end)
    }

    /// Today so far, in local time.
    pub fn today() -> Self {
        let now = Local::now().naive_local();
        TimeWindow {
            start: now.date().and_time(NaiveTime::MIN),
            end: now,
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// `-S<start>` and `-E<end>` arguments.
    pub fn to_args(&self) -> [String; 2] {
        [
            format!("-S{}", self.start.format(QUERY_TIME_FORMAT)),
            format!("-E{}", self.end.format(QUERY_TIME_FORMAT)),
        ]
    }
}
