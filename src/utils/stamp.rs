use chrono::{DateTime, TimeZone};

use crate::consts::RUN_STAMP_FORMAT;

/// Minute-resolution stamp that prefixes this run's CSV files
pub(crate) fn run_stamp<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format(RUN_STAMP_FORMAT).to_string()
}
