use anyhow::{ensure, Context};
use chrono::{Datelike, NaiveDate};

/// `num_days_from_ce()` of 2000-01-01, the ephemeris epoch.
const EPOCH_DAYS_FROM_CE: i32 = 730_120;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Whole days elapsed since 2000-01-01 (negative before the epoch).
pub fn days_since_epoch(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce() - EPOCH_DAYS_FROM_CE)
}

pub fn month_name(month_index: u32) -> anyhow::Result<&'static str> {
    MONTH_NAMES
        .get(month_index as usize)
        .copied()
        .with_context(|| format!("month index out of range: {month_index}"))
}

/// Every calendar date of a zero-based month, in order.
pub fn month_dates(year: i32, month_index: u32) -> anyhow::Result<Vec<NaiveDate>> {
    ensure!(month_index < 12, "month index must be 0..=11 (got {month_index})");

    let first = NaiveDate::from_ymd_opt(year, month_index + 1, 1)
        .with_context(|| format!("invalid month start for {year}-{:02}", month_index + 1))?;
    let next = if month_index == 11 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month_index + 2, 1)
    }
    .with_context(|| format!("invalid month end for {year}-{:02}", month_index + 1))?;

    Ok(first.iter_days().take_while(|d| *d < next).collect())
}
