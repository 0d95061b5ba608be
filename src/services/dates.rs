//! Calendar-month arithmetic
//!
//! Helpers for month bucketing: month boundaries are derived from the first
//! day of the following month minus one day, which handles varying month
//! lengths and leap years without a day table.

use chrono::{Datelike, Duration, NaiveDate};

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap()
}

/// First day of the month after the one containing `date`
pub fn next_month_start(date: NaiveDate) -> NaiveDate {
    if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1).unwrap()
    }
}

/// Last day of the month containing `date`
pub fn month_end(date: NaiveDate) -> NaiveDate {
    next_month_start(date) - Duration::days(1)
}

/// Year-month label for the month containing `date`, e.g. "2024-01"
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}
