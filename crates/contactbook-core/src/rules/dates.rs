use crate::error::CoreError;
use chrono::{Datelike, Days, Local, NaiveDate};

pub const DEFAULT_UPCOMING_DAYS: u32 = 7;
pub const MAX_UPCOMING_DAYS: u32 = 365;

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn validate_upcoming_days(days: i64) -> Result<u32, CoreError> {
    match u32::try_from(days) {
        Ok(value) if (1..=MAX_UPCOMING_DAYS).contains(&value) => Ok(value),
        _ => Err(CoreError::InvalidUpcomingDays(days)),
    }
}

/// The date a month/day anniversary lands on in `year`.
///
/// 29 February maps to 28 February when `year` is not a leap year.
pub fn occurrence_in_year(month: u32, day: u32, year: i32) -> Option<NaiveDate> {
    if month == 2 && day == 29 && !is_leap_year(year) {
        return NaiveDate::from_ymd_opt(year, 2, 28);
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// The first anniversary on or after `today`, rolling into next year when
/// this year's has already passed.
pub fn next_occurrence(month: u32, day: u32, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = occurrence_in_year(month, day, today.year())?;
    if this_year >= today {
        return Some(this_year);
    }
    occurrence_in_year(month, day, today.year() + 1)
}

/// Whether `date` lies in the closed window `[today, today + window_days]`.
pub fn falls_within(date: NaiveDate, today: NaiveDate, window_days: u32) -> bool {
    if date < today {
        return false;
    }
    match today.checked_add_days(Days::new(window_days.into())) {
        Some(end) => date <= end,
        None => true,
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
