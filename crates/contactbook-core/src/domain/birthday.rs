use crate::error::CoreError;
use crate::rules::dates::{next_occurrence, occurrence_in_year};
use chrono::{Datelike, NaiveDate};
use std::fmt;

pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A birth date entered as `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        if !has_birthday_shape(raw) {
            return Err(CoreError::InvalidBirthday);
        }
        let date =
            NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT).map_err(|_| CoreError::InvalidBirthday)?;
        if date.year() < 1 {
            return Err(CoreError::InvalidBirthday);
        }
        Ok(Self(date))
    }

    /// This birthday as observed in `year`. Leap-day birthdays fall on
    /// 28 February in common years.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        occurrence_in_year(self.0.month(), self.0.day(), year)
    }

    /// First observance on or after `today`.
    pub fn next_after(&self, today: NaiveDate) -> Option<NaiveDate> {
        next_occurrence(self.0.month(), self.0.day(), today)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

// chrono accepts unpadded fields and signed years, so the layout is checked first.
fn has_birthday_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, byte)| match idx {
            2 | 5 => *byte == b'.',
            _ => byte.is_ascii_digit(),
        })
}
