pub mod dates;

pub use dates::{
    falls_within, is_leap_year, local_today, next_occurrence, occurrence_in_year,
    validate_upcoming_days, DEFAULT_UPCOMING_DAYS, MAX_UPCOMING_DAYS,
};
