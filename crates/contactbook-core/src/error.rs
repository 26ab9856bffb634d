use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Phone number must be 10 digits.")]
    InvalidPhone,
    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidBirthday,
    #[error("Birthday not set.")]
    BirthdayNotSet,
    #[error("Date out of range.")]
    DateOutOfRange,
    #[error("invalid upcoming window: {0} days")]
    InvalidUpcomingDays(i64),
}
