use crate::error::CoreError;
use std::fmt;

pub const PHONE_DIGITS: usize = 10;

/// A phone number made of exactly ten ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        if raw.len() != PHONE_DIGITS || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(CoreError::InvalidPhone);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
