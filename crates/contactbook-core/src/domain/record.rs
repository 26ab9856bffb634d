use crate::domain::birthday::Birthday;
use crate::domain::name::Name;
use crate::domain::phone::Phone;
use crate::error::CoreError;
use chrono::NaiveDate;
use std::fmt;

/// Outcome of removing or replacing a phone by value. A miss is reported
/// here, not as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneEdit {
    Removed(Phone),
    Updated { old: Phone, new: Phone },
    NotFound(String),
}

impl fmt::Display for PhoneEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhoneEdit::Removed(phone) => write!(f, "Phone {} removed.", phone),
            PhoneEdit::Updated { old, new } => write!(f, "Phone {} updated to {}.", old, new),
            PhoneEdit::NotFound(raw) => write!(f, "Phone {} not found.", raw),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    pub fn add_phone(&mut self, raw: &str) -> Result<(), CoreError> {
        self.phones.push(Phone::new(raw)?);
        Ok(())
    }

    pub fn remove_phone(&mut self, raw: &str) -> PhoneEdit {
        match self.position_of(raw) {
            Some(idx) => PhoneEdit::Removed(self.phones.remove(idx)),
            None => PhoneEdit::NotFound(raw.to_string()),
        }
    }

    /// Replaces the first phone equal to `old`. `new` is only validated when
    /// `old` is present.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<PhoneEdit, CoreError> {
        let Some(idx) = self.position_of(old) else {
            return Ok(PhoneEdit::NotFound(old.to_string()));
        };
        let new = Phone::new(new)?;
        let old = std::mem::replace(&mut self.phones[idx], new.clone());
        Ok(PhoneEdit::Updated { old, new })
    }

    pub fn add_birthday(&mut self, raw: &str) -> Result<(), CoreError> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    pub fn days_to_birthday(&self, today: NaiveDate) -> Result<i64, CoreError> {
        let birthday = self.birthday.ok_or(CoreError::BirthdayNotSet)?;
        let next = birthday
            .next_after(today)
            .ok_or(CoreError::DateOutOfRange)?;
        Ok((next - today).num_days())
    }

    pub(crate) fn absorb_phones(&mut self, other: Record) {
        self.phones.extend(other.phones);
    }

    fn position_of(&self, raw: &str) -> Option<usize> {
        self.phones.iter().position(|phone| phone.as_str() == raw)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{PhoneEdit, Record};
    use crate::error::CoreError;
    use chrono::NaiveDate;

    fn record_with(phones: &[&str]) -> Record {
        let mut record = Record::new("Ada");
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    fn phones_of(record: &Record) -> Vec<&str> {
        record.phones().iter().map(|phone| phone.as_str()).collect()
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn new_record_is_bare() {
        let record = Record::new("Ada");
        assert_eq!(record.name().as_str(), "Ada");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn add_phone_appends_and_allows_duplicates() {
        let record = record_with(&["1111111111", "2222222222", "1111111111"]);
        assert_eq!(
            phones_of(&record),
            vec!["1111111111", "2222222222", "1111111111"]
        );
    }

    #[test]
    fn add_phone_rejects_invalid_without_mutating() {
        let mut record = record_with(&["1111111111"]);
        assert_eq!(record.add_phone("123"), Err(CoreError::InvalidPhone));
        assert_eq!(phones_of(&record), vec!["1111111111"]);
    }

    #[test]
    fn remove_phone_drops_first_match_only() {
        let mut record = record_with(&["1111111111", "2222222222", "1111111111"]);
        let outcome = record.remove_phone("1111111111");
        assert_eq!(outcome.to_string(), "Phone 1111111111 removed.");
        assert_eq!(phones_of(&record), vec!["2222222222", "1111111111"]);
    }

    #[test]
    fn remove_phone_reports_miss() {
        let mut record = record_with(&["1111111111"]);
        let outcome = record.remove_phone("9999999999");
        assert_eq!(outcome, PhoneEdit::NotFound("9999999999".to_string()));
        assert_eq!(outcome.to_string(), "Phone 9999999999 not found.");
        assert_eq!(phones_of(&record), vec!["1111111111"]);
    }

    #[test]
    fn edit_phone_replaces_in_place() {
        let mut record = record_with(&["1111111111", "2222222222"]);
        let outcome = record.edit_phone("2222222222", "3333333333").unwrap();
        assert_eq!(
            outcome.to_string(),
            "Phone 2222222222 updated to 3333333333."
        );
        assert_eq!(phones_of(&record), vec!["1111111111", "3333333333"]);
    }

    #[test]
    fn edit_phone_miss_leaves_phones_untouched() {
        let mut record = record_with(&["1111111111"]);
        let outcome = record.edit_phone("5555555555", "3333333333").unwrap();
        assert_eq!(outcome.to_string(), "Phone 5555555555 not found.");
        assert_eq!(phones_of(&record), vec!["1111111111"]);
    }

    #[test]
    fn edit_phone_validates_replacement() {
        let mut record = record_with(&["1111111111"]);
        let err = record.edit_phone("1111111111", "12ab").unwrap_err();
        assert_eq!(err, CoreError::InvalidPhone);
        assert_eq!(phones_of(&record), vec!["1111111111"]);
    }

    #[test]
    fn add_birthday_overwrites() {
        let mut record = Record::new("Ada");
        record.add_birthday("10.12.1815").unwrap();
        record.add_birthday("11.12.1815").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "11.12.1815");
        assert_eq!(
            record.add_birthday("1815-12-10"),
            Err(CoreError::InvalidBirthday)
        );
        assert_eq!(record.birthday().unwrap().to_string(), "11.12.1815");
    }

    #[test]
    fn days_to_birthday_requires_birthday() {
        let record = Record::new("Ada");
        let err = record.days_to_birthday(date(2024, 1, 1)).unwrap_err();
        assert_eq!(err.to_string(), "Birthday not set.");
    }

    #[test]
    fn days_to_birthday_counts_forward() {
        let mut record = Record::new("Ada");
        record.add_birthday("15.06.1990").unwrap();
        assert_eq!(record.days_to_birthday(date(2024, 6, 10)), Ok(5));
        assert_eq!(record.days_to_birthday(date(2024, 6, 15)), Ok(0));
        assert_eq!(record.days_to_birthday(date(2024, 6, 16)), Ok(364));
    }

    #[test]
    fn days_to_birthday_leap_day_in_common_year() {
        let mut record = Record::new("Ada");
        record.add_birthday("29.02.2000").unwrap();
        assert_eq!(record.days_to_birthday(date(2023, 2, 20)), Ok(8));
        assert_eq!(record.days_to_birthday(date(2024, 2, 20)), Ok(9));
    }

    #[test]
    fn days_to_birthday_past_last_representable_year() {
        let mut record = Record::new("Ada");
        record.add_birthday("01.01.1990").unwrap();
        let err = record.days_to_birthday(NaiveDate::MAX).unwrap_err();
        assert_eq!(err, CoreError::DateOutOfRange);
        assert_eq!(err.to_string(), "Date out of range.");
    }

    #[test]
    fn display_lists_phones_and_birthday() {
        let mut record = record_with(&["1111111111", "2222222222"]);
        assert_eq!(
            record.to_string(),
            "Contact name: Ada, phones: 1111111111; 2222222222"
        );
        record.add_birthday("05.03.1990").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: Ada, phones: 1111111111; 2222222222, birthday: 05.03.1990"
        );
    }
}
