use crate::domain::Record;
use crate::rules::dates::falls_within;
use chrono::{Datelike, NaiveDate};
use std::collections::btree_map::{BTreeMap, Entry};

/// All contacts, keyed by name. Each record is stored under its own name.
#[derive(Debug, Default)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record`, or appends its phones to the record already stored
    /// under the same name. The incoming birthday is not merged.
    pub fn add_record(&mut self, record: Record) {
        match self.records.entry(record.name().as_str().to_string()) {
            Entry::Occupied(mut slot) => slot.get_mut().absorb_phones(record),
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.remove(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Records whose birthday, placed in the current year, lands within
    /// `[today, today + window_days]`. A birthday that already passed this
    /// year is not rolled forward.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> Vec<&Record> {
        self.iter()
            .filter(|record| {
                record
                    .birthday()
                    .and_then(|birthday| birthday.in_year(today.year()))
                    .is_some_and(|date| falls_within(date, today, window_days))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::AddressBook;
    use crate::domain::Record;
    use chrono::NaiveDate;

    fn record(name: &str, phone: &str) -> Record {
        let mut record = Record::new(name);
        record.add_phone(phone).unwrap();
        record
    }

    fn with_birthday(name: &str, birthday: &str) -> Record {
        let mut record = record(name, "1234567890");
        record.add_birthday(birthday).unwrap();
        record
    }

    fn names(records: &[&Record]) -> Vec<String> {
        records
            .iter()
            .map(|record| record.name().to_string())
            .collect()
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn add_record_merges_phones_for_same_name() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", "1234567890"));
        book.add_record(record("Alice", "0987654321"));

        assert_eq!(book.len(), 1);
        let alice = book.find("Alice").expect("alice");
        let phones: Vec<&str> = alice.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["1234567890", "0987654321"]);
    }

    #[test]
    fn add_record_keeps_existing_birthday() {
        let mut book = AddressBook::new();
        book.add_record(with_birthday("Alice", "01.01.1990"));
        book.add_record(with_birthday("Alice", "02.02.1992"));
        let alice = book.find("Alice").expect("alice");
        assert_eq!(alice.birthday().unwrap().to_string(), "01.01.1990");
    }

    #[test]
    fn find_is_exact() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", "1234567890"));
        assert!(book.find("alice").is_none());
        assert!(book.find("Alice ").is_none());
        assert!(book.find("Alice").is_some());
    }

    #[test]
    fn delete_returns_removed_record() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", "1234567890"));
        let removed = book.delete("Alice").expect("removed");
        assert_eq!(removed.name().as_str(), "Alice");
        assert!(book.is_empty());
        assert!(book.delete("Alice").is_none());
    }

    #[test]
    fn iter_orders_by_name() {
        let mut book = AddressBook::new();
        book.add_record(record("Carol", "1234567890"));
        book.add_record(record("Alice", "1234567890"));
        book.add_record(record("Bob", "1234567890"));
        let order: Vec<&str> = book.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(order, vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn upcoming_birthdays_window_is_inclusive() {
        let mut book = AddressBook::new();
        book.add_record(with_birthday("Today", "10.06.1990"));
        book.add_record(with_birthday("Seven", "17.06.1985"));
        book.add_record(with_birthday("Eight", "18.06.1985"));
        book.add_record(with_birthday("Yesterday", "09.06.1985"));
        book.add_record(record("NoDate", "1234567890"));

        let upcoming = book.upcoming_birthdays(date(2024, 6, 10), 7);
        assert_eq!(names(&upcoming), vec!["Seven", "Today"]);
    }

    #[test]
    fn upcoming_birthdays_does_not_roll_into_next_year() {
        let mut book = AddressBook::new();
        book.add_record(with_birthday("NewYear", "02.01.1990"));
        book.add_record(with_birthday("Eve", "30.12.1990"));

        let upcoming = book.upcoming_birthdays(date(2024, 12, 28), 7);
        assert_eq!(names(&upcoming), vec!["Eve"]);
    }

    #[test]
    fn upcoming_birthdays_leap_day_in_common_year() {
        let mut book = AddressBook::new();
        book.add_record(with_birthday("Leap", "29.02.2000"));
        let upcoming = book.upcoming_birthdays(date(2023, 2, 25), 3);
        assert_eq!(names(&upcoming), vec!["Leap"]);
    }

    #[test]
    fn upcoming_birthdays_respects_window_size() {
        let mut book = AddressBook::new();
        book.add_record(with_birthday("Later", "20.06.1990"));
        assert!(book.upcoming_birthdays(date(2024, 6, 10), 7).is_empty());
        assert_eq!(
            names(&book.upcoming_birthdays(date(2024, 6, 10), 10)),
            vec!["Later"]
        );
    }
}
