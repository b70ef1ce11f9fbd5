//! # Address Book
//!
//! [`AddressBook`] maps contact names to [`Record`]s. Names are unique: adding a
//! record under an existing name replaces the old record in its original slot.
//! Records are kept in insertion order, which is what breaks ties when several
//! people celebrate on the same day.
//!
//! ## Upcoming Birthdays
//!
//! [`AddressBook::upcoming_birthdays`] projects every birthday onto the current
//! year (or the next one, if this year's date has passed) and keeps the ones that
//! land within `days_ahead` days of today, inclusive on both ends.
//!
//! A birthday that falls on a weekend is celebrated the following Monday. The
//! window check uses the real date, so a Saturday birthday six days out still
//! shows up even though its Monday is eight days away.
//!
//! February 29th birthdays are observed on February 28th in common years.

use crate::error::{AssistantError, Result};
use crate::model::Record;
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Default look-ahead window for `birthdays`, in days.
pub const DEFAULT_BIRTHDAY_WINDOW: u32 = 7;

/// Serialized as a plain list of records. Loading folds the list through
/// [`AddressBook::add_record`], so a repeated name keeps only its last entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Record>", into = "Vec<Record>")]
pub struct AddressBook {
    records: Vec<Record>,
}

impl From<Vec<Record>> for AddressBook {
    fn from(records: Vec<Record>) -> Self {
        let mut book = Self::new();
        for record in records {
            book.add_record(record);
        }
        book
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(book: AddressBook) -> Self {
        book.records
    }
}

/// A contact whose birthday falls inside the requested window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// The birthday as projected onto this cycle, before weekend adjustment.
    pub date: NaiveDate,
    /// The day to congratulate: `date`, or the following Monday on weekends.
    pub celebration: NaiveDate,
}

/// Contacts born on the same day of the year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedBirthday {
    pub month: u32,
    pub day: u32,
    pub names: Vec<String>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&mut self, record: Record) {
        match self.records.iter_mut().find(|r| r.name() == record.name()) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name() == name)
    }

    /// Removes the record, returning it if it was there.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let pos = self.records.iter().position(|r| r.name() == name)?;
        Some(self.records.remove(pos))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Birthdays within `days_ahead` days of `today`, ordered by celebration date.
    ///
    /// Fails with [`AssistantError::NoUpcomingBirthdays`] when nobody qualifies.
    pub fn upcoming_birthdays(
        &self,
        today: NaiveDate,
        days_ahead: u32,
    ) -> Result<Vec<UpcomingBirthday>> {
        let mut upcoming: Vec<UpcomingBirthday> = self
            .records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?.date();
                let date = next_occurrence(birthday, today)?;
                let offset = (date - today).num_days();
                if offset < 0 || offset > i64::from(days_ahead) {
                    return None;
                }
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    date,
                    celebration: celebration_day(date),
                })
            })
            .collect();

        if upcoming.is_empty() {
            return Err(AssistantError::NoUpcomingBirthdays(days_ahead));
        }

        // stable: equal dates keep insertion order
        upcoming.sort_by_key(|u| u.celebration);
        Ok(upcoming)
    }

    /// Groups of two or more contacts sharing a day and month of birth, in the
    /// order the first member of each group was added.
    pub fn shared_birthdays(&self) -> Vec<SharedBirthday> {
        let mut groups: Vec<SharedBirthday> = Vec::new();
        for record in &self.records {
            let Some(birthday) = record.birthday() else {
                continue;
            };
            let date = birthday.date();
            let name = record.name().to_string();
            match groups
                .iter_mut()
                .find(|g| g.month == date.month() && g.day == date.day())
            {
                Some(group) => group.names.push(name),
                None => groups.push(SharedBirthday {
                    month: date.month(),
                    day: date.day(),
                    names: vec![name],
                }),
            }
        }
        groups.retain(|g| g.names.len() > 1);
        groups
    }
}

/// Parses an optional `days_ahead` override, falling back to `default`.
pub fn parse_days_ahead(value: Option<&str>, default: u32) -> Result<u32> {
    match value {
        None => Ok(default),
        Some(raw) => {
            let invalid = || {
                AssistantError::Validation(format!(
                    "Invalid number of days '{}': use a non-negative whole number",
                    raw
                ))
            };
            // u32's parser takes a leading '+'
            if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            raw.parse::<u32>().map_err(|_| invalid())
        }
    }
}

fn occurrence_in(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = occurrence_in(birthday, today.year())?;
    if this_year < today {
        occurrence_in(birthday, today.year() + 1)
    } else {
        Some(this_year)
    }
}

fn celebration_day(date: NaiveDate) -> NaiveDate {
    let weekday = date.weekday().num_days_from_monday();
    if weekday >= 5 {
        date + Days::new(u64::from(7 - weekday))
    } else {
        date
    }
}
