use crate::book::{parse_days_ahead, AddressBook};
use crate::commands::contacts::{find, find_mut};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AssistantError, Result};
use chrono::NaiveDate;

pub fn add(book: &mut AddressBook, name: &str, birthday: &str) -> Result<CmdResult> {
    find_mut(book, name)?.add_birthday(birthday)?;
    Ok(CmdResult::message(CmdMessage::success("Birthday added.")))
}

pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    Ok(match find(book, name)?.birthday() {
        Some(birthday) => CmdResult::default().with_lines(vec![birthday.to_string()]),
        None => CmdResult::message(CmdMessage::info("Birthday not set.")),
    })
}

/// Birthdays within `days` (or `default_days`) of `today`.
///
/// An empty window is an informational outcome here, not a failure.
pub fn upcoming(
    book: &AddressBook,
    today: NaiveDate,
    days: Option<&str>,
    default_days: u32,
) -> Result<CmdResult> {
    let days_ahead = parse_days_ahead(days, default_days)?;
    match book.upcoming_birthdays(today, days_ahead) {
        Ok(upcoming) => Ok(CmdResult {
            upcoming_birthdays: upcoming,
            ..Default::default()
        }),
        Err(e @ AssistantError::NoUpcomingBirthdays(_)) => {
            Ok(CmdResult::message(CmdMessage::info(e.to_string())))
        }
        Err(e) => Err(e),
    }
}

pub fn shared(book: &AddressBook) -> Result<CmdResult> {
    let shared = book.shared_birthdays();
    if shared.is_empty() {
        return Ok(CmdResult::message(CmdMessage::info(
            "No contacts share a birthday.",
        )));
    }
    Ok(CmdResult {
        shared_birthdays: shared,
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::contacts;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn book_with(entries: &[(&str, &str)]) -> AddressBook {
        let mut book = AddressBook::new();
        for (name, birthday) in entries {
            contacts::add(&mut book, name, None).unwrap();
            add(&mut book, name, birthday).unwrap();
        }
        book
    }

    #[test]
    fn add_and_show() {
        let mut book = book_with(&[]);
        contacts::add(&mut book, "Eva", None).unwrap();
        let shown = show(&book, "Eva").unwrap();
        assert_eq!(shown.messages[0].content, "Birthday not set.");

        add(&mut book, "Eva", "07.11.1999").unwrap();
        assert_eq!(show(&book, "Eva").unwrap().lines, vec!["07.11.1999"]);
    }

    #[test]
    fn add_twice_is_state_error() {
        let mut book = book_with(&[("Eva", "07.11.1999")]);
        assert!(matches!(
            add(&mut book, "Eva", "08.11.1999"),
            Err(AssistantError::State(_))
        ));
    }

    #[test]
    fn add_to_unknown_contact() {
        let mut book = AddressBook::new();
        assert!(matches!(
            add(&mut book, "Eva", "07.11.1999"),
            Err(AssistantError::ContactNotFound(_))
        ));
    }

    #[test]
    fn upcoming_uses_default_window() {
        let book = book_with(&[("Ivan", "03.01.1990"), ("Far", "20.01.1990")]);
        let result = upcoming(&book, ymd(2024, 1, 1), None, 7).unwrap();
        assert_eq!(result.upcoming_birthdays.len(), 1);
        assert_eq!(result.upcoming_birthdays[0].name, "Ivan");

        let wider = upcoming(&book, ymd(2024, 1, 1), Some("30"), 7).unwrap();
        assert_eq!(wider.upcoming_birthdays.len(), 2);
    }

    #[test]
    fn upcoming_empty_is_info() {
        let book = book_with(&[("Far", "20.06.1990")]);
        let result = upcoming(&book, ymd(2024, 1, 1), Some("3"), 7).unwrap();
        assert!(result.upcoming_birthdays.is_empty());
        assert_eq!(
            result.messages[0].content,
            "No upcoming birthdays in the next 3 days."
        );
    }

    #[test]
    fn upcoming_bad_days() {
        let book = book_with(&[]);
        assert!(matches!(
            upcoming(&book, ymd(2024, 1, 1), Some("-2"), 7),
            Err(AssistantError::Validation(_))
        ));
    }

    #[test]
    fn shared_groups() {
        let book = book_with(&[("Ivan", "01.10.1985"), ("John", "01.10.1990")]);
        let result = shared(&book).unwrap();
        assert_eq!(result.shared_birthdays[0].names, vec!["Ivan", "John"]);

        let none = shared(&book_with(&[("Eva", "07.11.1999")])).unwrap();
        assert_eq!(none.messages[0].content, "No contacts share a birthday.");
    }
}
