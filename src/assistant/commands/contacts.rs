use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AssistantError, Result};
use crate::fields::Phone;
use crate::model::Record;

pub(crate) fn find<'a>(book: &'a AddressBook, name: &str) -> Result<&'a Record> {
    book.find(name)
        .ok_or_else(|| AssistantError::ContactNotFound(name.to_string()))
}

pub(crate) fn find_mut<'a>(book: &'a mut AddressBook, name: &str) -> Result<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| AssistantError::ContactNotFound(name.to_string()))
}

/// Creates the contact if needed, then appends `phone` when given.
///
/// A malformed phone fails before anything is created.
pub fn add(book: &mut AddressBook, name: &str, phone: Option<&str>) -> Result<CmdResult> {
    if let Some(number) = phone {
        Phone::new(number)?;
    }

    let message = match book.find_mut(name) {
        Some(record) => {
            if let Some(number) = phone {
                record.add_phone(number)?;
            }
            "Contact updated."
        }
        None => {
            let mut record = Record::new(name)?;
            if let Some(number) = phone {
                record.add_phone(number)?;
            }
            book.add_record(record);
            "Contact added."
        }
    };
    Ok(CmdResult::message(CmdMessage::success(message)))
}

pub fn change(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    let record = find_mut(book, name)?;
    let message = if record.edit_phone(old, new)? {
        CmdMessage::success("Phone updated.")
    } else {
        CmdMessage::warning("Old phone not found.")
    };
    Ok(CmdResult::message(message))
}

pub fn phones(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = find(book, name)?;
    Ok(match record.phones_summary() {
        Some(summary) => CmdResult::default().with_lines(vec![summary]),
        None => CmdResult::message(CmdMessage::info("No phones.")),
    })
}

pub fn remove_phone(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = find_mut(book, name)?;
    let message = if record.remove_phone(phone) {
        CmdMessage::success("Phone removed.")
    } else {
        CmdMessage::warning("Phone not found.")
    };
    Ok(CmdResult::message(message))
}

pub fn all(book: &AddressBook) -> Result<CmdResult> {
    if book.is_empty() {
        return Ok(CmdResult::message(CmdMessage::info("No contacts.")));
    }
    Ok(CmdResult::default().with_listed_contacts(book.iter().cloned().collect()))
}

pub fn remove(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    let removed = book
        .delete(name)
        .ok_or_else(|| AssistantError::ContactNotFound(name.to_string()))?;
    Ok(CmdResult::message(CmdMessage::success(format!(
        "Contact '{}' has been removed.",
        removed.name()
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::DataStore;

    fn fixture_book() -> AddressBook {
        StoreFixture::new()
            .with_contact("Ivan", &["0501234567"], None)
            .with_contact("Eva", &[], Some("07.11.1999"))
            .build()
            .load_book()
            .unwrap()
    }

    fn only_message(result: &CmdResult) -> (&MessageLevel, &str) {
        assert_eq!(result.messages.len(), 1);
        (&result.messages[0].level, result.messages[0].content.as_str())
    }

    #[test]
    fn add_creates_then_updates() {
        let mut book = AddressBook::new();
        let result = add(&mut book, "John", Some("1234567890")).unwrap();
        assert_eq!(only_message(&result), (&MessageLevel::Success, "Contact added."));

        let result = add(&mut book, "John", Some("0987654321")).unwrap();
        assert_eq!(only_message(&result).1, "Contact updated.");
        assert_eq!(
            book.find("John").unwrap().phones_summary().unwrap(),
            "1234567890; 0987654321"
        );
    }

    #[test]
    fn add_without_phone() {
        let mut book = AddressBook::new();
        add(&mut book, "John", None).unwrap();
        assert!(book.find("John").unwrap().phones().is_empty());
    }

    #[test]
    fn add_with_bad_phone_creates_nothing() {
        let mut book = AddressBook::new();
        assert!(matches!(
            add(&mut book, "John", Some("123")),
            Err(AssistantError::Validation(_))
        ));
        assert!(book.is_empty());
    }

    #[test]
    fn change_reports_missing_old_phone() {
        let mut book = fixture_book();
        let result = change(&mut book, "Ivan", "1111111111", "2222222222").unwrap();
        assert_eq!(
            only_message(&result),
            (&MessageLevel::Warning, "Old phone not found.")
        );

        let result = change(&mut book, "Ivan", "0501234567", "2222222222").unwrap();
        assert_eq!(only_message(&result).1, "Phone updated.");
        assert!(book.find("Ivan").unwrap().find_phone("2222222222").is_some());
    }

    #[test]
    fn change_unknown_contact() {
        let mut book = fixture_book();
        assert!(matches!(
            change(&mut book, "Nobody", "0501234567", "2222222222"),
            Err(AssistantError::ContactNotFound(_))
        ));
    }

    #[test]
    fn phones_lists_or_says_none() {
        let book = fixture_book();
        assert_eq!(phones(&book, "Ivan").unwrap().lines, vec!["0501234567"]);
        assert_eq!(only_message(&phones(&book, "Eva").unwrap()).1, "No phones.");
    }

    #[test]
    fn remove_phone_reports_outcome() {
        let mut book = fixture_book();
        let result = remove_phone(&mut book, "Ivan", "0000000000").unwrap();
        assert_eq!(only_message(&result).1, "Phone not found.");
        let result = remove_phone(&mut book, "Ivan", "0501234567").unwrap();
        assert_eq!(only_message(&result).1, "Phone removed.");
        assert!(book.find("Ivan").unwrap().phones().is_empty());
    }

    #[test]
    fn all_lists_in_insertion_order() {
        let result = all(&fixture_book()).unwrap();
        let names: Vec<_> = result.listed_contacts.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Ivan", "Eva"]);

        let empty = all(&AddressBook::new()).unwrap();
        assert_eq!(only_message(&empty).1, "No contacts.");
    }

    #[test]
    fn remove_contact() {
        let mut book = fixture_book();
        let result = remove(&mut book, "Eva").unwrap();
        assert_eq!(only_message(&result).1, "Contact 'Eva' has been removed.");
        assert!(matches!(
            remove(&mut book, "Eva"),
            Err(AssistantError::ContactNotFound(_))
        ));
    }
}
