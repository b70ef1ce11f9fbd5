use super::DataStore;
use crate::book::AddressBook;
use crate::error::{AssistantError, Result};
use crate::notes::NotesCollection;
use std::io;

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// Snapshots are held as serialized JSON so that loading goes through the
/// same decoding (and validation) as the file store.
#[derive(Default)]
pub struct InMemoryStore {
    book: Option<String>,
    notes: Option<String>,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent save fail with an I/O error.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    pub fn has_book_snapshot(&self) -> bool {
        self.book.is_some()
    }

    pub fn has_notes_snapshot(&self) -> bool {
        self.notes.is_some()
    }

    fn check_writable(&self) -> Result<()> {
        if self.simulate_write_error {
            return Err(AssistantError::Io(io::Error::other("simulated write error")));
        }
        Ok(())
    }
}

impl DataStore for InMemoryStore {
    fn load_book(&self) -> Result<AddressBook> {
        match &self.book {
            Some(json) => Ok(serde_json::from_str(json)?),
            None => Ok(AddressBook::default()),
        }
    }

    fn save_book(&mut self, book: &AddressBook) -> Result<()> {
        self.check_writable()?;
        self.book = Some(serde_json::to_string(book)?);
        Ok(())
    }

    fn load_notes(&self) -> Result<NotesCollection> {
        match &self.notes {
            Some(json) => Ok(serde_json::from_str(json)?),
            None => Ok(NotesCollection::default()),
        }
    }

    fn save_notes(&mut self, notes: &NotesCollection) -> Result<()> {
        self.check_writable()?;
        self.notes = Some(serde_json::to_string(notes)?);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Record;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        book: AddressBook,
        notes: NotesCollection,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                book: AddressBook::new(),
                notes: NotesCollection::new(),
            }
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str], birthday: Option<&str>) -> Self {
            let mut record = Record::new(name).unwrap();
            for phone in phones {
                record.add_phone(phone).unwrap();
            }
            if let Some(b) = birthday {
                record.add_birthday(b).unwrap();
            }
            self.book.add_record(record);
            self
        }

        pub fn with_note(mut self, text: &str, tags: &[&str]) -> Self {
            self.notes.add(text, tags).unwrap();
            self
        }

        /// Writes the accumulated collections into the store and returns it.
        pub fn build(mut self) -> InMemoryStore {
            self.store.save_book(&self.book).unwrap();
            self.store.save_notes(&self.notes).unwrap();
            self.store
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn test_empty_store_loads_empty_collections() {
        let store = InMemoryStore::new();
        assert!(store.load_book().unwrap().is_empty());
        assert!(store.load_notes().unwrap().is_empty());
    }

    #[test]
    fn test_fixture_roundtrip() {
        let store = StoreFixture::new()
            .with_contact("Ivan", &["0501234567"], Some("01.10.1985"))
            .with_note("buy milk", &["home"])
            .build();
        assert!(store.load_book().unwrap().find("Ivan").is_some());
        assert_eq!(store.load_notes().unwrap().by_tag("home").len(), 1);
    }

    #[test]
    fn test_simulated_write_error_keeps_old_snapshot() {
        let mut store = StoreFixture::new().with_contact("Ivan", &[], None).build();
        store.set_simulate_write_error(true);
        assert!(matches!(
            store.save_book(&AddressBook::new()),
            Err(AssistantError::Io(_))
        ));
        assert_eq!(store.load_book().unwrap().len(), 1);
    }
}
