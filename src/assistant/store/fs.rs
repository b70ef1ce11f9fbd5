use super::DataStore;
use crate::book::AddressBook;
use crate::config::AssistantConfig;
use crate::error::{AssistantError, Result};
use crate::notes::NotesCollection;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON-file storage rooted at a data directory.
///
/// ```text
/// <data dir>/
/// ├── addressbook.json   # contacts (name configurable)
/// ├── notes.json         # notes + id counter (name configurable)
/// └── config.json        # see AssistantConfig
/// ```
pub struct FileStore {
    root: PathBuf,
    contacts_file: String,
    notes_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self::with_config(root, &AssistantConfig::default())
    }

    pub fn with_config(root: PathBuf, config: &AssistantConfig) -> Self {
        Self {
            root,
            contacts_file: config.contacts_file.clone(),
            notes_file: config.notes_file.clone(),
        }
    }

    pub fn contacts_path(&self) -> PathBuf {
        self.root.join(&self.contacts_file)
    }

    pub fn notes_path(&self) -> PathBuf {
        self.root.join(&self.notes_file)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(AssistantError::Io)?;
        }
        Ok(())
    }

    fn load<T: DeserializeOwned + Default>(&self, path: &Path) -> Result<T> {
        if !path.exists() {
            if self.root.exists() {
                warn!("{} not found, starting empty", path.display());
            } else {
                debug!("no data directory at {}, starting empty", self.root.display());
            }
            return Ok(T::default());
        }
        let content = fs::read_to_string(path).map_err(AssistantError::Io)?;
        let value = serde_json::from_str(&content).map_err(AssistantError::Serialization)?;
        debug!("loaded {}", path.display());
        Ok(value)
    }

    /// Writes through a temp file and renames, so a failed write never
    /// truncates the previous snapshot.
    fn save<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(value).map_err(AssistantError::Serialization)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(AssistantError::Io)?;
        fs::rename(&tmp, path).map_err(AssistantError::Io)?;
        debug!("saved {}", path.display());
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_book(&self) -> Result<AddressBook> {
        self.load(&self.contacts_path())
    }

    fn save_book(&mut self, book: &AddressBook) -> Result<()> {
        self.save(&self.contacts_path(), book)
    }

    fn load_notes(&self) -> Result<NotesCollection> {
        self.load(&self.notes_path())
    }

    fn save_notes(&mut self, notes: &NotesCollection) -> Result<()> {
        self.save(&self.notes_path(), notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use tempfile::TempDir;

    fn sample_book() -> AddressBook {
        let mut book = AddressBook::new();
        let mut ivan = Record::new("Ivan").unwrap();
        ivan.add_phone("0501234567").unwrap();
        ivan.add_phone("0671234567").unwrap();
        ivan.add_birthday("01.10.1985").unwrap();
        ivan.add_email("ivan@example.com").unwrap();
        book.add_record(ivan);
        book.add_record(Record::new("Eva").unwrap());
        book
    }

    #[test]
    fn test_missing_files_load_empty() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("never-created"));
        assert!(store.load_book().unwrap().is_empty());
        assert!(store.load_notes().unwrap().is_empty());
    }

    #[test]
    fn test_book_roundtrip() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("data"));
        let book = sample_book();
        store.save_book(&book).unwrap();

        let loaded = store.load_book().unwrap();
        assert_eq!(loaded, book);
        let ivan = loaded.find("Ivan").unwrap();
        assert_eq!(ivan.phones_summary().unwrap(), "0501234567; 0671234567");
        assert_eq!(ivan.birthday().unwrap().to_string(), "01.10.1985");
        assert_eq!(ivan.email().unwrap().as_str(), "ivan@example.com");
    }

    #[test]
    fn test_notes_roundtrip() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());
        let mut notes = NotesCollection::new();
        notes.add("buy milk", ["#Home"]).unwrap();
        notes.add("plan trip", ["travel", "summer"]).unwrap();
        store.save_notes(&notes).unwrap();

        assert_eq!(store.load_notes().unwrap(), notes);
    }

    #[test]
    fn test_save_leaves_no_tmp_files() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());
        store.save_book(&sample_book()).unwrap();
        store.save_notes(&NotesCollection::new()).unwrap();

        for entry in fs::read_dir(temp.path()).unwrap() {
            let name = entry.unwrap().file_name().into_string().unwrap();
            assert!(!name.ends_with(".tmp"), "leftover tmp file: {}", name);
        }
    }

    #[test]
    fn test_configured_file_names() {
        let temp = TempDir::new().unwrap();
        let config = AssistantConfig {
            contacts_file: "people.json".to_string(),
            ..Default::default()
        };
        let mut store = FileStore::with_config(temp.path().to_path_buf(), &config);
        store.save_book(&sample_book()).unwrap();
        assert!(temp.path().join("people.json").exists());
        assert!(!temp.path().join("addressbook.json").exists());
    }

    #[test]
    fn test_corrupt_snapshot_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("addressbook.json"), "{ not json").unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        assert!(matches!(
            store.load_book(),
            Err(AssistantError::Serialization(_))
        ));
    }

    #[test]
    fn test_invalid_phone_in_snapshot_is_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("addressbook.json"),
            r#"[{"name": "Ivan", "phones": ["123"]}]"#,
        )
        .unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        assert!(store.load_book().is_err());
    }

    #[test]
    fn test_legacy_dotted_birthday_loads() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("addressbook.json"),
            r#"[{"name": "Eva", "birthday": "07.11.1999"}]"#,
        )
        .unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        let book = store.load_book().unwrap();
        let eva = book.find("Eva").unwrap();
        assert_eq!(eva.birthday().unwrap().to_string(), "07.11.1999");
        assert!(eva.phones().is_empty());
    }

    #[test]
    fn test_repeated_name_in_snapshot_loads_once() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("addressbook.json"),
            r#"[
                {"name": "Ivan", "phones": ["0501234567"]},
                {"name": "Eva"},
                {"name": "Ivan", "phones": ["0671234567"]}
            ]"#,
        )
        .unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        let mut book = store.load_book().unwrap();

        assert_eq!(book.len(), 2);
        let names: Vec<_> = book.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Ivan", "Eva"]);
        assert_eq!(book.find("Ivan").unwrap().phones_summary().unwrap(), "0671234567");

        assert!(book.delete("Ivan").is_some());
        assert!(book.find("Ivan").is_none());
    }
}
