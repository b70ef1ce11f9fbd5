//! # Storage Layer
//!
//! The [`DataStore`] trait loads and saves the two session collections as whole
//! snapshots. There is no incremental persistence: the session loads both at
//! start and writes both back at the end, and the last full snapshot wins.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one pretty-printed JSON file per collection
//! - [`memory::InMemoryStore`]: Keeps the serialized JSON in memory, for tests
//!
//! Both go through `serde_json`, so tests exercise the same encoding as production.
//!
//! ## Missing Data
//!
//! Loading from a store that has never been written returns an empty
//! collection rather than an error. A snapshot that exists but can't be
//! decoded is an error: silently starting empty would overwrite it on save.

use crate::book::AddressBook;
use crate::error::Result;
use crate::notes::NotesCollection;

pub mod fs;
pub mod memory;

/// Persistence for the address book and notes collection.
pub trait DataStore {
    fn load_book(&self) -> Result<AddressBook>;

    fn save_book(&mut self, book: &AddressBook) -> Result<()>;

    fn load_notes(&self) -> Result<NotesCollection>;

    fn save_notes(&mut self, notes: &NotesCollection) -> Result<()>;
}
