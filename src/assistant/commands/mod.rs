//! # Command Layer
//!
//! One module per area, each exposing plain functions that take the collection
//! they operate on plus typed arguments, and return a [`CmdResult`]:
//!
//! - [`contacts`]: add/change/remove contacts and phones, list everything
//! - [`birthdays`]: set and show birthdays, upcoming and shared birthdays
//! - [`emails`]: set, change and show emails
//! - [`notes`]: the notes collection and tagging
//!
//! [`input`] turns a raw command line into a typed [`input::Command`].
//!
//! Nothing here prints. A `CmdResult` carries messages with a level plus any
//! listed data, and the UI decides how it looks.

use crate::book::{SharedBirthday, UpcomingBirthday};
use crate::model::{Note, Record};

pub mod birthdays;
pub mod contacts;
pub mod emails;
pub mod input;
pub mod notes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Plain values asked for directly (a phone list, an email, a birthday).
    pub lines: Vec<String>,
    pub listed_contacts: Vec<Record>,
    pub listed_notes: Vec<(u32, Note)>,
    pub note_groups: Vec<(String, Vec<(u32, Note)>)>,
    pub upcoming_birthdays: Vec<UpcomingBirthday>,
    pub shared_birthdays: Vec<SharedBirthday>,
    pub messages: Vec<CmdMessage>,
    /// Set when the session should end after this result.
    pub exit: bool,
}

impl CmdResult {
    pub fn message(message: CmdMessage) -> Self {
        let mut result = Self::default();
        result.add_message(message);
        result
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_lines(mut self, lines: Vec<String>) -> Self {
        self.lines = lines;
        self
    }

    pub fn with_listed_contacts(mut self, contacts: Vec<Record>) -> Self {
        self.listed_contacts = contacts;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<(u32, Note)>) -> Self {
        self.listed_notes = notes;
        self
    }
}

/// Clones borrowed `(id, note)` pairs into an owned listing.
pub(crate) fn owned_notes(found: Vec<(u32, &Note)>) -> Vec<(u32, Note)> {
    found
        .into_iter()
        .map(|(id, note)| (id, note.clone()))
        .collect()
}
