//! # Notes Collection
//!
//! Notes are addressed by a small integer id handed out at creation. Ids come
//! from a counter that only moves forward and is persisted with the notes, so
//! deleting note 2 of 3 and adding another yields note 4, never a second 3.
//!
//! Every listing returned here is ordered by id.

use crate::error::{AssistantError, Result};
use crate::model::Note;
use crate::tags::normalize_tag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesCollection {
    #[serde(default = "first_id")]
    next_id: u32,
    #[serde(default)]
    notes: BTreeMap<u32, Note>,
}

fn first_id() -> u32 {
    1
}

impl Default for NotesCollection {
    fn default() -> Self {
        Self {
            next_id: first_id(),
            notes: BTreeMap::new(),
        }
    }
}

impl NotesCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new note and returns its id.
    pub fn add<I, T>(&mut self, text: &str, tags: I) -> Result<u32>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let note = Note::with_tags(text, tags)?;
        let exhausted = || AssistantError::Validation("Note id space exhausted.".to_string());
        // A hand-edited snapshot may hold ids past the counter.
        let after_last = match self.notes.keys().next_back() {
            Some(last) => last.checked_add(1).ok_or_else(exhausted)?,
            None => 1,
        };
        let id = self.next_id.max(after_last);
        let next_id = id.checked_add(1).ok_or_else(exhausted)?;
        self.notes.insert(id, note);
        self.next_id = next_id;
        Ok(id)
    }

    pub fn delete(&mut self, id: u32) -> Result<Note> {
        self.notes
            .remove(&id)
            .ok_or(AssistantError::NoteNotFound(id))
    }

    pub fn get(&self, id: u32) -> Option<&Note> {
        self.notes.get(&id)
    }

    pub fn get_mut(&mut self, id: u32) -> Result<&mut Note> {
        self.notes
            .get_mut(&id)
            .ok_or(AssistantError::NoteNotFound(id))
    }

    pub fn edit(&mut self, id: u32, text: &str) -> Result<()> {
        self.get_mut(id)?.set_text(text);
        Ok(())
    }

    /// Notes whose text contains `keyword` (any case) or that carry it as a tag.
    pub fn search(&self, keyword: &str) -> Vec<(u32, &Note)> {
        self.iter().filter(|(_, note)| note.matches(keyword)).collect()
    }

    pub fn by_tag(&self, tag: &str) -> Vec<(u32, &Note)> {
        let Ok(tag) = normalize_tag(tag) else {
            return Vec::new();
        };
        self.iter().filter(|(_, note)| note.has_tag(&tag)).collect()
    }

    /// Every tag in use, mapped to the notes carrying it.
    ///
    /// A note with several tags appears in each of their groups.
    pub fn grouped_by_tag(&self) -> BTreeMap<String, Vec<(u32, &Note)>> {
        let mut groups: BTreeMap<String, Vec<(u32, &Note)>> = BTreeMap::new();
        for (id, note) in self.iter() {
            for tag in note.tags() {
                groups.entry(tag.to_string()).or_default().push((id, note));
            }
        }
        groups
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &Note)> {
        self.notes.iter().map(|(id, note)| (*id, note))
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
