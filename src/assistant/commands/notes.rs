use crate::commands::{owned_notes, CmdMessage, CmdResult};
use crate::error::{AssistantError, Result};
use crate::notes::NotesCollection;
use crate::tags::normalize_tag;

pub fn add(notes: &mut NotesCollection, text: &str, tags: &[String]) -> Result<CmdResult> {
    let id = notes.add(text, tags)?;
    Ok(CmdResult::message(CmdMessage::success(format!(
        "Note added (ID: {}).",
        id
    ))))
}

pub fn show_all(notes: &NotesCollection) -> Result<CmdResult> {
    if notes.is_empty() {
        return Ok(CmdResult::message(CmdMessage::info("No notes found.")));
    }
    Ok(CmdResult::default().with_listed_notes(owned_notes(notes.iter().collect())))
}

pub fn show(notes: &NotesCollection, id: u32) -> Result<CmdResult> {
    let note = notes.get(id).ok_or(AssistantError::NoteNotFound(id))?;
    Ok(CmdResult::default().with_listed_notes(vec![(id, note.clone())]))
}

pub fn edit(notes: &mut NotesCollection, id: u32, text: &str) -> Result<CmdResult> {
    notes.edit(id, text)?;
    Ok(CmdResult::message(CmdMessage::success("Note updated.")))
}

pub fn delete(notes: &mut NotesCollection, id: u32) -> Result<CmdResult> {
    notes.delete(id)?;
    Ok(CmdResult::message(CmdMessage::success("Note deleted.")))
}

pub fn find(notes: &NotesCollection, keyword: &str) -> Result<CmdResult> {
    let found = notes.search(keyword);
    if found.is_empty() {
        return Ok(CmdResult::message(CmdMessage::info("No matches found.")));
    }
    Ok(CmdResult::default().with_listed_notes(owned_notes(found)))
}

pub fn by_tag(notes: &NotesCollection, tag: &str) -> Result<CmdResult> {
    let found = notes.by_tag(tag);
    if found.is_empty() {
        return Ok(CmdResult::message(CmdMessage::info("No notes with this tag.")));
    }
    Ok(CmdResult::default().with_listed_notes(owned_notes(found)))
}

pub fn grouped(notes: &NotesCollection) -> Result<CmdResult> {
    let groups = notes.grouped_by_tag();
    if groups.is_empty() {
        return Ok(CmdResult::message(CmdMessage::info("No tags found.")));
    }
    Ok(CmdResult {
        note_groups: groups
            .into_iter()
            .map(|(tag, found)| (tag, owned_notes(found)))
            .collect(),
        ..Default::default()
    })
}

/// Adds every tag, or none of them if any is malformed.
pub fn add_tags(notes: &mut NotesCollection, id: u32, tags: &[String]) -> Result<CmdResult> {
    let normalized = normalize_all(tags)?;
    let note = notes.get_mut(id)?;
    for tag in &normalized {
        note.add_tag(tag)?;
    }
    Ok(CmdResult::message(CmdMessage::success(format!(
        "Tags updated for note {}.",
        id
    ))))
}

pub fn remove_tags(notes: &mut NotesCollection, id: u32, tags: &[String]) -> Result<CmdResult> {
    let normalized = normalize_all(tags)?;
    let note = notes.get_mut(id)?;
    let mut removed = false;
    for tag in &normalized {
        removed |= note.remove_tag(tag);
    }
    let message = if removed {
        CmdMessage::success(format!("Tags updated for note {}.", id))
    } else {
        CmdMessage::warning(format!("Tag not found on note {}.", id))
    };
    Ok(CmdResult::message(message))
}

fn normalize_all(tags: &[String]) -> Result<Vec<String>> {
    tags.iter().map(|t| normalize_tag(t)).collect()
}
