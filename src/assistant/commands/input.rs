//! Command-line input: tokenizing, the command catalog, and completion.
//!
//! A line is split on whitespace; the first token, lower-cased, names the
//! command and the rest are positional arguments. Contact names are a single
//! token. Surplus arguments are ignored.

use crate::error::{AssistantError, Result};
use crate::tags::is_tag_token;
use std::str::FromStr;

/// A catalog entry: command name, argument synopsis, one-line description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandInfo {
    pub name: &'static str,
    pub args: &'static str,
    pub about: &'static str,
}

const fn info(name: &'static str, args: &'static str, about: &'static str) -> CommandInfo {
    CommandInfo { name, args, about }
}

/// Every command the assistant understands, in help order.
pub const COMMANDS: &[CommandInfo] = &[
    info("hello", "", "Greet the assistant"),
    info("add", "<name> [phone]", "Add a contact, or a phone to an existing one"),
    info("change", "<name> <old> <new>", "Replace one of a contact's phones"),
    info("phone", "<name>", "Show a contact's phones"),
    info("remove-phone", "<name> <phone>", "Remove a phone from a contact"),
    info("all", "", "Show all contacts"),
    info("remove-contact", "<name>", "Remove a contact"),
    info("delete-contact", "<name>", "Same as remove-contact"),
    info("add-birthday", "<name> <DD.MM.YYYY>", "Set a contact's birthday"),
    info("show-birthday", "<name>", "Show a contact's birthday"),
    info("birthdays", "[days]", "Birthdays coming up in the next few days"),
    info("same-birthdays", "", "Contacts who share a birthday"),
    info("add-email", "<name> <email>", "Set a contact's email"),
    info("change-email", "<name> <email>", "Change a contact's email"),
    info("show-email", "<name>", "Show a contact's email"),
    info("add-note", "<text> [#tag ...]", "Add a note; #words become tags"),
    info("show-notes", "", "Show all notes"),
    info("show-note", "<id>", "Show one note"),
    info("edit-note", "<id> <text>", "Replace a note's text"),
    info("delete-note", "<id>", "Delete a note"),
    info("find-notes", "<keyword>", "Find notes by text or tag"),
    info("notes-by-tag", "<tag>", "Show notes with a tag"),
    info("sort-notes", "", "Show notes grouped by tag"),
    info("add-tag", "<id> <tag> [tag ...]", "Tag a note"),
    info("remove-tag", "<id> <tag> [tag ...]", "Untag a note"),
    info("help", "", "Show this list"),
    info("close", "", "Save and exit"),
    info("exit", "", "Save and exit"),
];

/// Names of all catalog commands.
pub fn command_names() -> impl Iterator<Item = &'static str> {
    COMMANDS.iter().map(|c| c.name)
}

/// Catalog commands starting with `prefix`.
///
/// Only the command word completes: blank input, or input that already
/// contains a space, has no candidates.
pub fn complete(prefix: &str) -> Vec<&'static str> {
    let word = prefix.trim_start();
    if word.trim().is_empty() || word.contains(char::is_whitespace) {
        return Vec::new();
    }
    command_names().filter(|name| name.starts_with(word)).collect()
}

/// Splits a line into a lower-cased command word and its arguments.
pub fn parse_input(line: &str) -> (String, Vec<String>) {
    let mut parts = line.split_whitespace();
    match parts.next() {
        Some(cmd) => (cmd.to_lowercase(), parts.map(str::to_string).collect()),
        None => (String::new(), Vec::new()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Exit,
    AddContact { name: String, phone: Option<String> },
    ChangePhone { name: String, old: String, new: String },
    ShowPhone { name: String },
    RemovePhone { name: String, phone: String },
    All,
    RemoveContact { name: String },
    AddBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    Birthdays { days: Option<String> },
    SameBirthdays,
    AddEmail { name: String, email: String },
    ChangeEmail { name: String, email: String },
    ShowEmail { name: String },
    AddNote { text: String, tags: Vec<String> },
    ShowNotes,
    ShowNote { id: u32 },
    EditNote { id: u32, text: String },
    DeleteNote { id: u32 },
    FindNotes { keyword: String },
    NotesByTag { tag: String },
    SortNotes,
    AddTags { id: u32, tags: Vec<String> },
    RemoveTags { id: u32, tags: Vec<String> },
}

impl FromStr for Command {
    type Err = AssistantError;

    fn from_str(line: &str) -> Result<Self> {
        let (name, args) = parse_input(line);
        let mut args = Args::new(args);

        let command = match name.as_str() {
            "hello" => Command::Hello,
            "help" => Command::Help,
            "close" | "exit" => Command::Exit,
            "add" => Command::AddContact {
                name: args.required()?,
                phone: args.optional(),
            },
            "change" => Command::ChangePhone {
                name: args.required()?,
                old: args.required()?,
                new: args.required()?,
            },
            "phone" => Command::ShowPhone {
                name: args.required()?,
            },
            "remove-phone" => Command::RemovePhone {
                name: args.required()?,
                phone: args.required()?,
            },
            "all" => Command::All,
            "remove-contact" | "delete-contact" => Command::RemoveContact {
                name: args.required()?,
            },
            "add-birthday" => Command::AddBirthday {
                name: args.required()?,
                birthday: args.required()?,
            },
            "show-birthday" => Command::ShowBirthday {
                name: args.required()?,
            },
            "birthdays" => Command::Birthdays {
                days: args.optional(),
            },
            "same-birthdays" => Command::SameBirthdays,
            "add-email" => Command::AddEmail {
                name: args.required()?,
                email: args.required()?,
            },
            "change-email" => Command::ChangeEmail {
                name: args.required()?,
                email: args.required()?,
            },
            "show-email" => Command::ShowEmail {
                name: args.required()?,
            },
            "add-note" => {
                let (tags, words): (Vec<String>, Vec<String>) =
                    args.rest().into_iter().partition(|t| is_tag_token(t));
                if words.is_empty() {
                    return Err(AssistantError::Usage);
                }
                Command::AddNote {
                    text: words.join(" "),
                    tags,
                }
            }
            "show-notes" => Command::ShowNotes,
            "show-note" => Command::ShowNote { id: args.note_id()? },
            "edit-note" => {
                let id = args.note_id()?;
                let words = args.rest();
                if words.is_empty() {
                    return Err(AssistantError::Usage);
                }
                Command::EditNote {
                    id,
                    text: words.join(" "),
                }
            }
            "delete-note" => Command::DeleteNote { id: args.note_id()? },
            "find-notes" => Command::FindNotes {
                keyword: args.required()?,
            },
            "notes-by-tag" => Command::NotesByTag {
                tag: args.required()?,
            },
            "sort-notes" => Command::SortNotes,
            "add-tag" => Command::AddTags {
                id: args.note_id()?,
                tags: args.at_least_one()?,
            },
            "remove-tag" => Command::RemoveTags {
                id: args.note_id()?,
                tags: args.at_least_one()?,
            },
            _ => return Err(AssistantError::UnknownCommand(name)),
        };
        Ok(command)
    }
}

/// Positional arguments consumed front to back.
struct Args(std::vec::IntoIter<String>);

impl Args {
    fn new(args: Vec<String>) -> Self {
        Self(args.into_iter())
    }

    fn required(&mut self) -> Result<String> {
        self.0.next().ok_or(AssistantError::Usage)
    }

    fn optional(&mut self) -> Option<String> {
        self.0.next()
    }

    fn note_id(&mut self) -> Result<u32> {
        let raw = self.required()?;
        raw.parse::<u32>()
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| {
                AssistantError::Validation(format!(
                    "Note id must be a positive integer, got '{}'",
                    raw
                ))
            })
    }

    fn rest(&mut self) -> Vec<String> {
        self.0.by_ref().collect()
    }

    fn at_least_one(&mut self) -> Result<Vec<String>> {
        let rest = self.rest();
        if rest.is_empty() {
            return Err(AssistantError::Usage);
        }
        Ok(rest)
    }
}
