//! # API Facade
//!
//! [`AssistantApi`] is the single entry point for a session. It owns the
//! address book and notes loaded from a [`DataStore`], dispatches command
//! lines to the command layer, and writes both collections back on
//! [`save`](AssistantApi::save) or when the session is closed.
//!
//! ## Error Boundary
//!
//! [`execute`](AssistantApi::execute) is where user mistakes stop being errors.
//! Validation, lookup misses, usage problems and unknown commands come back as
//! an error-level message inside an `Ok(CmdResult)`, so a session can keep
//! going. Only storage failures surface as `Err`.
//!
//! ## Generic Over DataStore
//!
//! - Production: `AssistantApi<FileStore>`
//! - Testing: `AssistantApi<InMemoryStore>`

use crate::book::AddressBook;
use crate::commands::input::{complete, Command, COMMANDS};
use crate::commands;
use crate::config::AssistantConfig;
use crate::error::{AssistantError, Result};
use crate::notes::NotesCollection;
use crate::store::DataStore;
use chrono::{Local, NaiveDate};
use log::{debug, info};

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub struct AssistantApi<S: DataStore> {
    store: S,
    config: AssistantConfig,
    book: AddressBook,
    notes: NotesCollection,
}

impl<S: DataStore> AssistantApi<S> {
    /// Loads both collections from `store`.
    pub fn open(store: S, config: AssistantConfig) -> Result<Self> {
        let book = store.load_book()?;
        let notes = store.load_notes()?;
        info!(
            "session opened with {} contacts and {} notes",
            book.len(),
            notes.len()
        );
        Ok(Self {
            store,
            config,
            book,
            notes,
        })
    }

    /// Runs one command line against today's local date.
    pub fn execute(&mut self, line: &str) -> Result<CmdResult> {
        self.execute_on(line, Local::now().date_naive())
    }

    /// Runs one command line, treating `today` as the current date.
    pub fn execute_on(&mut self, line: &str, today: NaiveDate) -> Result<CmdResult> {
        if line.trim().is_empty() {
            return Ok(CmdResult::default());
        }

        let outcome = line
            .parse::<Command>()
            .and_then(|command| self.run_command(command, today));

        match outcome {
            Ok(result) => Ok(result),
            Err(e) if e.is_recoverable() => {
                debug!("command failed: {:?}", e);
                Ok(error_result(&e))
            }
            Err(e) => Err(e),
        }
    }

    /// Dispatches a parsed command. Failures are returned as-is.
    pub fn run_command(&mut self, command: Command, today: NaiveDate) -> Result<CmdResult> {
        debug!("dispatching {:?}", command);
        match command {
            Command::Hello => Ok(CmdResult::message(CmdMessage::info("How can I help you?"))),
            Command::Help => Ok(help()),
            Command::Exit => {
                self.save()?;
                let mut result = CmdResult::message(CmdMessage::success("Data saved. Good bye!"));
                result.exit = true;
                Ok(result)
            }
            Command::AddContact { name, phone } => {
                commands::contacts::add(&mut self.book, &name, phone.as_deref())
            }
            Command::ChangePhone { name, old, new } => {
                commands::contacts::change(&mut self.book, &name, &old, &new)
            }
            Command::ShowPhone { name } => commands::contacts::phones(&self.book, &name),
            Command::RemovePhone { name, phone } => {
                commands::contacts::remove_phone(&mut self.book, &name, &phone)
            }
            Command::All => commands::contacts::all(&self.book),
            Command::RemoveContact { name } => commands::contacts::remove(&mut self.book, &name),
            Command::AddBirthday { name, birthday } => {
                commands::birthdays::add(&mut self.book, &name, &birthday)
            }
            Command::ShowBirthday { name } => commands::birthdays::show(&self.book, &name),
            Command::Birthdays { days } => commands::birthdays::upcoming(
                &self.book,
                today,
                days.as_deref(),
                self.config.birthday_window_days,
            ),
            Command::SameBirthdays => commands::birthdays::shared(&self.book),
            Command::AddEmail { name, email } => {
                commands::emails::add(&mut self.book, &name, &email)
            }
            Command::ChangeEmail { name, email } => {
                commands::emails::change(&mut self.book, &name, &email)
            }
            Command::ShowEmail { name } => commands::emails::show(&self.book, &name),
            Command::AddNote { text, tags } => commands::notes::add(&mut self.notes, &text, &tags),
            Command::ShowNotes => commands::notes::show_all(&self.notes),
            Command::ShowNote { id } => commands::notes::show(&self.notes, id),
            Command::EditNote { id, text } => commands::notes::edit(&mut self.notes, id, &text),
            Command::DeleteNote { id } => commands::notes::delete(&mut self.notes, id),
            Command::FindNotes { keyword } => commands::notes::find(&self.notes, &keyword),
            Command::NotesByTag { tag } => commands::notes::by_tag(&self.notes, &tag),
            Command::SortNotes => commands::notes::grouped(&self.notes),
            Command::AddTags { id, tags } => commands::notes::add_tags(&mut self.notes, id, &tags),
            Command::RemoveTags { id, tags } => {
                commands::notes::remove_tags(&mut self.notes, id, &tags)
            }
        }
    }

    /// Writes both collections to the store.
    pub fn save(&mut self) -> Result<()> {
        self.store.save_book(&self.book)?;
        self.store.save_notes(&self.notes)?;
        info!(
            "saved {} contacts and {} notes",
            self.book.len(),
            self.notes.len()
        );
        Ok(())
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn notes(&self) -> &NotesCollection {
        &self.notes
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn help() -> CmdResult {
    let lines = COMMANDS
        .iter()
        .map(|c| {
            let usage = if c.args.is_empty() {
                c.name.to_string()
            } else {
                format!("{} {}", c.name, c.args)
            };
            format!("{:<38} {}", usage, c.about)
        })
        .collect();
    CmdResult::default().with_lines(lines)
}

fn error_result(error: &AssistantError) -> CmdResult {
    let mut result = CmdResult::message(CmdMessage::error(error.to_string()));
    if let AssistantError::UnknownCommand(name) = error {
        let candidates = complete(name);
        if !candidates.is_empty() {
            result.add_message(CmdMessage::info(format!(
                "Did you mean: {}?",
                candidates.join(", ")
            )));
        }
    }
    result
}
