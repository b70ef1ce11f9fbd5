use crate::book::AddressBook;
use crate::commands::contacts::{find, find_mut};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn add(book: &mut AddressBook, name: &str, email: &str) -> Result<CmdResult> {
    let record = find_mut(book, name)?;
    record.add_email(email)?;
    Ok(CmdResult::message(CmdMessage::success(format!(
        "Email added for contact '{}'.",
        record.name()
    ))))
}

pub fn change(book: &mut AddressBook, name: &str, email: &str) -> Result<CmdResult> {
    let record = find_mut(book, name)?;
    record.edit_email(email)?;
    Ok(CmdResult::message(CmdMessage::success(format!(
        "Email updated for contact '{}'.",
        record.name()
    ))))
}

pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    Ok(match find(book, name)?.email() {
        Some(email) => CmdResult::default().with_lines(vec![email.to_string()]),
        None => CmdResult::message(CmdMessage::info("Email not set.")),
    })
}
