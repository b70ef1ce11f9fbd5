use crate::error::{AssistantError, Result};
use crate::fields::{Birthday, Email, Name, Phone};
use crate::tags::normalize_tag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// One person in the address book.
///
/// The name is the record's identity and cannot change once set. Phones keep
/// insertion order and may repeat; birthday and email hold at most one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
    #[serde(default)]
    email: Option<Email>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
            email: None,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn add_phone(&mut self, number: &str) -> Result<()> {
        self.phones.push(Phone::new(number)?);
        Ok(())
    }

    /// Removes the first phone equal to `number`. Returns whether one was removed.
    pub fn remove_phone(&mut self, number: &str) -> bool {
        match self.phones.iter().position(|p| p.as_str() == number) {
            Some(pos) => {
                self.phones.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Replaces the first phone equal to `old` with `new`.
    ///
    /// Returns `Ok(false)` without touching anything when `old` is absent, and
    /// a validation error (leaving the old number in place) when `new` is malformed.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool> {
        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(phone) => {
                phone.update(new)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == number)
    }

    pub fn add_birthday(&mut self, value: &str) -> Result<()> {
        if self.birthday.is_some() {
            return Err(AssistantError::State("Birthday already set.".to_string()));
        }
        self.birthday = Some(Birthday::parse(value)?);
        Ok(())
    }

    pub fn add_email(&mut self, value: &str) -> Result<()> {
        if self.email.is_some() {
            return Err(AssistantError::State(
                "Email already set. Use change-email to change it.".to_string(),
            ));
        }
        self.email = Some(Email::new(value)?);
        Ok(())
    }

    pub fn edit_email(&mut self, value: &str) -> Result<()> {
        match self.email.as_mut() {
            Some(email) => email.update(value),
            None => Err(AssistantError::State(
                "Email not set yet. Use add-email to add one.".to_string(),
            )),
        }
    }

    /// Phones joined with `"; "`, or `None` when the record has no phones.
    pub fn phones_summary(&self) -> Option<String> {
        if self.phones.is_empty() {
            return None;
        }
        Some(
            self.phones
                .iter()
                .map(Phone::as_str)
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones_summary()
            .unwrap_or_else(|| "No phones".to_string());
        let birthday = self
            .birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, birthday
        )
    }
}

/// A free-text note with a set of normalized tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    text: String,
    #[serde(default)]
    tags: BTreeSet<String>,
}

impl Note {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.trim().to_string(),
            tags: BTreeSet::new(),
        }
    }

    pub fn with_tags<I, T>(text: &str, tags: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut note = Self::new(text);
        for tag in tags {
            note.add_tag(tag.as_ref())?;
        }
        Ok(note)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.trim().to_string();
    }

    /// Tags in lexicographic order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn add_tag(&mut self, tag: &str) -> Result<()> {
        self.tags.insert(normalize_tag(tag)?);
        Ok(())
    }

    /// Returns whether the tag was present. A tag that normalizes to nothing
    /// can't be on the note, so it is simply not removed.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        normalize_tag(tag)
            .map(|t| self.tags.remove(&t))
            .unwrap_or(false)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        normalize_tag(tag)
            .map(|t| self.tags.contains(&t))
            .unwrap_or(false)
    }

    /// Case-insensitive substring match on the text, or an exact tag match.
    pub fn matches(&self, keyword: &str) -> bool {
        self.text
            .to_lowercase()
            .contains(&keyword.to_lowercase())
            || self.has_tag(keyword)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags = if self.tags.is_empty() {
            "—".to_string()
        } else {
            self.tags
                .iter()
                .map(|t| format!("#{}", t))
                .collect::<Vec<_>>()
                .join(", ")
        };
        write!(f, "{} | Tags: {}", self.text, tags)
    }
}
