//! # Contact Fields
//!
//! Each piece of contact data is a small value type that owns its own validation.
//! A value that exists has passed validation: constructors are the only way in,
//! and deserialization goes through the same constructors (`try_from = "String"`),
//! so a stored snapshot cannot smuggle in a malformed phone or email either.
//!
//! | Type | Accepted input |
//! |------|----------------|
//! | [`Name`] | any non-blank string |
//! | [`Phone`] | exactly 10 ASCII digits |
//! | [`Birthday`] | `DD.MM.YYYY` (a real calendar date) |
//! | [`Email`] | `local@domain.tld`, see [`validate_email`] |
//!
//! Birthdays are held as a [`NaiveDate`] and only turned back into text at the
//! edges: [`format_birthday`] for display, ISO-8601 for storage.

use crate::error::{AssistantError, Result};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";
const STORED_BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\w.-]+@[\w.-]+\.\w{2,}$").expect("email pattern is a valid regex")
});

/// True iff `s` is exactly 10 ASCII digits.
pub fn validate_phone(s: &str) -> bool {
    s.len() == 10 && s.bytes().all(|b| b.is_ascii_digit())
}

/// True iff `s` looks like `local@domain.tld`.
///
/// Local part and domain are word characters, dots and hyphens; the final
/// label needs at least two word characters.
///
/// ```
/// use assistant::fields::validate_email;
///
/// assert!(validate_email("ivan.serduk@mail.com.ua"));
/// assert!(!validate_email("ivan@mail.c"));
/// assert!(!validate_email("ivan at mail.com"));
/// ```
pub fn validate_email(s: &str) -> bool {
    EMAIL_PATTERN.is_match(s)
}

/// Parses a strict `DD.MM.YYYY` date.
///
/// Only the two-digit day, two-digit month, four-digit year shape is accepted;
/// `1.1.2000` and `2000-01-01` are both rejected.
pub fn parse_birthday(s: &str) -> Result<NaiveDate> {
    let invalid = || AssistantError::Validation("Invalid date format. Use DD.MM.YYYY".to_string());

    let bytes = s.as_bytes();
    let shaped = bytes.len() == 10
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| if i == 2 || i == 5 { *b == b'.' } else { b.is_ascii_digit() });
    if !shaped {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(s, BIRTHDAY_FORMAT).map_err(|_| invalid())
}

/// Renders a date as `DD.MM.YYYY`.
pub fn format_birthday(date: NaiveDate) -> String {
    date.format(BIRTHDAY_FORMAT).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AssistantError::Validation("Invalid name.".to_string()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if !validate_phone(&value) {
            return Err(phone_error());
        }
        Ok(Self(value))
    }

    /// Replaces the number in place. On a malformed `number` the old value is kept.
    pub fn update(&mut self, number: &str) -> Result<()> {
        if !validate_phone(number) {
            return Err(phone_error());
        }
        self.0 = number.to_string();
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn phone_error() -> AssistantError {
    AssistantError::Validation("Phone number must contain exactly 10 digits.".to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parses user input (`DD.MM.YYYY` only).
    pub fn parse(value: &str) -> Result<Self> {
        parse_birthday(value).map(Self)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_birthday(self.0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if !validate_email(&value) {
            return Err(email_error(&value));
        }
        Ok(Self(value))
    }

    pub fn update(&mut self, value: &str) -> Result<()> {
        if !validate_email(value) {
            return Err(email_error(value));
        }
        self.0 = value.to_string();
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn email_error(value: &str) -> AssistantError {
    AssistantError::Validation(format!("Invalid email format: {}", value))
}

macro_rules! string_field_conversions {
    ($($ty:ident),*) => {$(
        impl TryFrom<String> for $ty {
            type Error = AssistantError;

            fn try_from(value: String) -> Result<Self> {
                Self::new(value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> String {
                value.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    )*};
}

string_field_conversions!(Name, Phone, Email);

// Snapshots hold ISO dates; older ones may still carry DD.MM.YYYY.
impl TryFrom<String> for Birthday {
    type Error = AssistantError;

    fn try_from(value: String) -> Result<Self> {
        NaiveDate::parse_from_str(&value, STORED_BIRTHDAY_FORMAT)
            .map(Self)
            .or_else(|_| Self::parse(&value))
    }
}

impl From<Birthday> for String {
    fn from(value: Birthday) -> String {
        value.0.format(STORED_BIRTHDAY_FORMAT).to_string()
    }
}
