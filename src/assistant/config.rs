use crate::book::DEFAULT_BIRTHDAY_WINDOW;
use crate::error::{AssistantError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CONTACTS_FILE: &str = "addressbook.json";
const DEFAULT_NOTES_FILE: &str = "notes.json";

/// Configuration for the assistant, stored in `<data dir>/config.json`.
///
/// Every key is optional in the file; missing keys take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssistantConfig {
    /// Default look-ahead for `birthdays` when no day count is given
    #[serde(default = "default_birthday_window")]
    pub birthday_window_days: u32,

    /// File name of the contacts snapshot
    #[serde(default = "default_contacts_file")]
    pub contacts_file: String,

    /// File name of the notes snapshot
    #[serde(default = "default_notes_file")]
    pub notes_file: String,
}

fn default_birthday_window() -> u32 {
    DEFAULT_BIRTHDAY_WINDOW
}

fn default_contacts_file() -> String {
    DEFAULT_CONTACTS_FILE.to_string()
}

fn default_notes_file() -> String {
    DEFAULT_NOTES_FILE.to_string()
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            birthday_window_days: default_birthday_window(),
            contacts_file: default_contacts_file(),
            notes_file: default_notes_file(),
        }
    }
}

impl AssistantConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AssistantError::Io)?;
        let config: AssistantConfig =
            serde_json::from_str(&content).map_err(AssistantError::Serialization)?;
        Ok(config)
    }
}
