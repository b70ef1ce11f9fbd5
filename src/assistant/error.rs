use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    State(String),

    #[error("Contact not found.")]
    ContactNotFound(String),

    #[error("Note {0} not found.")]
    NoteNotFound(u32),

    #[error("No upcoming birthdays in the next {0} days.")]
    NoUpcomingBirthdays(u32),

    #[error("Enter the command followed by necessary arguments.")]
    Usage,

    #[error("Invalid command.")]
    UnknownCommand(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AssistantError {
    /// Errors a session can report and carry on from. Anything else ends it.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AssistantError::Io(_) | AssistantError::Serialization(_))
    }
}

pub type Result<T> = std::result::Result<T, AssistantError>;
