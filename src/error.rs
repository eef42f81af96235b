//! Error types for ocean-notes

use crate::domain::NoteId;
use thiserror::Error;

/// Main error type for the notes application
#[derive(Debug, Error)]
pub enum NotesError {
    #[error("Note not found: {0}")]
    NoteNotFound(NoteId),

    #[error("No note is selected")]
    NoSelection,

    #[error("Invalid note id: {0}")]
    InvalidNoteId(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing argument for '{command}': {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Invalid value for '{command}': {value}")]
    InvalidArgument {
        command: &'static str,
        value: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl NotesError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            NotesError::UnknownCommand(_)
            | NotesError::MissingArgument { .. }
            | NotesError::InvalidArgument { .. } => 2,
            NotesError::InvalidNoteId(_) => 3,
            NotesError::NoteNotFound(_) | NotesError::NoSelection => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            NotesError::NoteNotFound(id) => {
                format!(
                    "Note not found: {}\n\n\
                    Suggestions:\n\
                    • Use 'list' to see the ids of existing notes\n\
                    • The note may have been deleted earlier in this session",
                    id
                )
            }
            NotesError::NoSelection => "No note is selected\n\n\
                Suggestions:\n\
                • Use 'new' to create a note\n\
                • Use 'select <id>' to open an existing note"
                .to_string(),
            NotesError::InvalidNoteId(raw) => {
                format!(
                    "Invalid note id: '{}'\n\n\
                    Note ids are positive numbers as shown by 'list'.\n\
                    Example: select 2",
                    raw
                )
            }
            NotesError::UnknownCommand(cmd) => {
                format!(
                    "Unknown command: '{}'\n\n\
                    Use 'help' to list the available commands",
                    cmd
                )
            }
            NotesError::MissingArgument { command, argument } => {
                format!(
                    "Missing argument for '{}': {}\n\n\
                    Use 'help' to see the usage of each command",
                    command, argument
                )
            }
            NotesError::InvalidArgument { command, value } => {
                format!(
                    "Invalid value for '{}': '{}'\n\n\
                    Example: wait 250",
                    command, value
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using NotesError
pub type Result<T> = std::result::Result<T, NotesError>;
