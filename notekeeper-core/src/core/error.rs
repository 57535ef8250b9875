//! Error types for the Notekeeper core library.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur within the Notekeeper core library.
#[derive(Debug, Error)]
pub enum NotekeeperError {
    /// The document file could not be read, written, or created.
    #[error("Storage unavailable at {}: {source}", .path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document file exists but does not parse into the expected shape.
    #[error("Corrupt document at {}: {source}", .path.display())]
    CorruptDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A notebook name was requested that does not exist in the document.
    #[error("Notebook not found: {0}")]
    NotebookNotFound(String),

    /// A note name was requested that does not exist in its notebook.
    #[error("Note not found: {notebook}/{note}")]
    NoteNotFound { notebook: String, note: String },

    /// A create or rename targets a notebook name that is already taken.
    #[error("Notebook already exists: {0}")]
    DuplicateNotebook(String),

    /// A create, rename or move targets a note slot held by a different note.
    #[error("Note already exists: {notebook}/{note}")]
    DuplicateNote { notebook: String, note: String },

    /// A notebook or note name was the empty string.
    #[error("Invalid name: {0:?}")]
    InvalidName(String),

    /// Serialising an intent or document failed outside of storage I/O.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias that pins the error type to [`NotekeeperError`].
pub type Result<T> = std::result::Result<T, NotekeeperError>;

impl NotekeeperError {
    pub(crate) fn note_not_found(notebook: &str, note: &str) -> Self {
        Self::NoteNotFound {
            notebook: notebook.to_string(),
            note: note.to_string(),
        }
    }

    pub(crate) fn duplicate_note(notebook: &str, note: &str) -> Self {
        Self::DuplicateNote {
            notebook: notebook.to_string(),
            note: note.to_string(),
        }
    }

    /// Returns a short, human-readable message suitable for display to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::StorageUnavailable { source, .. } => format!("Could not access the notes file: {source}"),
            Self::CorruptDocument { .. } => "The notes file is damaged and could not be read".to_string(),
            Self::NotebookNotFound(name) => format!("Notebook '{name}' no longer exists"),
            Self::NoteNotFound { notebook, note } => {
                format!("Note '{note}' no longer exists in '{notebook}'")
            }
            Self::DuplicateNotebook(name) => format!("A notebook named '{name}' already exists"),
            Self::DuplicateNote { notebook, note } => {
                format!("Notebook '{notebook}' already has a note named '{note}'")
            }
            Self::InvalidName(_) => "Names cannot be empty".to_string(),
            Self::Json(e) => format!("Data format error: {e}"),
        }
    }
}
