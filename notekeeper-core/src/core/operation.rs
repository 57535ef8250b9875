//! Structured edit requests accepted by the [`Workspace`](super::workspace::Workspace).

use crate::NoteRef;
use serde::{Deserialize, Serialize};

/// A single mutation request from the presentation layer.
///
/// Serialized with an internal `type` tag so a front end can send, for example,
/// `{"type": "RenameNotebook", "old_name": "Work", "new_name": "Job"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Operation {
    /// Add an empty notebook.
    CreateNotebook {
        name: String,
    },
    /// Re-key a notebook, carrying all of its notes along.
    RenameNotebook {
        old_name: String,
        new_name: String,
    },
    /// Remove a notebook and every note in it.
    DeleteNotebook {
        name: String,
    },
    /// Add a note to an existing notebook.
    CreateNote {
        notebook: String,
        name: String,
        text: String,
    },
    /// Update, rename or move a note.
    EditNote {
        /// Identity captured when editing began.
        old: NoteRef,
        /// Requested identity and text.
        new: NoteRef,
    },
    /// Remove a single note.
    DeleteNote {
        notebook: String,
        name: String,
    },
}

impl Operation {
    /// Returns the variant name, used for log lines.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CreateNotebook { .. } => "CreateNotebook",
            Self::RenameNotebook { .. } => "RenameNotebook",
            Self::DeleteNotebook { .. } => "DeleteNotebook",
            Self::CreateNote { .. } => "CreateNote",
            Self::EditNote { .. } => "EditNote",
            Self::DeleteNote { .. } => "DeleteNote",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_serialization() {
        let op = Operation::EditNote {
            old: NoteRef::new("Work", "todo", "buy milk"),
            new: NoteRef::new("Personal", "todo", "buy milk and eggs"),
        };

        let json = serde_json::to_string(&op).unwrap();
        assert!(json.contains(r#""type":"EditNote""#));

        let deserialized: Operation = serde_json::from_str(&json).unwrap();
        assert_eq!(op, deserialized);
    }

    #[test]
    fn test_operation_parses_hand_written_request() {
        let op: Operation = serde_json::from_str(
            r#"{"type": "RenameNotebook", "old_name": "Work", "new_name": "Job"}"#,
        )
        .unwrap();
        assert_eq!(
            op,
            Operation::RenameNotebook {
                old_name: "Work".to_string(),
                new_name: "Job".to_string(),
            }
        );
        assert_eq!(op.kind(), "RenameNotebook");
    }

    #[test]
    fn test_unknown_operation_type_is_rejected() {
        let result: std::result::Result<Operation, _> =
            serde_json::from_str(r#"{"type": "MergeNotebooks"}"#);
        assert!(result.is_err());
    }
}
