//! Identity of a clicked tree item.
//!
//! The tree has two levels: notebooks at the top and notes beneath them. A
//! [`Selection`] names one item by value, so the presentation layer can hand
//! it to [`Workspace::delete`](super::workspace::Workspace::delete) or to a
//! form's `begin_edit` without the engine holding any selection state.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Selection {
    Notebook { notebook: String },
    Note { notebook: String, note: String },
}

impl Selection {
    pub fn notebook(notebook: impl Into<String>) -> Self {
        Self::Notebook {
            notebook: notebook.into(),
        }
    }

    pub fn note(notebook: impl Into<String>, note: impl Into<String>) -> Self {
        Self::Note {
            notebook: notebook.into(),
            note: note.into(),
        }
    }
}
