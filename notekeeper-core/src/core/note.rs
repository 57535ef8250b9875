use serde::{Deserialize, Serialize};

/// A single note body as stored in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Note {
    pub text: String,
}

impl Note {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A note's full identity plus its text: `(notebook, name, text)`.
///
/// Used both as the identity captured when an edit begins and as the
/// target of that edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRef {
    pub notebook: String,
    pub name: String,
    pub text: String,
}

impl NoteRef {
    pub fn new(
        notebook: impl Into<String>,
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            notebook: notebook.into(),
            name: name.into(),
            text: text.into(),
        }
    }

    /// Returns `true` when both refs address the same `(notebook, name)` slot.
    /// Text is ignored.
    #[must_use]
    pub fn same_slot(&self, other: &NoteRef) -> bool {
        self.notebook == other.notebook && self.name == other.name
    }
}
