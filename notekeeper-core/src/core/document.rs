//! In-memory model of the persisted notes document.
//!
//! The on-disk shape is
//!
//! ```json
//! {
//!     "Notebooks": {
//!         "Work": {
//!             "todo": { "text": "buy milk" }
//!         }
//!     }
//! }
//! ```
//!
//! Both levels are keyed maps, so notebook names are unique across the
//! document and note names are unique within their notebook by construction.
//! Keys are kept in sorted order, not insertion order. A new or renamed
//! notebook takes its alphabetical place instead of going last, and a file
//! written in some other key order is rewritten sorted on the next save.
//! Order carries no meaning in the format.

use crate::core::note::Note;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The whole persisted state: notebook name to [`Notebook`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Document {
    #[serde(rename = "Notebooks")]
    notebooks: BTreeMap<String, Notebook>,
}

impl Document {
    /// Returns the empty skeleton written on first run.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notebook(&self, name: &str) -> Option<&Notebook> {
        self.notebooks.get(name)
    }

    pub fn notebook_mut(&mut self, name: &str) -> Option<&mut Notebook> {
        self.notebooks.get_mut(name)
    }

    pub fn contains_notebook(&self, name: &str) -> bool {
        self.notebooks.contains_key(name)
    }

    /// Inserts `notebook` under `name`, returning the value it replaced.
    pub fn insert_notebook(&mut self, name: impl Into<String>, notebook: Notebook) -> Option<Notebook> {
        self.notebooks.insert(name.into(), notebook)
    }

    pub fn remove_notebook(&mut self, name: &str) -> Option<Notebook> {
        self.notebooks.remove(name)
    }

    /// Looks up a single note by its `(notebook, name)` identity.
    pub fn note(&self, notebook: &str, name: &str) -> Option<&Note> {
        self.notebooks.get(notebook).and_then(|nb| nb.get(name))
    }

    /// Iterates notebooks in name order.
    pub fn notebooks(&self) -> impl Iterator<Item = (&str, &Notebook)> {
        self.notebooks.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn notebook_names(&self) -> Vec<String> {
        self.notebooks.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.notebooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notebooks.is_empty()
    }

    /// Total number of notes across all notebooks.
    pub fn note_count(&self) -> usize {
        self.notebooks.values().map(Notebook::len).sum()
    }
}

/// A named collection of notes. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Notebook {
    notes: BTreeMap<String, Note>,
}

impl Notebook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Note> {
        self.notes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.notes.contains_key(name)
    }

    /// Inserts `note` under `name`, returning the note it replaced.
    pub fn insert(&mut self, name: impl Into<String>, note: Note) -> Option<Note> {
        self.notes.insert(name.into(), note)
    }

    pub fn remove(&mut self, name: &str) -> Option<Note> {
        self.notes.remove(name)
    }

    pub fn names(&self) -> Vec<String> {
        self.notes.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Note)> for Notebook {
    fn from_iter<I: IntoIterator<Item = (K, Note)>>(iter: I) -> Self {
        Self {
            notes: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
