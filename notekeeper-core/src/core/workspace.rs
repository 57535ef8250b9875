//! High-level notebook and note operations over a Notekeeper document.

use crate::core::document::{Document, Notebook};
use crate::{Note, NoteRef, NotekeeperError, Operation, Result, Selection, Storage};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One notebook and the names of its notes, as shown in the tree view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeEntry {
    pub notebook: String,
    pub notes: Vec<String>,
}

/// An open Notekeeper document.
///
/// `Workspace` is the only mutator of the notebook hierarchy. It keeps no
/// in-memory copy of the document: every call loads the current document from
/// [`Storage`], validates its preconditions, applies the change and writes the
/// whole document back. A call that fails returns before anything is saved,
/// so the file on disk is left exactly as it was.
///
/// Mutating methods take `&mut self`; the workspace assumes it is the only
/// writer of its file.
pub struct Workspace {
    storage: Storage,
}

impl Workspace {
    /// Opens the document at `path`, creating an empty one if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`NotekeeperError::StorageUnavailable`] if the file or its parent
    /// directory cannot be created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let storage = Storage::open(path)?;
        Ok(Self { storage })
    }

    pub fn path(&self) -> &Path {
        self.storage.path()
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    // ── Reads ─────────────────────────────────────────────────────

    /// Loads the full document.
    pub fn document(&self) -> Result<Document> {
        self.storage.load()
    }

    /// Returns all notebook names in order, e.g. for a notebook picker.
    pub fn notebook_names(&self) -> Result<Vec<String>> {
        Ok(self.storage.load()?.notebook_names())
    }

    /// Returns a copy of the notebook called `notebook`.
    ///
    /// # Errors
    ///
    /// Returns [`NotekeeperError::NotebookNotFound`] if no such notebook exists.
    pub fn notes(&self, notebook: &str) -> Result<Notebook> {
        let mut doc = self.storage.load()?;
        doc.remove_notebook(notebook)
            .ok_or_else(|| NotekeeperError::NotebookNotFound(notebook.to_string()))
    }

    /// Captures the identity and current text of one note.
    ///
    /// The returned [`NoteRef`] is what a caller keeps as the "old" side of a
    /// later [`edit_note`](Self::edit_note).
    ///
    /// # Errors
    ///
    /// Returns [`NotekeeperError::NotebookNotFound`] or
    /// [`NotekeeperError::NoteNotFound`] if the note is absent.
    pub fn note(&self, notebook: &str, name: &str) -> Result<NoteRef> {
        let doc = self.storage.load()?;
        let note = require_notebook(&doc, notebook)?
            .get(name)
            .ok_or_else(|| NotekeeperError::note_not_found(notebook, name))?;
        Ok(NoteRef::new(notebook, name, note.text.clone()))
    }

    /// Returns the two-level outline used to render the tree view.
    pub fn tree(&self) -> Result<Vec<TreeEntry>> {
        let doc = self.storage.load()?;
        Ok(doc
            .notebooks()
            .map(|(name, nb)| TreeEntry {
                notebook: name.to_string(),
                notes: nb.names(),
            })
            .collect())
    }

    // ── Notebooks ─────────────────────────────────────────────────

    /// Adds an empty notebook called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`NotekeeperError::InvalidName`] for an empty name and
    /// [`NotekeeperError::DuplicateNotebook`] if the name is taken.
    pub fn create_notebook(&mut self, name: &str) -> Result<()> {
        validate_name(name)?;
        let mut doc = self.storage.load()?;
        if doc.contains_notebook(name) {
            return Err(NotekeeperError::DuplicateNotebook(name.to_string()));
        }
        doc.insert_notebook(name, Notebook::new());
        self.storage.save(&doc)?;
        log::info!("Created notebook '{name}'");
        Ok(())
    }

    /// Moves the notebook at `old_name` to `new_name`, notes included.
    ///
    /// Renaming a notebook to its current name does nothing and touches
    /// neither the file nor the document.
    ///
    /// # Errors
    ///
    /// Returns [`NotekeeperError::NotebookNotFound`] if `old_name` is absent,
    /// [`NotekeeperError::DuplicateNotebook`] if `new_name` is already used,
    /// and [`NotekeeperError::InvalidName`] if `new_name` is empty.
    pub fn rename_notebook(&mut self, old_name: &str, new_name: &str) -> Result<()> {
        if old_name == new_name {
            return Ok(());
        }
        validate_name(new_name)?;
        let mut doc = self.storage.load()?;
        if !doc.contains_notebook(old_name) {
            return Err(NotekeeperError::NotebookNotFound(old_name.to_string()));
        }
        if doc.contains_notebook(new_name) {
            return Err(NotekeeperError::DuplicateNotebook(new_name.to_string()));
        }
        let notebook = doc
            .remove_notebook(old_name)
            .ok_or_else(|| NotekeeperError::NotebookNotFound(old_name.to_string()))?;
        doc.insert_notebook(new_name, notebook);
        self.storage.save(&doc)?;
        log::info!("Renamed notebook '{old_name}' to '{new_name}'");
        Ok(())
    }

    /// Removes the notebook `name` and every note inside it.
    ///
    /// Returns the number of notes that were discarded with it.
    ///
    /// # Errors
    ///
    /// Returns [`NotekeeperError::NotebookNotFound`] if `name` is absent.
    pub fn delete_notebook(&mut self, name: &str) -> Result<usize> {
        let mut doc = self.storage.load()?;
        let removed = doc
            .remove_notebook(name)
            .ok_or_else(|| NotekeeperError::NotebookNotFound(name.to_string()))?;
        self.storage.save(&doc)?;
        log::info!("Deleted notebook '{name}' ({} notes)", removed.len());
        Ok(removed.len())
    }

    // ── Notes ─────────────────────────────────────────────────────

    /// Adds a note called `name` with body `text` to `notebook`.
    ///
    /// # Errors
    ///
    /// Returns [`NotekeeperError::NotebookNotFound`] if `notebook` is absent,
    /// [`NotekeeperError::DuplicateNote`] if it already holds a note called
    /// `name`, and [`NotekeeperError::InvalidName`] if `name` is empty.
    pub fn create_note(&mut self, notebook: &str, name: &str, text: &str) -> Result<()> {
        validate_name(name)?;
        let mut doc = self.storage.load()?;
        let nb = require_notebook_mut(&mut doc, notebook)?;
        if nb.contains(name) {
            return Err(NotekeeperError::duplicate_note(notebook, name));
        }
        nb.insert(name, Note::new(text));
        self.storage.save(&doc)?;
        log::info!("Created note '{name}' in '{notebook}'");
        Ok(())
    }

    /// Applies an edit of the note captured as `old` so that it becomes `new`.
    ///
    /// When `old` and `new` address the same `(notebook, name)` slot only the
    /// text changes. Otherwise the note is renamed and/or moved: its new text
    /// is inserted at the new slot first and the old slot is removed after, so
    /// the note is never absent from the in-memory document while it moves.
    ///
    /// `old.text` is the text seen when editing began; it is not compared
    /// with the stored text.
    ///
    /// # Errors
    ///
    /// - [`NotekeeperError::NotebookNotFound`] if the source notebook or the
    ///   target notebook does not exist. Target notebooks are never created
    ///   implicitly.
    /// - [`NotekeeperError::NoteNotFound`] if the source note does not exist.
    /// - [`NotekeeperError::DuplicateNote`] if a rename/move targets a slot
    ///   already held by another note.
    /// - [`NotekeeperError::InvalidName`] if `new.name` is empty.
    pub fn edit_note(&mut self, old: &NoteRef, new: &NoteRef) -> Result<()> {
        validate_name(&new.name)?;
        let mut doc = self.storage.load()?;

        if !require_notebook(&doc, &old.notebook)?.contains(&old.name) {
            return Err(NotekeeperError::note_not_found(&old.notebook, &old.name));
        }

        let identity_changed = !old.same_slot(new);
        let target = require_notebook_mut(&mut doc, &new.notebook)?;
        if identity_changed && target.contains(&new.name) {
            return Err(NotekeeperError::duplicate_note(&new.notebook, &new.name));
        }
        target.insert(new.name.as_str(), Note::new(new.text.as_str()));

        if identity_changed {
            if let Some(source) = doc.notebook_mut(&old.notebook) {
                source.remove(&old.name);
            }
        }

        self.storage.save(&doc)?;
        if identity_changed {
            log::info!(
                "Moved note '{}/{}' to '{}/{}'",
                old.notebook, old.name, new.notebook, new.name
            );
        } else {
            log::info!("Updated text of note '{}/{}'", new.notebook, new.name);
        }
        Ok(())
    }

    /// Removes the note `name` from `notebook`.
    ///
    /// # Errors
    ///
    /// Returns [`NotekeeperError::NotebookNotFound`] or
    /// [`NotekeeperError::NoteNotFound`] as appropriate.
    pub fn delete_note(&mut self, notebook: &str, name: &str) -> Result<()> {
        let mut doc = self.storage.load()?;
        require_notebook_mut(&mut doc, notebook)?
            .remove(name)
            .ok_or_else(|| NotekeeperError::note_not_found(notebook, name))?;
        self.storage.save(&doc)?;
        log::info!("Deleted note '{name}' from '{notebook}'");
        Ok(())
    }

    // ── Dispatch ──────────────────────────────────────────────────

    /// Deletes whatever tree item `selection` points at.
    pub fn delete(&mut self, selection: &Selection) -> Result<()> {
        match selection {
            Selection::Notebook { notebook } => self.delete_notebook(notebook).map(|_| ()),
            Selection::Note { notebook, note } => self.delete_note(notebook, note),
        }
    }

    /// Executes a structured [`Operation`] from the presentation layer.
    pub fn apply(&mut self, op: &Operation) -> Result<()> {
        log::debug!("Applying {}", op.kind());
        match op {
            Operation::CreateNotebook { name } => self.create_notebook(name),
            Operation::RenameNotebook { old_name, new_name } => {
                self.rename_notebook(old_name, new_name)
            }
            Operation::DeleteNotebook { name } => self.delete_notebook(name).map(|_| ()),
            Operation::CreateNote { notebook, name, text } => {
                self.create_note(notebook, name, text)
            }
            Operation::EditNote { old, new } => self.edit_note(old, new),
            Operation::DeleteNote { notebook, name } => self.delete_note(notebook, name),
        }
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(NotekeeperError::InvalidName(name.to_string()));
    }
    Ok(())
}

fn require_notebook<'a>(doc: &'a Document, name: &str) -> Result<&'a Notebook> {
    doc.notebook(name)
        .ok_or_else(|| NotekeeperError::NotebookNotFound(name.to_string()))
}

fn require_notebook_mut<'a>(doc: &'a mut Document, name: &str) -> Result<&'a mut Notebook> {
    doc.notebook_mut(name)
        .ok_or_else(|| NotekeeperError::NotebookNotFound(name.to_string()))
}
