//! Core library for Notekeeper, a notebook/note organizer backed by one JSON file.
//!
//! The primary entry point is [`Workspace`], which represents an open notes
//! document. All mutations of the notebook hierarchy go through `Workspace`
//! methods; each one reloads the document, validates, and saves it whole.
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use core::{
    document::{Document, Notebook},
    error::{NotekeeperError, Result},
    form::{FormMode, Forms, NoteForm, NotebookForm},
    note::{Note, NoteRef},
    operation::Operation,
    selection::Selection,
    storage::Storage,
    workspace::{TreeEntry, Workspace},
};
