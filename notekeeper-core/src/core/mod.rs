//! Internal domain modules for the Notekeeper core library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod document;
pub mod error;
pub mod form;
pub mod note;
pub mod operation;
pub mod selection;
pub mod storage;
pub mod workspace;

#[doc(inline)]
pub use document::{Document, Notebook};
#[doc(inline)]
pub use error::{NotekeeperError, Result};
#[doc(inline)]
pub use form::{FormMode, Forms, NoteForm, NotebookForm};
#[doc(inline)]
pub use note::{Note, NoteRef};
#[doc(inline)]
pub use operation::Operation;
#[doc(inline)]
pub use selection::Selection;
#[doc(inline)]
pub use storage::Storage;
#[doc(inline)]
pub use workspace::{TreeEntry, Workspace};
