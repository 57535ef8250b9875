//! Caller-owned edit forms for notebooks and notes.
//!
//! A front end typically shows one form for notebooks and one for notes. Each
//! form is either idle, creating a new item, or editing an existing one; in
//! the editing case it remembers the identity captured when editing began.
//! Submitting a form applies the matching [`Workspace`] operation and returns
//! the form to [`FormMode::Idle`], whether or not the operation succeeded.
//!
//! The forms belong to the caller. [`Workspace`] never stores selection or
//! form state.

use crate::{NoteRef, NotekeeperError, Result, Selection, Workspace};

/// Current mode of a form. `T` is the identity captured when editing begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode<T> {
    Idle,
    Creating,
    Editing(T),
}

impl<T> Default for FormMode<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> FormMode<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Create-or-rename form for notebooks. Editing captures the original name.
#[derive(Debug, Default)]
pub struct NotebookForm {
    mode: FormMode<String>,
}

impl NotebookForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &FormMode<String> {
        &self.mode
    }

    pub fn begin_create(&mut self) {
        self.mode = FormMode::Creating;
    }

    /// Switches to editing `notebook`, which must currently exist.
    pub fn begin_edit(&mut self, ws: &Workspace, notebook: &str) -> Result<()> {
        if !ws.document()?.contains_notebook(notebook) {
            return Err(NotekeeperError::NotebookNotFound(notebook.to_string()));
        }
        self.mode = FormMode::Editing(notebook.to_string());
        Ok(())
    }

    /// Drops any captured identity without touching the workspace.
    pub fn cancel(&mut self) {
        self.mode = FormMode::Idle;
    }

    /// Creates a notebook called `name`, or renames the captured notebook to
    /// `name`. An idle form submits as a create.
    pub fn submit(&mut self, ws: &mut Workspace, name: &str) -> Result<()> {
        match std::mem::take(&mut self.mode) {
            FormMode::Idle | FormMode::Creating => ws.create_notebook(name),
            FormMode::Editing(original) => ws.rename_notebook(&original, name),
        }
    }
}

/// Create-or-edit form for notes. Editing captures the note's [`NoteRef`].
#[derive(Debug, Default)]
pub struct NoteForm {
    mode: FormMode<NoteRef>,
}

impl NoteForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &FormMode<NoteRef> {
        &self.mode
    }

    pub fn begin_create(&mut self) {
        self.mode = FormMode::Creating;
    }

    /// Switches to editing the note at `(notebook, name)` and returns the
    /// captured identity and text so the caller can pre-fill its inputs.
    pub fn begin_edit(&mut self, ws: &Workspace, notebook: &str, name: &str) -> Result<NoteRef> {
        let captured = ws.note(notebook, name)?;
        self.mode = FormMode::Editing(captured.clone());
        Ok(captured)
    }

    pub fn cancel(&mut self) {
        self.mode = FormMode::Idle;
    }

    /// Creates `input` as a new note, or applies it as the new side of an
    /// edit of the captured note. An idle form submits as a create.
    pub fn submit(&mut self, ws: &mut Workspace, input: &NoteRef) -> Result<()> {
        match std::mem::take(&mut self.mode) {
            FormMode::Idle | FormMode::Creating => {
                ws.create_note(&input.notebook, &input.name, &input.text)
            }
            FormMode::Editing(old) => ws.edit_note(&old, input),
        }
    }
}

/// The pair of forms a two-pane front end keeps side by side.
#[derive(Debug, Default)]
pub struct Forms {
    pub notebook: NotebookForm,
    pub note: NoteForm,
}

impl Forms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes an "Edit" action on a tree item to the matching form.
    ///
    /// Returns the captured note when a note was selected.
    pub fn begin_edit(&mut self, ws: &Workspace, selection: &Selection) -> Result<Option<NoteRef>> {
        match selection {
            Selection::Notebook { notebook } => {
                self.notebook.begin_edit(ws, notebook)?;
                Ok(None)
            }
            Selection::Note { notebook, note } => {
                self.note.begin_edit(ws, notebook, note).map(Some)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_temp() -> (TempDir, Workspace) {
        let dir = TempDir::new().unwrap();
        let ws = Workspace::open(dir.path().join("notebooks.json")).unwrap();
        (dir, ws)
    }

    #[test]
    fn test_notebook_form_create_returns_to_idle() {
        let (_dir, mut ws) = open_temp();
        let mut form = NotebookForm::new();
        assert!(form.mode().is_idle());

        form.begin_create();
        assert_eq!(form.mode(), &FormMode::Creating);
        form.submit(&mut ws, "Work").unwrap();

        assert!(form.mode().is_idle());
        assert_eq!(ws.notebook_names().unwrap(), vec!["Work"]);
    }

    #[test]
    fn test_idle_notebook_form_submits_as_create() {
        let (_dir, mut ws) = open_temp();
        let mut form = NotebookForm::new();
        form.submit(&mut ws, "Work").unwrap();
        assert_eq!(ws.notebook_names().unwrap(), vec!["Work"]);
    }

    #[test]
    fn test_notebook_form_edit_renames_captured_notebook() {
        let (_dir, mut ws) = open_temp();
        ws.create_notebook("Work").unwrap();
        ws.create_note("Work", "todo", "t").unwrap();

        let mut form = NotebookForm::new();
        form.begin_edit(&ws, "Work").unwrap();
        assert_eq!(form.mode(), &FormMode::Editing("Work".to_string()));
        form.submit(&mut ws, "Job").unwrap();

        assert!(form.mode().is_idle());
        assert_eq!(ws.note("Job", "todo").unwrap().text, "t");
    }

    #[test]
    fn test_notebook_form_begin_edit_missing() {
        let (_dir, ws) = open_temp();
        let mut form = NotebookForm::new();
        assert!(matches!(
            form.begin_edit(&ws, "Ghost"),
            Err(NotekeeperError::NotebookNotFound(_))
        ));
        assert!(form.mode().is_idle());
    }

    #[test]
    fn test_notebook_form_returns_to_idle_after_failure() {
        let (_dir, mut ws) = open_temp();
        ws.create_notebook("A").unwrap();
        ws.create_notebook("B").unwrap();

        let mut form = NotebookForm::new();
        form.begin_edit(&ws, "A").unwrap();
        let result = form.submit(&mut ws, "B");

        assert!(matches!(result, Err(NotekeeperError::DuplicateNotebook(_))));
        assert!(form.mode().is_idle());
    }

    #[test]
    fn test_note_form_edit_moves_note() {
        let (_dir, mut ws) = open_temp();
        ws.create_notebook("Work").unwrap();
        ws.create_notebook("Personal").unwrap();
        ws.create_note("Work", "todo", "buy milk").unwrap();

        let mut form = NoteForm::new();
        let captured = form.begin_edit(&ws, "Work", "todo").unwrap();
        assert_eq!(captured, NoteRef::new("Work", "todo", "buy milk"));

        form.submit(&mut ws, &NoteRef::new("Personal", "todo", "buy milk and eggs"))
            .unwrap();

        assert!(form.mode().is_idle());
        assert!(ws.notes("Work").unwrap().is_empty());
        assert_eq!(ws.note("Personal", "todo").unwrap().text, "buy milk and eggs");
    }

    #[test]
    fn test_note_form_create() {
        let (_dir, mut ws) = open_temp();
        ws.create_notebook("Work").unwrap();

        let mut form = NoteForm::new();
        form.begin_create();
        form.submit(&mut ws, &NoteRef::new("Work", "todo", "t")).unwrap();

        assert!(form.mode().is_idle());
        assert_eq!(ws.note("Work", "todo").unwrap().text, "t");
    }

    #[test]
    fn test_note_form_returns_to_idle_after_failure() {
        let (_dir, mut ws) = open_temp();
        ws.create_notebook("Work").unwrap();
        ws.create_note("Work", "todo", "t").unwrap();

        let mut form = NoteForm::new();
        form.begin_edit(&ws, "Work", "todo").unwrap();
        let result = form.submit(&mut ws, &NoteRef::new("Nowhere", "todo", "t"));

        assert!(matches!(result, Err(NotekeeperError::NotebookNotFound(_))));
        assert!(form.mode().is_idle());
        assert_eq!(ws.note("Work", "todo").unwrap().text, "t");
    }

    #[test]
    fn test_forms_route_selection() {
        let (_dir, mut ws) = open_temp();
        ws.create_notebook("Work").unwrap();
        ws.create_note("Work", "todo", "t").unwrap();
        let mut forms = Forms::new();

        let captured = forms.begin_edit(&ws, &Selection::notebook("Work")).unwrap();
        assert!(captured.is_none());
        assert!(matches!(forms.notebook.mode(), FormMode::Editing(n) if n == "Work"));
        assert!(forms.note.mode().is_idle());

        let captured = forms.begin_edit(&ws, &Selection::note("Work", "todo")).unwrap();
        assert_eq!(captured, Some(NoteRef::new("Work", "todo", "t")));
        assert!(matches!(forms.note.mode(), FormMode::Editing(_)));
    }

    #[test]
    fn test_cancel_leaves_workspace_untouched() {
        let (dir, mut ws) = open_temp();
        ws.create_notebook("Work").unwrap();
        ws.create_note("Work", "todo", "t").unwrap();
        let before = std::fs::read(dir.path().join("notebooks.json")).unwrap();

        let mut forms = Forms::new();
        forms.begin_edit(&ws, &Selection::notebook("Work")).unwrap();
        forms.begin_edit(&ws, &Selection::note("Work", "todo")).unwrap();
        forms.notebook.cancel();
        forms.note.cancel();

        assert!(forms.notebook.mode().is_idle());
        assert!(forms.note.mode().is_idle());
        assert_eq!(std::fs::read(dir.path().join("notebooks.json")).unwrap(), before);

        // A cancelled edit no longer renames; the next submit creates.
        forms.notebook.submit(&mut ws, "Job").unwrap();
        assert_eq!(ws.notebook_names().unwrap(), vec!["Job", "Work"]);
    }
}
