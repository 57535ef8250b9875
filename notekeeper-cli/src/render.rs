//! Plain-text rendering of the notebook tree and single notes.

use notekeeper_core::{NoteRef, TreeEntry};

/// Renders the two-level tree, one notebook per block:
///
/// ```text
/// Work
/// ├── ideas
/// └── todo
/// ```
pub fn render_tree(entries: &[TreeEntry]) -> String {
    if entries.is_empty() {
        return "(no notebooks)\n".to_string();
    }
    let mut out = String::new();
    for entry in entries {
        out.push_str(&entry.notebook);
        out.push('\n');
        let last = entry.notes.len().saturating_sub(1);
        for (i, note) in entry.notes.iter().enumerate() {
            let branch = if i == last { "└── " } else { "├── " };
            out.push_str(branch);
            out.push_str(note);
            out.push('\n');
        }
    }
    out
}

pub fn render_note(note: &NoteRef) -> String {
    let mut out = format!("{} / {}\n\n{}", note.notebook, note.name, note.text);
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}
