//! Command tree for the `notekeeper` binary.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "notekeeper",
    version,
    about = "Organise notes into notebooks stored in one JSON file",
    infer_subcommands = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Notes document to use instead of the one in settings.
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Log more (repeat for debug output). `RUST_LOG` takes precedence.
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Document(DocumentCommand),

    /// Inspect or change settings.
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Commands that read or change the notes document.
#[derive(Subcommand, Debug)]
pub enum DocumentCommand {
    /// Create an empty notes document if none exists.
    Init,

    /// Show all notebooks and their notes.
    #[command(alias = "ls")]
    Tree {
        /// Print the outline as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Create, rename or delete notebooks.
    #[command(subcommand)]
    Notebook(NotebookCommand),

    /// Create, show, edit or delete notes.
    #[command(subcommand)]
    Note(NoteCommand),

    /// Apply one operation given as JSON, e.g. '{"type":"CreateNotebook","name":"Work"}'.
    Apply {
        #[arg(value_name = "JSON")]
        operation: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum NotebookCommand {
    /// Add an empty notebook.
    Create { name: String },
    /// Rename a notebook; its notes move with it.
    Rename { old_name: String, new_name: String },
    /// Delete a notebook and all of its notes.
    #[command(alias = "rm")]
    Delete { name: String },
}

#[derive(Args, Debug)]
pub struct NoteAddress {
    /// Notebook holding the note.
    pub notebook: String,
    /// Name of the note.
    pub name: String,
}

#[derive(Subcommand, Debug)]
pub enum NoteCommand {
    /// Add a note to an existing notebook.
    Create {
        #[command(flatten)]
        address: NoteAddress,
        /// Note body.
        #[arg(long, default_value = "")]
        text: String,
    },
    /// Print one note.
    Show {
        #[command(flatten)]
        address: NoteAddress,
    },
    /// Change a note's text, name or notebook. Unset options keep current values.
    Edit {
        #[command(flatten)]
        address: NoteAddress,
        /// Move the note into this (existing) notebook.
        #[arg(long, value_name = "NOTEBOOK")]
        to_notebook: Option<String>,
        /// Rename the note.
        #[arg(long, value_name = "NAME")]
        to_name: Option<String>,
        /// Replace the note body.
        #[arg(long)]
        text: Option<String>,
    },
    /// Delete a note.
    #[command(alias = "rm")]
    Delete {
        #[command(flatten)]
        address: NoteAddress,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the settings file location and current values.
    Show,
    /// Remember a notes document path for future runs.
    SetFile { path: PathBuf },
}
