mod cli;
mod render;
mod settings;

use clap::Parser;
use cli::{Cli, Commands, ConfigCommand, DocumentCommand, NoteCommand, NotebookCommand};
use notekeeper_core::{Forms, NoteRef, Operation, Selection, Workspace};
use settings::AppSettings;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = settings::load_settings();
    let stdout = std::io::stdout();
    match run(cli, &settings, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn document_path(cli_file: Option<PathBuf>, settings: &AppSettings) -> PathBuf {
    cli_file.unwrap_or_else(|| PathBuf::from(&settings.document_path))
}

/// Executes one parsed command, writing user-facing output to `out`.
///
/// Core failures are returned as their `user_message()` text.
fn run<W: Write>(cli: Cli, settings: &AppSettings, out: &mut W) -> Result<(), String> {
    match cli.command {
        Commands::Config(cmd) => run_config(cmd, settings, out),
        Commands::Document(cmd) => {
            let path = document_path(cli.file, settings);
            log::debug!("Using document {}", path.display());
            let mut ws = Workspace::open(&path).map_err(|e| e.user_message())?;
            run_document(cmd, &mut ws, out)
        }
    }
}

fn run_document<W: Write>(cmd: DocumentCommand, ws: &mut Workspace, out: &mut W) -> Result<(), String> {
    let mut forms = Forms::new();
    match cmd {
        DocumentCommand::Init => {
            writeln!(out, "Notes document ready at {}", ws.path().display()).map_err(io_err)?;
            let doc = ws.document().map_err(|e| e.user_message())?;
            if !doc.is_empty() {
                writeln!(out, "{} notebooks, {} notes", doc.len(), doc.note_count())
                    .map_err(io_err)?;
            }
        }
        DocumentCommand::Tree { json } => {
            let tree = ws.tree().map_err(|e| e.user_message())?;
            if json {
                let rendered = serde_json::to_string_pretty(&tree)
                    .map_err(|e| format!("Failed to serialize tree: {e}"))?;
                writeln!(out, "{rendered}").map_err(io_err)?;
            } else {
                write!(out, "{}", render::render_tree(&tree)).map_err(io_err)?;
            }
        }
        DocumentCommand::Notebook(cmd) => run_notebook(cmd, ws, &mut forms)?,
        DocumentCommand::Note(cmd) => run_note(cmd, ws, &mut forms, out)?,
        DocumentCommand::Apply { operation } => {
            let op: Operation = serde_json::from_str(&operation)
                .map_err(|e| format!("Invalid operation: {e}"))?;
            ws.apply(&op).map_err(|e| e.user_message())?;
        }
    }
    Ok(())
}

fn run_notebook(cmd: NotebookCommand, ws: &mut Workspace, forms: &mut Forms) -> Result<(), String> {
    let result = match cmd {
        NotebookCommand::Create { name } => {
            forms.notebook.begin_create();
            forms.notebook.submit(ws, &name)
        }
        NotebookCommand::Rename { old_name, new_name } => forms
            .begin_edit(ws, &Selection::notebook(old_name))
            .and_then(|_| forms.notebook.submit(ws, &new_name)),
        NotebookCommand::Delete { name } => ws.delete(&Selection::notebook(name)),
    };
    result.map_err(|e| e.user_message())
}

fn run_note<W: Write>(
    cmd: NoteCommand,
    ws: &mut Workspace,
    forms: &mut Forms,
    out: &mut W,
) -> Result<(), String> {
    let result = match cmd {
        NoteCommand::Create { address, text } => {
            forms.note.begin_create();
            forms
                .note
                .submit(ws, &NoteRef::new(address.notebook, address.name, text))
        }
        NoteCommand::Show { address } => {
            let note = ws
                .note(&address.notebook, &address.name)
                .map_err(|e| e.user_message())?;
            return write!(out, "{}", render::render_note(&note)).map_err(io_err);
        }
        NoteCommand::Edit {
            address,
            to_notebook,
            to_name,
            text,
        } => {
            let selection = Selection::note(address.notebook, address.name);
            let captured = forms
                .begin_edit(ws, &selection)
                .map_err(|e| e.user_message())?;
            match captured.and_then(|current| edited_note(current, to_notebook, to_name, text)) {
                Some(target) => forms.note.submit(ws, &target),
                None => {
                    forms.note.cancel();
                    return writeln!(out, "Nothing to change").map_err(io_err);
                }
            }
        }
        NoteCommand::Delete { address } => {
            ws.delete(&Selection::note(address.notebook, address.name))
        }
    };
    result.map_err(|e| e.user_message())
}

/// Applies the requested changes to `current`, or `None` if nothing was requested.
fn edited_note(
    current: NoteRef,
    to_notebook: Option<String>,
    to_name: Option<String>,
    text: Option<String>,
) -> Option<NoteRef> {
    if to_notebook.is_none() && to_name.is_none() && text.is_none() {
        return None;
    }
    Some(NoteRef {
        notebook: to_notebook.unwrap_or(current.notebook),
        name: to_name.unwrap_or(current.name),
        text: text.unwrap_or(current.text),
    })
}

fn run_config<W: Write>(cmd: ConfigCommand, settings: &AppSettings, out: &mut W) -> Result<(), String> {
    match cmd {
        ConfigCommand::Show => {
            writeln!(out, "settings file: {}", settings::settings_file_path().display())
                .map_err(io_err)?;
            writeln!(out, "document path: {}", settings.document_path).map_err(io_err)?;
        }
        ConfigCommand::SetFile { path } => {
            let updated = AppSettings {
                document_path: path.to_string_lossy().to_string(),
            };
            settings::save_settings(&updated)?;
            log::info!("Document path set to {}", updated.document_path);
        }
    }
    Ok(())
}

fn io_err(e: std::io::Error) -> String {
    format!("Failed to write output: {e}")
}
