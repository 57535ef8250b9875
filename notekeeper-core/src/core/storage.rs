//! Durable load/save of the whole [`Document`] as a single JSON file.

use crate::core::document::Document;
use crate::{NotekeeperError, Result};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Binds storage to `path` without touching the filesystem.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Binds storage to `path` and makes sure a valid document exists there.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let storage = Self::new(path);
        storage.ensure_initialized()?;
        Ok(storage)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes an empty `{"Notebooks": {}}` skeleton if no document exists yet.
    /// Existing documents are left untouched.
    pub fn ensure_initialized(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.unavailable(e))?;
        }
        log::info!("Initialising empty document at {}", self.path.display());
        self.save(&Document::new())
    }

    pub fn load(&self) -> Result<Document> {
        let content = fs::read_to_string(&self.path).map_err(|e| self.unavailable(e))?;
        serde_json::from_str(&content).map_err(|source| NotekeeperError::CorruptDocument {
            path: self.path.clone(),
            source,
        })
    }

    /// Replaces the stored document with `doc`.
    ///
    /// The JSON is written to a temporary file next to the target and then
    /// renamed over it, so readers see either the old or the new document.
    /// A symlinked path is resolved first so the link itself survives, and
    /// the new file takes over the permissions of the one it replaces.
    pub fn save(&self, doc: &Document) -> Result<()> {
        let bytes = to_pretty_json(doc)?;
        let target = fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone());
        let dir = match target.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut temp = NamedTempFile::new_in(dir).map_err(|e| self.unavailable(e))?;
        temp.write_all(&bytes).map_err(|e| self.unavailable(e))?;
        if let Ok(existing) = fs::metadata(&target) {
            temp.as_file()
                .set_permissions(existing.permissions())
                .map_err(|e| self.unavailable(e))?;
        }
        temp.as_file().sync_all().map_err(|e| self.unavailable(e))?;
        temp.persist(&target).map_err(|e| self.unavailable(e.error))?;
        log::debug!(
            "Saved {} notebooks ({} notes) to {}",
            doc.len(),
            doc.note_count(),
            target.display()
        );
        Ok(())
    }

    fn unavailable(&self, source: std::io::Error) -> NotekeeperError {
        NotekeeperError::StorageUnavailable {
            path: self.path.clone(),
            source,
        }
    }
}

/// Serialises with four-space indentation and a trailing newline.
fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::document::Notebook;
    use crate::Note;
    use tempfile::TempDir;

    #[test]
    fn test_open_writes_empty_skeleton() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notebooks.json");

        let storage = Storage::open(&path).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw, serde_json::json!({ "Notebooks": {} }));
        assert_eq!(storage.load().unwrap(), Document::new());
    }

    #[test]
    fn test_ensure_initialized_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notebooks.json");
        let storage = Storage::open(&path).unwrap();

        let mut doc = Document::new();
        doc.insert_notebook("Work", Notebook::new());
        storage.save(&doc).unwrap();

        storage.ensure_initialized().unwrap();
        assert_eq!(storage.load().unwrap(), doc);
    }

    #[test]
    fn test_open_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("notebooks.json");

        Storage::open(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::open(dir.path().join("notebooks.json")).unwrap();

        let mut doc = Document::new();
        doc.insert_notebook("Empty", Notebook::new());
        doc.insert_notebook(
            "Work",
            [("todo", Note::new("buy milk")), ("ideas", Note::new("line 1\nline 2"))]
                .into_iter()
                .collect(),
        );
        storage.save(&doc).unwrap();

        assert_eq!(storage.load().unwrap(), doc);
    }

    #[test]
    fn test_save_of_load_leaves_content_unchanged() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::open(dir.path().join("notebooks.json")).unwrap();
        let mut doc = Document::new();
        doc.insert_notebook("B", [("x", Note::new("1"))].into_iter().collect());
        doc.insert_notebook("A", Notebook::new());
        storage.save(&doc).unwrap();

        let before = fs::read(storage.path()).unwrap();
        storage.save(&storage.load().unwrap()).unwrap();
        let after = fs::read(storage.path()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_load_corrupt_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notebooks.json");
        fs::write(&path, "not json at all").unwrap();

        let storage = Storage::open(&path).unwrap();
        assert!(matches!(
            storage.load(),
            Err(NotekeeperError::CorruptDocument { .. })
        ));
    }

    #[test]
    fn test_load_wrong_shape_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notebooks.json");
        fs::write(&path, r#"{"Notebooks": {"Work": {"todo": "bare string"}}}"#).unwrap();

        let storage = Storage::new(&path);
        assert!(matches!(
            storage.load(),
            Err(NotekeeperError::CorruptDocument { .. })
        ));
    }

    #[test]
    fn test_load_missing_file_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("absent.json"));
        assert!(matches!(
            storage.load(),
            Err(NotekeeperError::StorageUnavailable { .. })
        ));
    }

    #[test]
    fn test_save_into_unwritable_location_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "plain file").unwrap();
        let path = blocker.join("notebooks.json");

        let storage = Storage::new(&path);
        assert!(matches!(
            storage.save(&Document::new()),
            Err(NotekeeperError::StorageUnavailable { .. })
        ));
        assert!(!path.exists());
        assert_eq!(fs::read_to_string(&blocker).unwrap(), "plain file");
    }

    #[cfg(unix)]
    #[test]
    fn test_save_keeps_file_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let storage = Storage::open(dir.path().join("notebooks.json")).unwrap();
        fs::set_permissions(storage.path(), fs::Permissions::from_mode(0o644)).unwrap();

        storage.save(&Document::new()).unwrap();

        let mode = fs::metadata(storage.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn test_save_through_symlink_updates_link_target() {
        let dir = TempDir::new().unwrap();
        let real = dir.path().join("real.json");
        let link = dir.path().join("notebooks.json");
        Storage::open(&real).unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let storage = Storage::open(&link).unwrap();
        let mut doc = Document::new();
        doc.insert_notebook("Work", Notebook::new());
        storage.save(&doc).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(Storage::new(&real).load().unwrap(), doc);
    }

    #[test]
    fn test_saved_file_uses_four_space_indent() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::open(dir.path().join("notebooks.json")).unwrap();
        let mut doc = Document::new();
        doc.insert_notebook("Work", Notebook::new());
        storage.save(&doc).unwrap();

        let raw = fs::read_to_string(storage.path()).unwrap();
        assert!(raw.contains("\n    \"Notebooks\""));
        assert!(raw.ends_with('\n'));
    }
}
