use super::{DocFiles, DocumentStore};
use crate::error::{Result, TasklogError};
use crate::model::DocId;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// Markdown files in a workspace directory.
pub struct FsStore {
    root: PathBuf,
    files: DocFiles,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: DocFiles::default(),
        }
    }

    pub fn with_files(mut self, files: DocFiles) -> Self {
        self.files = files;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(TasklogError::Io)?;
        }
        Ok(())
    }
}

impl DocumentStore for FsStore {
    fn read(&self, doc: DocId) -> Result<String> {
        let path = self.path(doc);
        debug!(doc = %doc, path = %path.display(), "reading document");
        match fs::read_to_string(&path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(TasklogError::DocumentNotFound(doc)),
            Err(e) => Err(TasklogError::Io(e)),
        }
    }

    fn write(&self, doc: DocId, text: &str) -> Result<()> {
        self.ensure_dir()?;
        let target = self.path(doc);
        debug!(doc = %doc, path = %target.display(), bytes = text.len(), "writing document");

        // Atomic write
        let tmp = self.root.join(format!(".{}-{}.tmp", doc, Uuid::new_v4()));
        fs::write(&tmp, text).map_err(TasklogError::Io)?;
        fs::rename(&tmp, &target).map_err(TasklogError::Io)?;
        Ok(())
    }

    fn exists(&self, doc: DocId) -> bool {
        self.path(doc).is_file()
    }

    fn path(&self, doc: DocId) -> PathBuf {
        self.root.join(self.files.name(doc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestEnv;

    #[test]
    fn read_missing_document_is_distinct_error() {
        let env = TestEnv::new();
        assert!(matches!(
            env.store.read(DocId::Backlog).unwrap_err(),
            TasklogError::DocumentNotFound(DocId::Backlog)
        ));
        assert!(!env.store.exists(DocId::Backlog));
    }

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsStore::new(dir.path().join("nested"));
        store.write(DocId::Current, "# This Week\n").unwrap();
        assert!(store.exists(DocId::Current));
        assert_eq!(store.read(DocId::Current).unwrap(), "# This Week\n");
        assert!(dir.path().join("nested/current.md").is_file());
    }

    #[test]
    fn write_leaves_no_temp_files() {
        let env = TestEnv::new();
        env.store.write(DocId::Archive, "a").unwrap();
        env.store.write(DocId::Archive, "b").unwrap();
        let names: Vec<String> = fs::read_dir(&env.root)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["archive.md"]);
    }

    #[test]
    fn custom_file_names() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsStore::new(dir.path()).with_files(DocFiles {
            current: "week.md".into(),
            ..Default::default()
        });
        assert_eq!(store.path(DocId::Current), dir.path().join("week.md"));
        assert_eq!(store.path(DocId::Backlog), dir.path().join("backlog.md"));
    }
}
