use super::DocumentStore;
use crate::error::{Result, TasklogError};
use crate::model::DocId;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory document store for testing.
///
/// Uses `RefCell` for interior mutability since tasklog is single-threaded, so
/// `write` can take `&self` like the filesystem store.
#[derive(Default)]
pub struct MemStore {
    docs: RefCell<HashMap<DocId, String>>,
    writes: RefCell<Vec<DocId>>,
    simulate_write_error: RefCell<Option<DocId>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_documents(current: &str, backlog: &str, archive: &str) -> Self {
        let store = Self::new();
        {
            let mut docs = store.docs.borrow_mut();
            docs.insert(DocId::Current, current.to_string());
            docs.insert(DocId::Backlog, backlog.to_string());
            docs.insert(DocId::Archive, archive.to_string());
        }
        store
    }

    /// Make writes to `doc` fail, or clear with `None`.
    pub fn set_simulate_write_error(&self, doc: Option<DocId>) {
        *self.simulate_write_error.borrow_mut() = doc;
    }

    /// Every successful write, in order.
    pub fn writes(&self) -> Vec<DocId> {
        self.writes.borrow().clone()
    }

    /// The document text, if present.
    pub fn get(&self, doc: DocId) -> Option<String> {
        self.docs.borrow().get(&doc).cloned()
    }
}

impl DocumentStore for MemStore {
    fn read(&self, doc: DocId) -> Result<String> {
        self.docs
            .borrow()
            .get(&doc)
            .cloned()
            .ok_or(TasklogError::DocumentNotFound(doc))
    }

    fn write(&self, doc: DocId, text: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() == Some(doc) {
            return Err(TasklogError::Store("Simulated write error".to_string()));
        }
        self.docs.borrow_mut().insert(doc, text.to_string());
        self.writes.borrow_mut().push(doc);
        Ok(())
    }

    fn exists(&self, doc: DocId) -> bool {
        self.docs.borrow().contains_key(&doc)
    }

    fn path(&self, doc: DocId) -> PathBuf {
        PathBuf::from(format!("memory://{}.md", doc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_document_errors() {
        let store = MemStore::new();
        assert!(matches!(
            store.read(DocId::Archive).unwrap_err(),
            TasklogError::DocumentNotFound(DocId::Archive)
        ));
        assert!(!store.exists(DocId::Archive));
    }

    #[test]
    fn records_writes() {
        let store = MemStore::with_documents("", "", "");
        store.write(DocId::Backlog, "# Backlog\n").unwrap();
        store.write(DocId::Current, "# This Week\n").unwrap();
        assert_eq!(store.writes(), vec![DocId::Backlog, DocId::Current]);
        assert_eq!(store.read(DocId::Backlog).unwrap(), "# Backlog\n");
    }

    #[test]
    fn simulated_write_error_only_hits_target() {
        let store = MemStore::with_documents("", "", "");
        store.set_simulate_write_error(Some(DocId::Archive));
        assert!(store.write(DocId::Archive, "x").is_err());
        assert!(store.write(DocId::Current, "x").is_ok());
        assert_eq!(store.writes(), vec![DocId::Current]);
    }
}
