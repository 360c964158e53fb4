use std::{
    cell::RefCell,
    collections::HashMap,
    path::{Path, PathBuf},
};

use serde_json::Value;

use super::{StoreAccessor, document_path};

/// Localization store held in memory.
///
/// Every fetch is recorded, which makes it handy for checking which documents
/// a run asked for.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: HashMap<PathBuf, Value>,
    subdirectories: HashMap<String, PathBuf>,
    requests: RefCell<Vec<PathBuf>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the document for `name` in `directory`.
    pub fn with_document(
        mut self,
        directory: impl AsRef<Path>,
        name: &str,
        document: Value,
    ) -> Self {
        self.documents
            .insert(document_path(directory.as_ref(), name), document);
        self
    }

    /// Map a source file to a store sub-directory.
    pub fn with_subdirectory(
        mut self,
        source_file: impl Into<String>,
        subdirectory: impl Into<PathBuf>,
    ) -> Self {
        self.subdirectories
            .insert(source_file.into(), subdirectory.into());
        self
    }

    /// Paths of all documents requested so far, in request order.
    pub fn requests(&self) -> Vec<PathBuf> {
        self.requests.borrow().clone()
    }
}

impl StoreAccessor for MemoryStore {
    fn fetch_document(&self, directory: &Path, name: &str) -> Option<Value> {
        let path = document_path(directory, name);
        let document = self.documents.get(&path).cloned();
        self.requests.borrow_mut().push(path);
        document
    }

    fn derive_subdirectory(&self, source_file: &str) -> Option<PathBuf> {
        self.subdirectories.get(source_file).cloned()
    }
}
