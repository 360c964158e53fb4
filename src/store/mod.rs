//! Access to the localization store.
//!
//! The store is a directory tree of JSON documents mirroring the source tree:
//!
//! ```text
//! <root>/globalFunctions.json      function name -> entry
//! <root>/<subdir>/<Symbol>.json    { "<Symbol>": { comment, property, ... } }
//! ```
//!
//! Lookups never fail loudly. A missing or broken document is simply absent.

use std::path::{Path, PathBuf};

use serde_json::Value;

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Default base name of the document holding free-function entries.
pub const GLOBAL_FUNCTIONS_FILE_NAME: &str = "globalFunctions";

/// Extension of every store document.
pub const DOCUMENT_EXTENSION: &str = "json";

/// Read-only view of a localization store.
pub trait StoreAccessor {
    /// Parsed JSON of `<directory>/<name>.json`, or `None` if it does not exist
    /// or cannot be parsed.
    fn fetch_document(&self, directory: &Path, name: &str) -> Option<Value>;

    /// Store sub-directory mirroring the directory of `source_file`.
    ///
    /// `None` when the source file has no relation to the store layout, in
    /// which case the store root is used.
    fn derive_subdirectory(&self, source_file: &str) -> Option<PathBuf>;

    /// Problems met while reading documents since the last call.
    fn take_warnings(&self) -> Vec<StoreWarning> {
        Vec::new()
    }
}

/// A store document that exists but could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreWarning {
    pub file_path: String,
    pub error: String,
}

/// Path of the document for `name` inside `directory`.
pub fn document_path(directory: &Path, name: &str) -> PathBuf {
    directory.join(format!("{}.{}", name, DOCUMENT_EXTENSION))
}
