use std::{
    cell::RefCell,
    fs, io,
    path::{Component, Path, PathBuf},
};

use serde_json::Value;

use super::{StoreAccessor, StoreWarning, document_path};

/// Localization store read from the file system.
///
/// Sub-directories are derived by stripping `source_root` from the directory
/// of a reflection's source file, so `src/a/b.ts` maps to `<root>/a/`.
#[derive(Debug, Default)]
pub struct FileStore {
    source_root: PathBuf,
    warnings: RefCell<Vec<StoreWarning>>,
}

impl FileStore {
    pub fn new(source_root: impl AsRef<Path>) -> Self {
        Self {
            source_root: normalize(source_root.as_ref()),
            warnings: RefCell::new(Vec::new()),
        }
    }

    fn warn(&self, path: &Path, error: impl ToString) {
        self.warnings.borrow_mut().push(StoreWarning {
            file_path: path.to_string_lossy().to_string(),
            error: error.to_string(),
        });
    }
}

impl StoreAccessor for FileStore {
    fn fetch_document(&self, directory: &Path, name: &str) -> Option<Value> {
        let path = document_path(directory, name);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
            Err(err) => {
                self.warn(&path, err);
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(err) => {
                self.warn(&path, err);
                None
            }
        }
    }

    fn derive_subdirectory(&self, source_file: &str) -> Option<PathBuf> {
        let source_dir = normalize(Path::new(source_file).parent()?);
        let relative = source_dir.strip_prefix(&self.source_root).ok()?;
        // `..` would lead outside the store root.
        let inside = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        if relative.as_os_str().is_empty() || !inside {
            None
        } else {
            Some(relative.to_path_buf())
        }
    }

    fn take_warnings(&self) -> Vec<StoreWarning> {
        self.warnings.take()
    }
}

/// Drop `.` components so `./src/a` and `src/a` compare equal.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
