//! In-memory filesystem fake.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::ports::filesystem::FileSystem;

/// In-memory filesystem seeded with files and directories.
///
/// Clones share the same storage, so a test can keep a handle, box the
/// fake into a context, and read back what a command wrote.
#[derive(Clone)]
pub struct FakeFileSystem {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
    dirs: Arc<Mutex<HashSet<PathBuf>>>,
}

impl FakeFileSystem {
    /// Creates an empty filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self {
            files: Arc::new(Mutex::new(HashMap::new())),
            dirs: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Seeds a file, creating its parent directories implicitly.
    #[must_use]
    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        let path = path.into();
        let mut ancestor = path.parent();
        while let Some(dir) = ancestor {
            if !dir.as_os_str().is_empty() {
                self.dirs.lock().unwrap().insert(dir.to_path_buf());
            }
            ancestor = dir.parent();
        }
        self.files.lock().unwrap().insert(path, contents.into());
        self
    }

    /// Seeds an empty directory.
    #[must_use]
    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        self.dirs.lock().unwrap().insert(path.into());
        self
    }

    /// Returns the contents stored at `path`, if any.
    #[must_use]
    pub fn written(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }
}

impl Default for FakeFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for FakeFileSystem {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| format!("no such file: {}", path.display()).into())
    }

    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.files.lock().unwrap().insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path) || self.is_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().contains(path)
    }
}
