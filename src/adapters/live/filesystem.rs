//! Live filesystem adapter using `std::fs`.

use std::path::Path;

use crate::ports::filesystem::FileSystem;

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(std::fs::write(path, contents)?)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinguishes_files_from_directories() {
        let dir = std::env::temp_dir().join("preflight_live_fs_test");
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("marker.txt");
        std::fs::write(&file, "x").unwrap();

        let fs = LiveFileSystem;
        assert!(fs.exists(&dir));
        assert!(fs.is_dir(&dir));
        assert!(fs.exists(&file));
        assert!(!fs.is_dir(&file));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = std::env::temp_dir().join("preflight_live_fs_write_test");
        let _ = std::fs::remove_dir_all(&dir);
        let nested = dir.join("a").join("b.json");

        let fs = LiveFileSystem;
        fs.write(&nested, "{}").unwrap();
        assert_eq!(fs.read_to_string(&nested).unwrap(), "{}");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
