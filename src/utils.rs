//! Utility helpers

use crate::{Error, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Temporary folder that deletes its contents when dropped
///
/// Used by file-based tests to keep scratch STL files out of the source tree.
pub struct TempFolder {
    path: PathBuf,
}

impl TempFolder {
    pub fn new() -> Result<Self> {
        let mut path = env::temp_dir();
        let unique = format!(
            "stlinfo_{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos())
                .unwrap_or(0)
        );
        path.push(unique);
        fs::create_dir_all(&path)
            .map_err(|e| Error::Io(std::io::Error::new(e.kind(), format!("{}: {}", path.display(), e))))?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempFolder {
    fn drop(&mut self) {
        if let Ok(entries) = fs::read_dir(&self.path) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_file() {
                    let _ = fs::remove_file(path);
                }
            }
        }
        let _ = fs::remove_dir(&self.path);
    }
}
