use super::{DataStore, snapshot};
use crate::directory::Directory;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Keeps the directory in a single JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Directory> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "no saved contacts, starting empty");
            return Ok(Directory::new());
        }
        let bytes = fs::read(&self.path)?;
        let directory = snapshot::from_bytes(&bytes)?;
        tracing::info!(
            path = %self.path.display(),
            contacts = directory.len(),
            "loaded contacts"
        );
        Ok(directory)
    }

    fn save(&mut self, directory: &Directory) -> Result<()> {
        self.ensure_parent()?;
        let bytes = snapshot::to_bytes(directory)?;
        fs::write(&self.path, bytes)?;
        tracing::info!(
            path = %self.path.display(),
            contacts = directory.len(),
            "saved contacts"
        );
        Ok(())
    }
}
