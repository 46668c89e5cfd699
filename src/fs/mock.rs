// src/fs/mock.rs

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use super::FileSystem;
use crate::errors::Result;

#[derive(Debug, Default)]
struct MockState {
    files: HashMap<PathBuf, Vec<u8>>,
    /// Every successful write, in order.
    writes: Vec<PathBuf>,
    failing: HashSet<PathBuf>,
}

/// In-memory filesystem for tests.
///
/// Cloning shares the underlying storage, so a test can keep a handle while
/// the code under test writes through another.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    state: Arc<Mutex<MockState>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        self.lock()
            .files
            .insert(path.as_ref().to_path_buf(), content.into());
    }

    /// Make every subsequent write to `path` fail with `PermissionDenied`.
    pub fn fail_writes_to(&self, path: impl AsRef<Path>) {
        self.lock().failing.insert(path.as_ref().to_path_buf());
    }

    /// Contents of `path` as UTF-8, if present.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.lock()
            .files
            .get(path.as_ref())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Paths written so far, oldest first. Repeated writes appear repeatedly.
    pub fn writes(&self) -> Vec<PathBuf> {
        self.lock().writes.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        // A poisoned lock only means another test thread panicked mid-write.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        let state = self.lock();
        match state.files.get(path) {
            Some(content) => String::from_utf8(content.clone())
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into()),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found: {}", path.display()),
            )
            .into()),
        }
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        let mut state = self.lock();
        if state.failing.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("write refused: {}", path.display()),
            )
            .into());
        }
        state.files.insert(path.to_path_buf(), contents.to_vec());
        state.writes.push(path.to_path_buf());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.lock().files.contains_key(path)
    }
}
