// src/fs/mod.rs

use std::fmt::Debug;
use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::trace;

use crate::errors::Result;

pub mod mock;

/// Abstract sink for everything the crate persists.
///
/// `write` always replaces the full contents of `path`.
pub trait FileSystem: Send + Sync + Debug {
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;
    fn exists(&self, path: &Path) -> bool;
}

/// Implementation that uses `std::fs`.
///
/// Parent directories are never created: writing below a missing directory
/// fails with an I/O error.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path)?)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        trace!(path = %path.display(), bytes = contents.len(), "writing file");
        let mut file = fs::File::create(path)?;
        file.write_all(contents)?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
