// src/config/loader.rs

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{DagFile, RawDagFile};
use crate::errors::Result;
use crate::fs::{FileSystem, RealFileSystem};

/// Read and deserialize a DAG description through `fs`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (unknown nodes, cycles, etc.). Use [`load_and_validate`] for
/// that.
pub fn load_from(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<RawDagFile> {
    let path = path.as_ref();
    let contents = fs.read_to_string(path)?;

    let config: RawDagFile = toml::from_str(&contents)?;
    debug!(
        path = %path.display(),
        nodes = config.node.len(),
        dependencies = config.dependency.len(),
        "parsed DAG description"
    );

    Ok(config)
}

/// [`load_from`] against the real filesystem.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawDagFile> {
    load_from(&RealFileSystem, path)
}

/// Load a DAG description from disk and validate it.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks for:
///   - malformed or reserved node names,
///   - unknown nodes in `[[dependency]]`,
///   - cycles.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<DagFile> {
    let raw_config = load_from_path(&path)?;
    let config = DagFile::try_from(raw_config)?;
    Ok(config)
}

/// Default location of the DAG description: `Dagman.toml` in the current
/// working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Dagman.toml")
}
