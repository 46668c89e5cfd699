// src/submit.rs

//! HTCondor submit descriptions referenced by DAG nodes.
//!
//! A node either points at an existing submit file on disk or owns a
//! [`SubmitDescriptor`] that the DAG writes out before writing itself.

use std::fmt::{self, Debug};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::debug;

use crate::errors::Result;
use crate::fs::FileSystem;

/// Something that can be rendered into a submit file at a known location.
pub trait SubmitDescriptor: Send + Sync + Debug {
    /// Where the submit file lives; this is what the `JOB` line refers to.
    fn filename(&self) -> &Path;

    /// Full text of the submit file.
    fn render(&self) -> String;

    /// Write [`render`](Self::render) to [`filename`](Self::filename),
    /// replacing any existing contents.
    fn dump(&self, fs: &dyn FileSystem) -> Result<()> {
        debug!(path = %self.filename().display(), "writing submit description");
        fs.write(self.filename(), self.render().as_bytes())
    }
}

/// A plain HTCondor submit description: ordered `key = value` commands
/// followed by a `queue` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitDescription {
    filename: PathBuf,
    commands: IndexMap<String, String>,
    queue: Option<u32>,
}

impl SubmitDescription {
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        Self {
            filename: filename.into(),
            commands: IndexMap::new(),
            queue: None,
        }
    }

    /// Add or replace a submit command. Replacing keeps the original position.
    pub fn command(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.commands.insert(key.into(), value.to_string());
        self
    }

    /// Number of jobs to queue. `None` renders a bare `queue`.
    pub fn queue(mut self, count: Option<u32>) -> Self {
        self.queue = count;
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.commands.get(key).map(String::as_str)
    }

    pub fn commands(&self) -> impl Iterator<Item = (&str, &str)> {
        self.commands.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl SubmitDescriptor for SubmitDescription {
    fn filename(&self) -> &Path {
        &self.filename
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SubmitDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.commands {
            writeln!(f, "{key} = {value}")?;
        }
        match self.queue {
            Some(count) => write!(f, "queue {count}"),
            None => f.write_str("queue"),
        }
    }
}
