// src/dag/node.rs

//! DAG nodes and the directives attached to them.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;

use crate::macros::Macros;
use crate::script::Script;
use crate::submit::SubmitDescriptor;

pub const SCRIPT_PRE: &str = "SCRIPT PRE";
pub const SCRIPT_POST: &str = "SCRIPT POST";
pub const VARS: &str = "VARS";
pub const RETRY: &str = "RETRY";

/// The submit description a node runs.
#[derive(Debug, Clone)]
pub enum Submit {
    /// An existing submit file; never written by the DAG.
    File(PathBuf),
    /// A description the DAG writes to its own filename on dump.
    Inline(Arc<dyn SubmitDescriptor>),
}

impl Submit {
    pub fn inline(descriptor: impl SubmitDescriptor + 'static) -> Self {
        Submit::Inline(Arc::new(descriptor))
    }

    /// Filename referenced by the node's `JOB` line.
    pub fn filename(&self) -> &Path {
        match self {
            Submit::File(path) => path,
            Submit::Inline(descriptor) => descriptor.filename(),
        }
    }
}

impl From<&str> for Submit {
    fn from(path: &str) -> Self {
        Submit::File(PathBuf::from(path))
    }
}

impl From<String> for Submit {
    fn from(path: String) -> Self {
        Submit::File(PathBuf::from(path))
    }
}

impl From<PathBuf> for Submit {
    fn from(path: PathBuf) -> Self {
        Submit::File(path)
    }
}

/// Value of a per-node directive line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Text(String),
    Script(Script),
    Macros(Macros),
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::Text(text) => f.write_str(text),
            Directive::Script(script) => fmt::Display::fmt(script, f),
            Directive::Macros(macros) => fmt::Display::fmt(macros, f),
        }
    }
}

impl From<&str> for Directive {
    fn from(value: &str) -> Self {
        Directive::Text(value.to_string())
    }
}

impl From<String> for Directive {
    fn from(value: String) -> Self {
        Directive::Text(value)
    }
}

impl From<Script> for Directive {
    fn from(script: Script) -> Self {
        Directive::Script(script)
    }
}

impl From<Macros> for Directive {
    fn from(macros: Macros) -> Self {
        Directive::Macros(macros)
    }
}

macro_rules! directive_from_display {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Directive {
                fn from(value: $ty) -> Self {
                    Directive::Text(value.to_string())
                }
            }
        )*
    };
}

directive_from_display!(
    u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64, bool, char
);

/// One `JOB` entry of a DAG plus its directive lines.
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    submit: Submit,
    keywords: IndexMap<String, Directive>,
}

impl Node {
    pub fn new(name: impl Into<String>, submit: impl Into<Submit>) -> Self {
        Self {
            name: name.into(),
            submit: submit.into(),
            keywords: IndexMap::new(),
        }
    }

    /// Attach an arbitrary directive, rendered as `<key> <name> <value>`.
    ///
    /// Keys are not checked against DAGMan's vocabulary. Setting a key again
    /// replaces its value in place.
    pub fn with_keyword(mut self, key: impl Into<String>, value: impl Into<Directive>) -> Self {
        self.keywords.insert(key.into(), value.into());
        self
    }

    pub fn pre_script(self, script: Script) -> Self {
        self.with_keyword(SCRIPT_PRE, script)
    }

    pub fn post_script(self, script: Script) -> Self {
        self.with_keyword(SCRIPT_POST, script)
    }

    pub fn vars(self, macros: Macros) -> Self {
        self.with_keyword(VARS, macros)
    }

    pub fn retry(self, count: u32) -> Self {
        self.with_keyword(RETRY, count)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn submit(&self) -> &Submit {
        &self.submit
    }

    pub fn keyword(&self, key: &str) -> Option<&Directive> {
        self.keywords.get(key)
    }

    pub fn keywords(&self) -> impl Iterator<Item = (&str, &Directive)> {
        self.keywords.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of lines this node renders to.
    pub fn line_count(&self) -> usize {
        1 + self.keywords.len()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JOB {} {}", self.name, self.submit.filename().display())?;
        for (key, value) in &self.keywords {
            write!(f, "\n{key} {} {value}", self.name)?;
        }
        Ok(())
    }
}
