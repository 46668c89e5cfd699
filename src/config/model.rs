// src/config/model.rs

use std::fmt;
use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Deserialize;

/// Top-level DAG description as read from a TOML file.
///
/// ```toml
/// [dag]
/// filename = "pipeline.dag"
///
/// [node.A]
/// submit = "a.sub"
/// retry = 2
/// pre = { executable = "stage_in.sh", arguments = ["run1"] }
///
/// [node.B.submit]
/// filename = "b.sub"
/// commands = { executable = "/bin/echo", arguments = "hello" }
/// queue = 1
///
/// [[dependency]]
/// parents = ["A"]
/// children = ["B"]
/// ```
///
/// Nodes keep the order they appear in the file. This type is not
/// validated; convert it into a [`DagFile`] with `DagFile::try_from`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDagFile {
    #[serde(default)]
    pub dag: DagSection,

    /// All nodes from `[node.<name>]`, keyed by node name.
    #[serde(default)]
    pub node: IndexMap<String, NodeConfig>,

    /// All `[[dependency]]` entries, in file order.
    #[serde(default)]
    pub dependency: Vec<DependencyConfig>,
}

/// `[dag]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct DagSection {
    /// Where the DAG input file is written.
    #[serde(default = "default_dag_filename")]
    pub filename: PathBuf,
}

fn default_dag_filename() -> PathBuf {
    PathBuf::from("workflow.dag")
}

impl Default for DagSection {
    fn default() -> Self {
        Self {
            filename: default_dag_filename(),
        }
    }
}

/// `[node.<name>]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeConfig {
    pub submit: SubmitConfig,

    /// `RETRY <name> <n>`.
    #[serde(default)]
    pub retry: Option<u32>,

    /// `SCRIPT PRE <name> ...`.
    #[serde(default)]
    pub pre: Option<ScriptConfig>,

    /// `SCRIPT POST <name> ...`.
    #[serde(default)]
    pub post: Option<ScriptConfig>,

    /// `VARS <name> key="value" ...`; omitted when empty.
    #[serde(default)]
    pub vars: IndexMap<String, ScalarValue>,

    /// Any other directive, rendered verbatim as `<key> <name> <value>`.
    #[serde(default)]
    pub keywords: IndexMap<String, ScalarValue>,
}

/// Either a path to an existing submit file or an inline description that
/// is written alongside the DAG.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SubmitConfig {
    File(PathBuf),
    Inline(InlineSubmitConfig),
}

#[derive(Debug, Clone, Deserialize)]
pub struct InlineSubmitConfig {
    pub filename: PathBuf,

    #[serde(default)]
    pub commands: IndexMap<String, ScalarValue>,

    /// `queue <n>`; a bare `queue` when absent.
    #[serde(default)]
    pub queue: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScriptConfig {
    pub executable: String,

    #[serde(default)]
    pub arguments: Vec<ScalarValue>,
}

/// `[[dependency]]` entry: every child waits for every parent.
#[derive(Debug, Clone, Deserialize)]
pub struct DependencyConfig {
    pub parents: Vec<String>,
    pub children: Vec<String>,
}

/// A TOML scalar as it should appear in generated text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::String(s) => f.write_str(s),
            ScalarValue::Integer(i) => write!(f, "{i}"),
            // `{:?}` keeps `1.0` and `1e300` as written.
            ScalarValue::Float(x) => write!(f, "{x:?}"),
            ScalarValue::Boolean(b) => write!(f, "{b}"),
        }
    }
}

/// A validated DAG description.
///
/// Only obtainable through `TryFrom<RawDagFile>` (see `validate.rs`), so
/// holders can rely on: at least one node, well-formed node names, every
/// dependency naming known nodes, and no cycles.
#[derive(Debug, Clone)]
pub struct DagFile {
    pub(crate) dag: DagSection,
    pub(crate) node: IndexMap<String, NodeConfig>,
    pub(crate) dependency: Vec<DependencyConfig>,
}

impl DagFile {
    pub(crate) fn new_unchecked(
        dag: DagSection,
        node: IndexMap<String, NodeConfig>,
        dependency: Vec<DependencyConfig>,
    ) -> Self {
        Self {
            dag,
            node,
            dependency,
        }
    }

    pub fn dag(&self) -> &DagSection {
        &self.dag
    }

    pub fn nodes(&self) -> &IndexMap<String, NodeConfig> {
        &self.node
    }

    pub fn dependencies(&self) -> &[DependencyConfig] {
        &self.dependency
    }

    /// Redirect the generated DAG file, e.g. from `--output`.
    pub fn with_filename(mut self, filename: impl Into<PathBuf>) -> Self {
        self.dag.filename = filename.into();
        self
    }
}
