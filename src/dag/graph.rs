// src/dag/graph.rs

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::{debug, info, warn};

use crate::dag::node::{Node, Submit};
use crate::errors::{DagmanError, Result};
use crate::fs::{FileSystem, RealFileSystem};

/// A DAGMan input file: nodes in declaration order plus `PARENT ... CHILD`
/// edges between groups of nodes.
///
/// Edges are keyed by the exact parent sequence, so `["A", "B"]` and
/// `["B", "A"]` are two different entries. Re-adding a parent sequence
/// replaces its children and keeps the entry's original position.
#[derive(Debug, Clone)]
pub struct Dag {
    filename: PathBuf,
    nodes: Vec<Node>,
    dependencies: IndexMap<Vec<String>, Vec<String>>,
    written_to_disk: bool,
}

impl Dag {
    pub fn new(filename: impl Into<PathBuf>, nodes: Vec<Node>) -> Self {
        Self {
            filename: filename.into(),
            nodes,
            dependencies: IndexMap::new(),
            written_to_disk: false,
        }
    }

    /// Declare that every node in `children` waits for every node in
    /// `parents`.
    ///
    /// All names must belong to nodes of this DAG. On an unknown name the
    /// first offender is reported (parents are checked first) and the DAG is
    /// left untouched. Empty groups are accepted and render as an empty name
    /// list; the TOML front-end rejects them before they get here.
    pub fn add_dependency<P, C, S, T>(&mut self, parents: P, children: C) -> Result<()>
    where
        P: IntoIterator<Item = S>,
        C: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        let parents: Vec<String> = parents.into_iter().map(Into::into).collect();
        let children: Vec<String> = children.into_iter().map(Into::into).collect();

        let known: HashSet<&str> = self.nodes.iter().map(Node::name).collect();
        if let Some(unknown) = parents
            .iter()
            .chain(children.iter())
            .find(|name| !known.contains(name.as_str()))
        {
            return Err(DagmanError::UnknownNode(unknown.clone()));
        }

        debug!(?parents, ?children, "adding dependency");
        if let Some(previous) = self.dependencies.insert(parents, children) {
            warn!(?previous, "dependency for this parent set replaced");
        }
        Ok(())
    }

    /// Dependencies as `(parents, children)` with names joined by a space,
    /// in insertion order.
    pub fn dependencies(&self) -> Vec<(String, String)> {
        self.dependencies
            .iter()
            .map(|(parents, children)| (parents.join(" "), children.join(" ")))
            .collect()
    }

    pub fn filename(&self) -> &Path {
        &self.filename
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// First node with the given name.
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.name() == name)
    }

    /// True once [`dump`](Self::dump) has completed successfully.
    pub fn written_to_disk(&self) -> bool {
        self.written_to_disk
    }

    /// Write every inline submit description, then the DAG file itself.
    ///
    /// Each write replaces the target's contents. The first failure aborts
    /// the dump; `written_to_disk` only flips to true after the DAG file has
    /// been written.
    pub fn dump(&mut self, fs: &dyn FileSystem) -> Result<()> {
        for node in &self.nodes {
            if let Submit::Inline(descriptor) = node.submit() {
                descriptor.dump(fs)?;
            }
        }

        fs.write(&self.filename, self.to_string().as_bytes())?;
        self.written_to_disk = true;

        info!(
            path = %self.filename.display(),
            nodes = self.nodes.len(),
            dependencies = self.dependencies.len(),
            "DAG written"
        );
        Ok(())
    }

    /// [`dump`](Self::dump) through the real filesystem.
    pub fn dump_to_disk(&mut self) -> Result<()> {
        self.dump(&RealFileSystem)
    }

    /// External submit files referenced by `JOB` lines that `fs` does not
    /// have. Inline descriptions are skipped since `dump` creates them.
    pub fn missing_submit_files(&self, fs: &dyn FileSystem) -> Vec<&Path> {
        self.nodes
            .iter()
            .filter_map(|node| match node.submit() {
                Submit::File(path) if !fs.exists(path) => Some(path.as_path()),
                _ => None,
            })
            .collect()
    }

    /// Reject dependency sets that form a cycle (including a node listed as
    /// its own parent).
    ///
    /// Edges are not checked for cycles as they are added; call this before
    /// handing the DAG to the scheduler.
    pub fn check_acyclic(&self) -> Result<()> {
        let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

        for node in &self.nodes {
            graph.add_node(node.name());
        }

        for (parents, children) in &self.dependencies {
            for parent in parents {
                for child in children {
                    graph.add_edge(parent.as_str(), child.as_str(), ());
                }
            }
        }

        match toposort(&graph, None) {
            Ok(_order) => Ok(()),
            Err(cycle) => Err(DagmanError::DagCycle(format!(
                "cycle detected in DAG involving node '{}'",
                cycle.node_id()
            ))),
        }
    }
}

impl fmt::Display for Dag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nodes = self.nodes.iter().map(ToString::to_string);
        let edges = self
            .dependencies()
            .into_iter()
            .map(|(parents, children)| format!("PARENT {parents} CHILD {children}"));

        let lines: Vec<String> = nodes.chain(edges).collect();
        f.write_str(&lines.join("\n"))
    }
}
