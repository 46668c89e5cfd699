#![allow(dead_code)]

use dagman::config::{
    DagFile, DagSection, DependencyConfig, NodeConfig, RawDagFile, SubmitConfig,
};
use dagman::{Dag, Node};

/// Builder for [`Dag`] with external submit files, to keep tests short.
pub struct DagBuilder {
    filename: String,
    nodes: Vec<Node>,
    edges: Vec<(Vec<String>, Vec<String>)>,
}

impl DagBuilder {
    pub fn new(filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add node `name` running `<lowercase name>.sub`.
    pub fn node(self, name: &str) -> Self {
        let submit = format!("{}.sub", name.to_lowercase());
        self.with_node(Node::new(name, submit))
    }

    pub fn with_node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn edge(mut self, parents: &[&str], children: &[&str]) -> Self {
        self.edges.push((
            parents.iter().map(|s| s.to_string()).collect(),
            children.iter().map(|s| s.to_string()).collect(),
        ));
        self
    }

    pub fn build(self) -> Dag {
        let mut dag = Dag::new(self.filename, self.nodes);
        for (parents, children) in self.edges {
            dag.add_dependency(parents, children)
                .expect("builder edges must name known nodes");
        }
        dag
    }
}

/// Builder for [`RawDagFile`] / [`DagFile`], mirroring the TOML layout.
pub struct DagFileBuilder {
    config: RawDagFile,
}

impl DagFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawDagFile {
                dag: DagSection::default(),
                node: Default::default(),
                dependency: Vec::new(),
            },
        }
    }

    pub fn filename(mut self, filename: &str) -> Self {
        self.config.dag.filename = filename.into();
        self
    }

    pub fn with_node(mut self, name: &str, node: NodeConfig) -> Self {
        self.config.node.insert(name.to_string(), node);
        self
    }

    /// Shorthand for a node with an external submit file and no directives.
    pub fn with_file_node(self, name: &str, submit: &str) -> Self {
        self.with_node(name, file_node(submit))
    }

    pub fn with_dependency(mut self, parents: &[&str], children: &[&str]) -> Self {
        self.config.dependency.push(DependencyConfig {
            parents: parents.iter().map(|s| s.to_string()).collect(),
            children: children.iter().map(|s| s.to_string()).collect(),
        });
        self
    }

    pub fn build_raw(self) -> RawDagFile {
        self.config
    }

    pub fn build(self) -> DagFile {
        DagFile::try_from(self.config).expect("Failed to build valid DAG file from builder")
    }
}

impl Default for DagFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A [`NodeConfig`] with an external submit file and nothing else set.
pub fn file_node(submit: &str) -> NodeConfig {
    NodeConfig {
        submit: SubmitConfig::File(submit.into()),
        retry: None,
        pre: None,
        post: None,
        vars: Default::default(),
        keywords: Default::default(),
    }
}
