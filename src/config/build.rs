// src/config/build.rs

//! Turn a validated [`DagFile`] into the in-memory [`Dag`].

use crate::config::model::{DagFile, NodeConfig, ScriptConfig, SubmitConfig};
use crate::dag::{Dag, Node, Submit};
use crate::errors::Result;
use crate::macros::Macros;
use crate::script::Script;
use crate::submit::SubmitDescription;

impl DagFile {
    /// Build the DAG described by this file.
    ///
    /// Directives are attached in a fixed order: `SCRIPT PRE`, `SCRIPT POST`,
    /// `VARS`, `RETRY`, then `keywords` in file order.
    pub fn to_dag(&self) -> Result<Dag> {
        let nodes = self
            .node
            .iter()
            .map(|(name, cfg)| build_node(name, cfg))
            .collect();

        let mut dag = Dag::new(self.dag.filename.clone(), nodes);
        for dep in &self.dependency {
            dag.add_dependency(&dep.parents, &dep.children)?;
        }
        Ok(dag)
    }
}

fn build_node(name: &str, cfg: &NodeConfig) -> Node {
    let mut node = Node::new(name, build_submit(&cfg.submit));

    if let Some(ref pre) = cfg.pre {
        node = node.pre_script(build_script(pre));
    }
    if let Some(ref post) = cfg.post {
        node = node.post_script(build_script(post));
    }
    if !cfg.vars.is_empty() {
        node = node.vars(cfg.vars.iter().collect::<Macros>());
    }
    if let Some(retry) = cfg.retry {
        node = node.retry(retry);
    }
    for (key, value) in &cfg.keywords {
        node = node.with_keyword(key.as_str(), value.to_string());
    }

    node
}

fn build_submit(cfg: &SubmitConfig) -> Submit {
    match cfg {
        SubmitConfig::File(path) => Submit::File(path.clone()),
        SubmitConfig::Inline(inline) => {
            let description = inline
                .commands
                .iter()
                .fold(SubmitDescription::new(&inline.filename), |desc, (k, v)| {
                    desc.command(k.as_str(), v)
                })
                .queue(inline.queue);
            Submit::inline(description)
        }
    }
}

fn build_script(cfg: &ScriptConfig) -> Script {
    Script::with_args(cfg.executable.as_str(), &cfg.arguments)
}
