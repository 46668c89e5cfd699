// src/config/validate.rs

use std::sync::LazyLock;

use regex::Regex;

use crate::config::model::{DagFile, RawDagFile};
use crate::errors::{DagmanError, Result};

/// DAGMan splits lines on whitespace and treats `"` specially inside
/// directives, so neither may appear in a node name.
static NODE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^[^\s"]+$"#).expect("static node-name regex"));

const RESERVED_NAMES: &[&str] = &["PARENT", "CHILD"];

impl TryFrom<RawDagFile> for DagFile {
    type Error = DagmanError;

    fn try_from(raw: RawDagFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        let file = DagFile::new_unchecked(raw.dag, raw.node, raw.dependency);

        // Names are known to be valid here, so building can only fail on a
        // cycle.
        file.to_dag()?.check_acyclic()?;
        Ok(file)
    }
}

fn validate_raw_config(cfg: &RawDagFile) -> Result<()> {
    ensure_has_nodes(cfg)?;
    validate_node_names(cfg)?;
    validate_dependencies(cfg)?;
    Ok(())
}

fn ensure_has_nodes(cfg: &RawDagFile) -> Result<()> {
    if cfg.node.is_empty() {
        return Err(DagmanError::ConfigError(
            "config must contain at least one [node.<name>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_node_names(cfg: &RawDagFile) -> Result<()> {
    for name in cfg.node.keys() {
        if !NODE_NAME.is_match(name) {
            return Err(DagmanError::ConfigError(format!(
                "node name '{}' must be non-empty and contain no whitespace or quotes",
                name
            )));
        }
        if RESERVED_NAMES
            .iter()
            .any(|reserved| reserved.eq_ignore_ascii_case(name))
        {
            return Err(DagmanError::ConfigError(format!(
                "node name '{}' is a reserved DAGMan keyword",
                name
            )));
        }
    }
    Ok(())
}

fn validate_dependencies(cfg: &RawDagFile) -> Result<()> {
    for (index, dep) in cfg.dependency.iter().enumerate() {
        if dep.parents.is_empty() || dep.children.is_empty() {
            return Err(DagmanError::ConfigError(format!(
                "dependency #{} needs at least one parent and one child",
                index + 1
            )));
        }
        for name in dep.parents.iter().chain(dep.children.iter()) {
            if !cfg.node.contains_key(name) {
                return Err(DagmanError::ConfigError(format!(
                    "dependency #{} refers to unknown node '{}'",
                    index + 1,
                    name
                )));
            }
        }
    }
    Ok(())
}
