// src/config/mod.rs

//! TOML front-end for describing a DAG.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a description from disk (`loader.rs`).
//! - Validate node names, dependencies and acyclicity (`validate.rs`).
//! - Build the in-memory [`Dag`](crate::dag::Dag) (`build.rs`).

pub mod build;
pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from, load_from_path};
pub use model::{
    DagFile, DagSection, DependencyConfig, InlineSubmitConfig, NodeConfig, RawDagFile,
    ScalarValue, ScriptConfig, SubmitConfig,
};
