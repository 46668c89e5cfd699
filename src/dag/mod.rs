// src/dag/mod.rs

//! In-memory model of a DAGMan input file.
//!
//! - [`node`] holds `JOB` entries, their submit descriptions and directives.
//! - [`graph`] holds the node sequence, `PARENT`/`CHILD` edges and the
//!   writer for the whole file.

pub mod graph;
pub mod node;

pub use graph::Dag;
pub use node::{Directive, Node, Submit};
