// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod macros;
pub mod script;
pub mod submit;

pub use dag::{Dag, Directive, Node, Submit};
pub use errors::{DagmanError, Result};
pub use macros::Macros;
pub use script::Script;
pub use submit::{SubmitDescription, SubmitDescriptor};

use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::config::load_and_validate;
use crate::fs::{FileSystem, RealFileSystem};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - loading + validating the TOML description
/// - building the DAG
/// - printing it (`--dry-run`) or writing it and its inline submit files
pub fn run(args: CliArgs) -> anyhow::Result<()> {
    let mut cfg = load_and_validate(&args.config)?;
    if let Some(output) = args.output {
        cfg = cfg.with_filename(output);
    }

    let mut dag = cfg.to_dag()?;

    if args.dry_run {
        println!("{dag}");
        debug!("dry-run complete (nothing written)");
        return Ok(());
    }

    write_dag(&mut dag, &RealFileSystem)?;
    Ok(())
}

/// Persist `dag` through `fs`, warning about `JOB` lines that point at
/// submit files which do not exist yet.
pub fn write_dag(dag: &mut Dag, fs: &dyn FileSystem) -> Result<()> {
    for path in dag.missing_submit_files(fs) {
        warn!(path = %path.display(), "referenced submit file does not exist");
    }

    dag.dump(fs)?;
    info!(path = %dag.filename().display(), "done");
    Ok(())
}
