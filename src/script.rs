// src/script.rs

//! Pre- and post-processing scripts attached to a node.

use std::fmt;

/// A shell script or batch file run before a node's job is submitted
/// (`SCRIPT PRE`) or after it completes (`SCRIPT POST`).
///
/// Arguments are stored in their rendered form. Nothing is quoted or
/// escaped; callers pass arguments exactly as DAGMan should see them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    executable: String,
    arguments: Vec<String>,
}

impl Script {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            arguments: Vec::new(),
        }
    }

    /// Build a script from an executable and an argument list in one go.
    pub fn with_args<I, A>(executable: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: fmt::Display,
    {
        args.into_iter()
            .fold(Self::new(executable), |script, arg| script.arg(arg))
    }

    /// Append one positional argument.
    pub fn arg(mut self, arg: impl fmt::Display) -> Self {
        self.arguments.push(arg.to_string());
        self
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.executable)?;
        for arg in &self.arguments {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
