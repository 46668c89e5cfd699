// src/macros.rs

use std::fmt;

use indexmap::IndexMap;
use indexmap::map::Iter;

/// Macros for a node's `VARS` directive.
///
/// Keys keep insertion order. Inserting an existing key replaces its value
/// without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Macros {
    vars: IndexMap<String, String>,
}

impl Macros {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a macro, returning the previous value for `key` if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl fmt::Display) -> Option<String> {
        self.vars.insert(key.into(), value.to_string())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, String> {
        self.vars.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Macros
where
    K: Into<String>,
    V: fmt::Display,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut macros = Macros::new();
        for (key, value) in iter {
            macros.insert(key, value);
        }
        macros
    }
}

impl<'a> IntoIterator for &'a Macros {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.iter()
    }
}

/// Renders `key="value"` pairs separated by single spaces.
///
/// `"` and `\` inside values are backslash-escaped so the line stays valid
/// for the `VARS` parser.
impl fmt::Display for Macros {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.vars.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}=\"{}\"", escape_value(value))?;
        }
        Ok(())
    }
}

fn escape_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
