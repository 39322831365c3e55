//! Edge-list reader.
//!
//! # Supported format
//! - One edge per line: `source:target`. Both sides are trimmed.
//! - Blank lines and lines starting with `#` are skipped silently.
//! - Any other line without exactly one `:` separator, or with an empty
//!   side, is skipped with a logged warning.
//!
//! # Limitations
//! - Node names are plain strings; there is no quoting or escaping, so a
//!   name cannot contain `:`.
//! - Edge weights and attributes are not supported.

use std::io::Read;

use crate::dsm_error::DsmError;
use crate::graph::builder::DirectedGraphBuilder;

/// Reader for `source:target` edge lists.
#[derive(Debug, Default, Clone)]
pub struct EdgeListReader;

impl EdgeListReader {
    /// Read an edge list from `reader` into a graph builder.
    ///
    /// # Errors
    /// [`DsmError::Io`] if the underlying reader fails; malformed lines are
    /// never errors, they are skipped with a `log::warn!`.
    pub fn read<R: Read>(&self, mut reader: R) -> Result<DirectedGraphBuilder<String>, DsmError> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        Ok(self.parse(&contents))
    }

    /// Parse an in-memory edge list into a graph builder.
    ///
    /// # Example
    /// ```rust
    /// use dsm_graph::io::EdgeListReader;
    ///
    /// let g = EdgeListReader.parse("app:lib\nlib:core\n").build();
    /// assert_eq!(g.order(), 3);
    /// assert!(g.connects(&"app".into(), &"lib".into()).unwrap());
    /// ```
    pub fn parse(&self, contents: &str) -> DirectedGraphBuilder<String> {
        let mut builder = DirectedGraphBuilder::new();
        for (number, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let parts: Vec<&str> = line.split(':').collect();
            let &[source, target] = parts.as_slice() else {
                log::warn!("ignoring line {}: expected `source:target`, got {line:?}", number + 1);
                continue;
            };
            let (source, target) = (source.trim(), target.trim());
            if source.is_empty() || target.is_empty() {
                log::warn!("ignoring line {}: empty node name in {line:?}", number + 1);
                continue;
            }
            builder = builder.connect(source.to_string(), target.to_string());
        }
        builder
    }
}
