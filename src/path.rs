//! Path expressions over parsed documents.
//!
//! A path is a list of `.`-separated segments. Each segment is a key, or a
//! key followed by a sequence index: `servers[0].host`. There is no
//! escaping, so keys containing `.`, `[` or `]` cannot be addressed.

use std::fmt;
use std::str::FromStr;

use miette::Diagnostic;
use thiserror::Error;

use crate::value::{Node, Value};

/// Error for a malformed path segment.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("Invalid index '{index}' in path segment '{segment}'")]
    #[diagnostic(
        code(simpleyaml::path::index),
        help("Sequence indices are non-negative integers, e.g. items[0]")
    )]
    InvalidIndex { segment: String, index: String },

    #[error("Misplaced brackets in path segment '{segment}'")]
    #[diagnostic(
        code(simpleyaml::path::brackets),
        help("Write indexed segments as key[index]")
    )]
    Brackets { segment: String },
}

/// One step of a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// `key`
    Key(String),
    /// `key[index]`
    Index { key: String, index: usize },
}

impl Segment {
    fn parse(segment: &str) -> Result<Self, PathError> {
        let (Some(open), Some(close)) = (segment.find('['), segment.find(']')) else {
            return Ok(Segment::Key(segment.to_string()));
        };

        if close < open {
            return Err(PathError::Brackets {
                segment: segment.to_string(),
            });
        }

        let index_text = &segment[open + 1..close];
        let index = index_text
            .parse::<usize>()
            .map_err(|_| PathError::InvalidIndex {
                segment: segment.to_string(),
                index: index_text.to_string(),
            })?;

        Ok(Segment::Index {
            key: segment[..open].to_string(),
            index,
        })
    }

    pub fn key(&self) -> &str {
        match self {
            Segment::Key(key) | Segment::Index { key, .. } => key,
        }
    }

    /// Look up this segment in `node`.
    fn lookup<'a>(&self, node: &'a Node) -> Option<&'a Value> {
        match self {
            Segment::Key(key) => node.get(key),
            Segment::Index { key, index } => node.get(key)?.as_sequence()?.get(*index),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => write!(f, "{}", key),
            Segment::Index { key, index } => write!(f, "{}[{}]", key, index),
        }
    }
}

/// A parsed path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathExpr {
    segments: Vec<Segment>,
}

impl PathExpr {
    /// Parse a path expression, rejecting malformed indices.
    pub fn parse(path: &str) -> Result<Self, PathError> {
        let segments = path
            .split('.')
            .map(Segment::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Walk `node` along this path.
    ///
    /// Returns `None` if any step is missing, out of range, indexes
    /// something that is not a sequence, descends into something that is not
    /// a mapping, or reaches a null value.
    pub fn resolve<'a>(&self, node: &'a Node) -> Option<&'a Value> {
        let mut current = Some(node);
        let mut value = None;

        for segment in &self.segments {
            let found = segment.lookup(current?)?;
            if found.is_null() {
                return None;
            }
            current = found.as_node();
            value = Some(found);
        }

        value
    }
}

impl FromStr for PathExpr {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PathExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

/// Resolve `path` against `node`.
///
/// Malformed paths and missing values both give `None`, as does a value
/// that is explicitly null.
pub fn resolve<'a>(node: &'a Node, path: &str) -> Option<&'a Value> {
    PathExpr::parse(path).ok()?.resolve(node)
}

/// List the path of every leaf under `node`, in document order.
///
/// Leaves are scalars, empty collections, and sequences nested directly in
/// sequences (which the path syntax cannot descend into).
pub fn leaf_paths(node: &Node) -> Vec<(String, &Value)> {
    let mut leaves = Vec::new();
    collect_node(node, "", &mut leaves);
    leaves
}

/// Like [`leaf_paths`], for any value, with every path prefixed by `prefix`.
pub fn leaf_paths_of<'a>(value: &'a Value, prefix: &str) -> Vec<(String, &'a Value)> {
    let mut leaves = Vec::new();
    collect_value(value, prefix, &mut leaves);
    leaves
}

fn collect_node<'a>(node: &'a Node, prefix: &str, out: &mut Vec<(String, &'a Value)>) {
    for (key, value) in node.iter() {
        let path = if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", prefix, key)
        };
        collect_value(value, &path, out);
    }
}

fn collect_value<'a>(value: &'a Value, path: &str, out: &mut Vec<(String, &'a Value)>) {
    match value {
        Value::Node(node) if !node.is_empty() => collect_node(node, path, out),
        Value::Sequence(items) if !items.is_empty() => {
            for (i, item) in items.iter().enumerate() {
                let item_path = format!("{}[{}]", path, i);
                match item {
                    Value::Node(child) if !child.is_empty() => collect_node(child, &item_path, out),
                    _ => out.push((item_path, item)),
                }
            }
        }
        _ => out.push((path.to_string(), value)),
    }
}
