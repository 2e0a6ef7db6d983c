//! The parsed document tree.
//!
//! A document is a [`Node`]: a string-keyed mapping whose values are
//! [`Value`]s. Values are either scalars, ordered sequences, or nested nodes.

use std::fmt;

use indexmap::IndexMap;

use crate::path;

/// A typed value stored in a [`Node`] or a sequence.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Empty value (`key:` with nothing after it).
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    /// Block (`- item`) or inline (`[a, b]`) sequence.
    Sequence(Vec<Value>),
    /// Block or inline (`{a: 1}`) mapping.
    Node(Node),
}

impl Value {
    /// Name of the variant, for messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Node(_) => "mapping",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True for everything except sequences and nodes.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Value::Sequence(_) | Value::Node(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Float value; integers are widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            // Debug keeps the fractional part of integral floats ("2.0"),
            // so the text classifies as a float again.
            Value::Float(x) => write!(f, "{:?}", x),
            Value::String(s) => write!(f, "{}", s),
            Value::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Node(node) => write!(f, "{}", node),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Value::Node(node)
    }
}

/// A string-keyed mapping.
///
/// Keys keep the order they were first seen in, which is only used for
/// display and listing; equality ignores order. Inserting an existing key
/// replaces its value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node {
    entries: IndexMap<String, Value>,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing (and returning) any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Look up a value by path expression, e.g. `servers[0].host`.
    ///
    /// Returns `None` when the path does not resolve or resolves to null.
    pub fn path(&self, expr: &str) -> Option<&Value> {
        path::resolve(self, expr)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        write!(f, "}}")
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Node {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut node = Node::new();
        for (key, value) in iter {
            node.insert(key, value);
        }
        node
    }
}

impl IntoIterator for Node {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_equality_ignores_order() {
        let a: Node = [("x", 1i64), ("y", 2i64)].into_iter().collect();
        let b: Node = [("y", 2i64), ("x", 1i64)].into_iter().collect();

        assert_eq!(a, b);
    }

    #[test]
    fn test_insert_last_wins() {
        let mut node = Node::new();
        node.insert("a", "first");
        let previous = node.insert("a", "second");

        assert_eq!(previous, Some(Value::from("first")));
        assert_eq!(node.get("a"), Some(&Value::from("second")));
        assert_eq!(node.len(), 1);
    }

    #[test]
    fn test_keys_keep_first_seen_order() {
        let mut node = Node::new();
        node.insert("b", 1i64);
        node.insert("a", 2i64);
        node.insert("b", 3i64);

        assert_eq!(node.keys().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from(3i64).as_i64(), Some(3));
        assert_eq!(Value::from(3i64).as_f64(), Some(3.0));
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert_eq!(Value::from("x").as_i64(), None);
        assert!(Value::Null.is_null());
        assert!(Value::Null.is_scalar());
        assert!(!Value::Sequence(vec![]).is_scalar());
        assert_eq!(Value::Node(Node::new()).type_name(), "mapping");
    }

    #[test]
    fn test_display_scalars() {
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from(-7i64).to_string(), "-7");
        assert_eq!(Value::from(2.0).to_string(), "2.0");
        assert_eq!(Value::from(10.5).to_string(), "10.5");
        assert_eq!(Value::from("plain").to_string(), "plain");
        assert_eq!(Value::Null.to_string(), "null");
    }

    #[test]
    fn test_display_collections() {
        let mut inner = Node::new();
        inner.insert("c", 1i64);
        let value = Value::Sequence(vec![Value::from("a"), Value::Node(inner)]);

        assert_eq!(value.to_string(), "[a, {c: 1}]");
    }
}
