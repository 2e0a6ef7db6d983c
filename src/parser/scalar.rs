//! Scalar and inline collection parsing.
//!
//! Every leaf value goes through [`parse_value`]. The checks run in a fixed
//! order and the first match wins:
//!
//! 1. empty text is null
//! 2. `true` / `false` (any case) are booleans
//! 3. base-10 `i64` text is an integer
//! 4. `f64` text is a float
//! 5. `'…'` and `"…"` are strings with the quotes removed, no escapes
//! 6. `{k: v, …}` is an inline mapping
//! 7. `[a, b, …]` is an inline sequence
//! 8. anything else is the literal string
//!
//! Inline collections split on every comma, so commas inside nested
//! collections or quoted strings are not protected.

use crate::value::{Node, Value};

/// Classify a trimmed value token. Never fails.
pub fn parse_value(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }

    if text.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if text.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }

    if let Ok(i) = text.parse::<i64>() {
        return Value::Integer(i);
    }
    if let Ok(x) = text.parse::<f64>() {
        return Value::Float(x);
    }

    if let Some(inner) = strip_pair(text, '\'', '\'').or_else(|| strip_pair(text, '"', '"')) {
        return Value::String(inner.to_string());
    }

    if let Some(inner) = strip_pair(text, '{', '}') {
        return Value::Node(parse_inline_node(inner));
    }
    if let Some(inner) = strip_pair(text, '[', ']') {
        return Value::Sequence(parse_inline_sequence(inner));
    }

    Value::String(text.to_string())
}

/// True when the text is one quoted string or inline collection whose
/// first `:` (if any) sits inside the pair.
///
/// `'k: v'` is wrapped; `"k": "v"` is a key/value pair that merely starts
/// and ends with a quote.
pub(crate) fn is_wrapped(text: &str) -> bool {
    [('\'', '\''), ('"', '"'), ('{', '}'), ('[', ']')]
        .iter()
        .any(|&(open, close)| match strip_pair(text, open, close) {
            Some(inner) => match inner.find(':') {
                Some(colon) => !inner[..colon].contains(close),
                None => true,
            },
            None => false,
        })
}

/// Strip a matching open/close pair. A lone delimiter is not a pair.
fn strip_pair(text: &str, open: char, close: char) -> Option<&str> {
    if text.len() < 2 {
        return None;
    }
    text.strip_prefix(open)?.strip_suffix(close)
}

fn parse_inline_node(inner: &str) -> Node {
    let mut node = Node::new();
    for pair in inner.split(',') {
        let Some((key, value)) = pair.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        node.insert(key, parse_value(value.trim()));
    }
    node
}

fn parse_inline_sequence(inner: &str) -> Vec<Value> {
    if inner.trim().is_empty() {
        return Vec::new();
    }
    inner.split(',').map(|item| parse_value(item.trim())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_null() {
        assert_eq!(parse_value(""), Value::Null);
    }

    #[test]
    fn test_booleans_any_case() {
        assert_eq!(parse_value("true"), Value::Bool(true));
        assert_eq!(parse_value("FALSE"), Value::Bool(false));
        assert_eq!(parse_value("True"), Value::Bool(true));
        assert_eq!(parse_value("tRuE"), Value::Bool(true));
    }

    #[test]
    fn test_integer_before_float() {
        assert_eq!(parse_value("10"), Value::Integer(10));
        assert_eq!(parse_value("-42"), Value::Integer(-42));
        assert_eq!(parse_value("+7"), Value::Integer(7));
        assert_eq!(parse_value("10.5"), Value::Float(10.5));
        assert_eq!(parse_value("1e3"), Value::Float(1000.0));
    }

    #[test]
    fn test_integer_overflow_falls_back_to_float() {
        assert_eq!(
            parse_value("99999999999999999999"),
            Value::Float(99999999999999999999.0)
        );
    }

    #[test]
    fn test_quoted_strings_no_escapes() {
        assert_eq!(parse_value("'10'"), Value::from("10"));
        assert_eq!(parse_value("\"true\""), Value::from("true"));
        assert_eq!(parse_value(r#""a\nb""#), Value::from(r"a\nb"));
        assert_eq!(parse_value("'it's'"), Value::from("it's"));
        assert_eq!(parse_value("''"), Value::from(""));
    }

    #[test]
    fn test_lone_quote_is_plain_string() {
        assert_eq!(parse_value("'"), Value::from("'"));
        assert_eq!(parse_value("\""), Value::from("\""));
    }

    #[test]
    fn test_mismatched_quotes_are_plain() {
        assert_eq!(parse_value("'abc\""), Value::from("'abc\""));
    }

    #[test]
    fn test_inline_node() {
        let value = parse_value("{c: v4, d: 5, e: [1, 2]}");

        let node = value.as_node().unwrap();
        assert_eq!(node.get("c"), Some(&Value::from("v4")));
        assert_eq!(node.get("d"), Some(&Value::Integer(5)));
        // naive split: the sequence is cut at its comma
        assert_eq!(node.get("e"), Some(&Value::from("[1")));
        assert_eq!(node.len(), 3);
    }

    #[test]
    fn test_inline_node_skips_segments_without_colon() {
        let node = parse_value("{a: 1, junk, : 2}");

        assert_eq!(node, Value::Node([("a", 1i64)].into_iter().collect()));
    }

    #[test]
    fn test_empty_inline_collections() {
        assert_eq!(parse_value("{}"), Value::Node(Node::new()));
        assert_eq!(parse_value("[]"), Value::Sequence(vec![]));
        assert_eq!(parse_value("[ ]"), Value::Sequence(vec![]));
    }

    #[test]
    fn test_inline_sequence_types_each_element() {
        assert_eq!(
            parse_value("[v1, 2, 3.5, true, 'x', ]"),
            Value::Sequence(vec![
                Value::from("v1"),
                Value::Integer(2),
                Value::Float(3.5),
                Value::Bool(true),
                Value::from("x"),
                Value::Null,
            ])
        );
    }

    #[test]
    fn test_plain_string() {
        assert_eq!(parse_value("hello world"), Value::from("hello world"));
        assert_eq!(parse_value("http://x:80"), Value::from("http://x:80"));
    }

    #[test]
    fn test_canonical_text_reclassifies() {
        for value in [
            Value::Integer(-3),
            Value::Float(2.0),
            Value::Float(0.125),
            Value::Bool(false),
            Value::from("plain text"),
        ] {
            assert_eq!(parse_value(&value.to_string()), value);
        }
    }

    #[test]
    fn test_is_wrapped() {
        assert!(is_wrapped("{a: 1}"));
        assert!(is_wrapped("'a: b'"));
        assert!(!is_wrapped("a: b"));
        assert!(!is_wrapped("'"));
        assert!(!is_wrapped("\"k\": \"v\""));
        assert!(!is_wrapped("'k': 'v'"));
        assert!(is_wrapped("{a: {b: 1}}"));
    }
}
