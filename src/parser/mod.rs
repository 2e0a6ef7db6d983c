//! Parser for the supported YAML subset.
//!
//! The parser is permissive: it never fails. Lines it does not understand
//! are skipped and values it cannot classify are kept as strings.
//!
//! # Supported syntax
//!
//! - `key: value` block mappings, nested by indentation
//! - `- item` block sequences, including `- key: value` mapping items
//! - `{a: 1}` and `[a, b]` inline collections (split naively on commas)
//! - quoted and plain scalars, booleans, integers and floats
//! - `|` literal and `>` folded multiline strings
//! - `#` comment lines and `---` document dividers
//!
//! # Usage
//!
//! ```
//! use simpleyaml::parse;
//!
//! let doc = parse("server:\n  host: localhost\n  ports: [80, 443]");
//!
//! assert_eq!(doc.path("server.host").and_then(|v| v.as_str()), Some("localhost"));
//! assert_eq!(doc.path("server.ports[1]").and_then(|v| v.as_i64()), Some(443));
//! ```

mod block;
mod document;
pub mod line;
mod scalar;

pub use block::BlockParser;
pub use line::{indent_width, Line, DEFAULT_TAB_WIDTH};
pub use scalar::parse_value;

use crate::value::Node;

/// Parser settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Indentation units counted for a tab character.
    pub tab_width: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

/// Parser with explicit options.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    block: BlockParser,
}

impl Parser {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            block: BlockParser::new(options),
        }
    }

    /// Parse the first document.
    pub fn parse(&self, source: &str) -> Node {
        document::parse_first(&self.block, source)
    }

    /// Parse every `---`-separated document.
    pub fn parse_documents(&self, source: &str) -> Vec<Node> {
        document::parse_all(&self.block, source)
    }

    /// Parse pre-split lines as a single block.
    pub fn parse_block(&self, lines: &[&str]) -> Node {
        let tab_width = self.block.options().tab_width;
        let lines: Vec<Line<'_>> = lines.iter().map(|l| Line::new(*l, tab_width)).collect();
        self.block.parse_block(&lines).0
    }
}

/// Parse the first document of `source` with default options.
pub fn parse(source: &str) -> Node {
    Parser::default().parse(source)
}

/// Parse every document of `source` with default options.
pub fn parse_documents(source: &str) -> Vec<Node> {
    Parser::default().parse_documents(source)
}

/// Parse pre-split lines as a single block with default options.
pub fn parse_block(lines: &[&str]) -> Node {
    Parser::default().parse_block(lines)
}
