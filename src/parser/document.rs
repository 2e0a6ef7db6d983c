//! Document splitting.
//!
//! Input may hold several documents separated by `---` lines. A divider
//! before any content is only a start marker.

use tracing::debug;

use crate::value::Node;

use super::block::BlockParser;
use super::line::Line;

/// Parse the first document of `source`.
pub(crate) fn parse_first(parser: &BlockParser, source: &str) -> Node {
    let lines = Line::split(source, parser.options().tab_width);
    parser.parse_block(&lines).0
}

/// Parse every document of `source`.
///
/// A divider with nothing after it does not start a new document; an
/// empty document between two dividers is kept as an empty node.
pub(crate) fn parse_all(parser: &BlockParser, source: &str) -> Vec<Node> {
    let lines = Line::split(source, parser.options().tab_width);
    let mut documents = Vec::new();

    let (first, mut pos) = parser.parse_block(&lines);
    documents.push(first);

    // pos now points at a divider, or past the end
    while pos < lines.len() {
        let rest = &lines[pos + 1..];
        if !rest.iter().any(Line::is_content) {
            break;
        }
        let (node, consumed) = parser.parse_lines(rest, false);
        documents.push(node);
        pos += 1 + consumed;
    }

    debug!(documents = documents.len(), lines = lines.len(), "parsed documents");
    documents
}
