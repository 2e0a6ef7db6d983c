//! Indentation-driven block parsing.
//!
//! A block is a run of lines parsed into one [`Node`]. Each `key: value`
//! line is classified by its value text:
//!
//! - empty: the following content decides between a sequence (`- item`
//!   lines) and a nested block (deeper indentation)
//! - `|` or `>`: a literal or folded multiline string
//! - anything else: a scalar or inline collection (see [`parse_value`])
//!
//! Nested blocks are parsed by recursive calls on sub-slices. Every call
//! reports how many lines it consumed and the caller moves its own cursor.

use tracing::trace;

use crate::value::{Node, Value};

use super::line::Line;
use super::scalar::{is_wrapped, parse_value};
use super::ParseOptions;

/// Multiline string style selected by the block indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockStyle {
    /// `|`: keep line breaks.
    Literal,
    /// `>`: fold line breaks into spaces.
    Folded,
}

impl BlockStyle {
    fn from_indicator(value: &str) -> Option<Self> {
        if value.starts_with('|') {
            Some(BlockStyle::Literal)
        } else if value.starts_with('>') {
            Some(BlockStyle::Folded)
        } else {
            None
        }
    }
}

/// Parses slices of [`Line`]s into [`Node`]s.
#[derive(Debug, Clone, Default)]
pub struct BlockParser {
    options: ParseOptions,
}

impl BlockParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse a block, stopping at the first `---` divider.
    ///
    /// A divider before any content is a leading marker and is skipped.
    /// Returns the node and the number of lines consumed; when parsing
    /// stopped at a divider, the count is the divider's index.
    pub fn parse_block(&self, lines: &[Line<'_>]) -> (Node, usize) {
        self.parse_lines(lines, true)
    }

    /// Like [`parse_block`](Self::parse_block), but a divider ends the
    /// block even before any content.
    pub(crate) fn parse_lines(
        &self,
        lines: &[Line<'_>],
        skip_leading_divider: bool,
    ) -> (Node, usize) {
        let mut node = Node::new();
        let mut seen_content = false;
        let mut i = 0;

        while i < lines.len() {
            let line = &lines[i];

            if !line.is_content() {
                i += 1;
                continue;
            }

            if line.is_divider() {
                if skip_leading_divider && !seen_content {
                    i += 1;
                    continue;
                }
                break;
            }
            seen_content = true;

            let Some((key, value)) = line.trimmed().split_once(':') else {
                i += 1;
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            let (parsed, next) = if value.is_empty() {
                self.parse_child(lines, i)
            } else if let Some(style) = BlockStyle::from_indicator(value) {
                self.parse_block_scalar(lines, i, style)
            } else {
                (parse_value(value), i + 1)
            };

            node.insert(key, parsed);
            i = next;
        }

        (node, i)
    }

    /// Resolve the value of `key:` at `lines[at]` from the lines after it.
    ///
    /// Returns the value and the index of the first unconsumed line.
    fn parse_child(&self, lines: &[Line<'_>], at: usize) -> (Value, usize) {
        let Some(first) = next_content(lines, at + 1) else {
            return (Value::Null, at + 1);
        };

        let next = &lines[first];
        if next.is_list_item() {
            trace!(line = at, "sequence");
            let (items, end) = self.parse_sequence(lines, first);
            (Value::Sequence(items), end)
        } else if next.indent() > lines[at].indent() {
            let end = nested_block_end(lines, first, next.indent());
            trace!(line = at, lines = end - first, "nested block");
            let (child, _) = self.parse_block(&lines[first..end]);
            (Value::Node(child), end)
        } else {
            (Value::Null, at + 1)
        }
    }

    /// Consume a run of `- item` lines starting at `lines[start]`.
    ///
    /// The run ends at a blank line, a divider, or any other non-item line;
    /// that line is left for the caller.
    fn parse_sequence(&self, lines: &[Line<'_>], start: usize) -> (Vec<Value>, usize) {
        let mut items = Vec::new();
        let mut i = start;

        while i < lines.len() {
            let line = &lines[i];

            if line.is_blank() {
                break;
            }
            if line.is_comment() {
                i += 1;
                continue;
            }
            if !line.is_list_item() {
                break;
            }

            let text = line.item_text();
            if text.contains(':') && !is_wrapped(text) {
                let (item, consumed) = self.parse_item_block(line, &lines[i + 1..]);
                items.push(Value::Node(item));
                i += consumed;
            } else {
                items.push(parse_value(text));
                i += 1;
            }
        }

        (items, i)
    }

    /// Parse a `- key: value` item and its continuation lines as a mapping.
    ///
    /// The dash becomes a space, so the item's own keys set the indentation
    /// the continuation lines must reach. Stops at a blank line or a
    /// shallower line (which includes the next item of the same sequence).
    fn parse_item_block<'a>(&self, head: &Line<'a>, rest: &[Line<'a>]) -> (Node, usize) {
        let head = head.without_dash(self.options.tab_width);
        let threshold = head.indent();

        let mut block = vec![head];
        block.extend(
            rest.iter()
                .take_while(|l| !l.is_blank() && l.indent() >= threshold)
                .cloned(),
        );

        let consumed = block.len();
        let (node, _) = self.parse_block(&block);
        (node, consumed)
    }

    /// Collect a `|` or `>` multiline string following `lines[at]`.
    fn parse_block_scalar(
        &self,
        lines: &[Line<'_>],
        at: usize,
        style: BlockStyle,
    ) -> (Value, usize) {
        let key_indent = lines[at].indent();
        let threshold = match lines[at + 1..].iter().find(|l| !l.is_blank()) {
            Some(first) if first.indent() > key_indent => first.indent(),
            _ => return (Value::String(String::new()), at + 1),
        };

        let mut segments: Vec<&str> = Vec::new();
        let mut pending_blanks = 0;
        let mut end = at + 1;

        for (i, line) in lines.iter().enumerate().skip(at + 1) {
            if line.is_blank() {
                pending_blanks += 1;
                continue;
            }
            if line.indent() < threshold {
                break;
            }
            segments.extend(std::iter::repeat("").take(pending_blanks));
            pending_blanks = 0;
            segments.push(line.trimmed());
            end = i + 1;
        }

        trace!(line = at, ?style, lines = end - at - 1, "block scalar");

        let text = match style {
            BlockStyle::Literal => segments.join("\n"),
            BlockStyle::Folded => fold(&segments),
        };
        (Value::String(text), end)
    }
}

/// Join folded lines: a paragraph's lines are joined with a space and each
/// blank segment becomes a line break.
fn fold(segments: &[&str]) -> String {
    let mut out = String::new();
    let mut after_text = false;

    for segment in segments {
        if segment.is_empty() {
            out.push('\n');
            after_text = false;
        } else {
            if after_text {
                out.push(' ');
            }
            out.push_str(segment);
            after_text = true;
        }
    }

    out
}

/// Index of the next content line at or after `from`.
fn next_content(lines: &[Line<'_>], from: usize) -> Option<usize> {
    (from..lines.len()).find(|&i| lines[i].is_content())
}

/// End (exclusive) of a nested block starting at `start` whose lines are
/// indented at least `threshold`.
///
/// `#` lines at the block's depth belong to it, since they may be text of
/// a multiline string inside the block. Blank lines and shallower comments
/// are kept only when more block lines follow them.
fn nested_block_end(lines: &[Line<'_>], start: usize, threshold: usize) -> usize {
    let mut end = start;
    for (i, line) in lines.iter().enumerate().skip(start) {
        if line.is_blank() {
            continue;
        }
        if line.indent() < threshold {
            if line.is_comment() {
                continue;
            }
            break;
        }
        end = i + 1;
    }
    end
}
