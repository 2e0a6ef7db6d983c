//! Input lines and indentation.

use std::borrow::Cow;

/// Indentation width used for tabs unless configured otherwise.
pub const DEFAULT_TAB_WIDTH: usize = 8;

/// A single input line with its measured indentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    text: Cow<'a, str>,
    indent: usize,
}

impl<'a> Line<'a> {
    pub fn new(text: impl Into<Cow<'a, str>>, tab_width: usize) -> Self {
        let text = text.into();
        let indent = indent_width(&text, tab_width);
        Self { text, indent }
    }

    /// Split source text into lines.
    pub fn split(source: &'a str, tab_width: usize) -> Vec<Line<'a>> {
        source.lines().map(|l| Line::new(l, tab_width)).collect()
    }

    /// The raw line text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    /// The line with surrounding whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    pub fn is_comment(&self) -> bool {
        self.trimmed().starts_with('#')
    }

    /// Blank and comment lines carry no content.
    pub fn is_content(&self) -> bool {
        !self.is_blank() && !self.is_comment()
    }

    /// A `---` document divider.
    pub fn is_divider(&self) -> bool {
        self.trimmed() == "---"
    }

    /// A `- item` line. Dividers are never list items.
    pub fn is_list_item(&self) -> bool {
        self.trimmed().starts_with('-') && !self.is_divider()
    }

    /// The text after the leading `-` of a list item, trimmed.
    pub fn item_text(&self) -> &str {
        let trimmed = self.trimmed();
        trimmed.strip_prefix('-').unwrap_or(trimmed).trim()
    }

    /// Replace the first `-` with a space, turning `  - key: v` into
    /// `    key: v` so the item body reads as an indented mapping line.
    pub fn without_dash(&self, tab_width: usize) -> Line<'a> {
        Line::new(self.text.replacen('-', " ", 1), tab_width)
    }
}

/// Count leading indentation: a space is one unit, a tab is `tab_width` units.
///
/// Mixed runs are summed as-is; no tab stops are applied.
pub fn indent_width(text: &str, tab_width: usize) -> usize {
    let mut indent: usize = 0;
    for c in text.chars() {
        match c {
            ' ' => indent = indent.saturating_add(1),
            '\t' => indent = indent.saturating_add(tab_width),
            _ => break,
        }
    }
    indent
}
