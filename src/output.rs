//! Status reporting for the `check` command.
//!
//! Each reported file gets one line on stderr: a right-aligned verb
//! followed by the file and its counts. Values and path listings from
//! `get` and `paths` go to stdout and never pass through here.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Verb column width, wide enough for "Checked" and "Skipped" with room to spare.
const VERB_WIDTH: usize = 12;

/// How a reported line should be coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Warn,
    Fail,
}

impl Level {
    fn color(self) -> &'static str {
        match self {
            Level::Ok => "\x1b[32m",
            Level::Warn => "\x1b[33m",
            Level::Fail => "\x1b[31m",
        }
    }
}

/// Writes status lines to stderr, coloured only on a terminal.
pub struct Printer {
    color: bool,
}

impl Printer {
    pub fn new() -> Self {
        Self::with_color(io::stderr().is_terminal())
    }

    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    /// `      Parsed config.yaml (2 documents, 14 keys)`
    pub fn status(&self, verb: &str, message: &str) {
        self.report(Level::Ok, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.report(Level::Warn, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.report(Level::Fail, verb, message);
    }

    /// Secondary detail, such as the counts after a file name.
    pub fn dim(&self, text: &str) -> String {
        if self.color {
            format!("{DIM}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    pub fn report(&self, level: Level, verb: &str, message: &str) {
        let line = self.format_line(level, verb, message);
        let _ = writeln!(io::stderr().lock(), "{line}");
    }

    fn format_line(&self, level: Level, verb: &str, message: &str) -> String {
        if self.color {
            let color = level.color();
            format!("{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}")
        } else {
            format!("{verb:>VERB_WIDTH$} {message}")
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// `plural(1, "key", "keys")` is "1 key", any other count takes the plural.
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    let noun = if n == 1 { singular } else { pluralized };
    format!("{n} {noun}")
}

/// The path relative to the working directory, or as given when it lies
/// outside it. The working directory itself shows as `.`.
pub fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));

    match relative {
        Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Some(rel) => rel.display().to_string(),
        None => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "document", "documents"), "1 document");
        assert_eq!(plural(0, "key", "keys"), "0 keys");
        assert_eq!(plural(5, "file", "files"), "5 files");
    }

    #[test]
    fn test_plain_line_is_right_aligned() {
        let printer = Printer::with_color(false);

        assert_eq!(
            printer.format_line(Level::Ok, "Parsed", "a.yaml"),
            "      Parsed a.yaml"
        );
        assert_eq!(printer.dim("(1 key)"), "(1 key)");
    }

    #[test]
    fn test_coloured_line_uses_level_colour() {
        let printer = Printer::with_color(true);
        let line = printer.format_line(Level::Fail, "Failed", "b.yaml");

        assert!(line.starts_with("\x1b[1m\x1b[31m"));
        assert!(line.ends_with(" b.yaml"));
    }

    #[test]
    fn test_display_path_outside_cwd() {
        let p = Path::new("/nonexistent/path/to/file.yaml");
        assert_eq!(display_path(p), "/nonexistent/path/to/file.yaml");
    }

    #[test]
    fn test_display_path_of_cwd() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(display_path(&cwd), ".");
    }
}
