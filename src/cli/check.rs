//! Check command implementation.
//!
//! Parses every discovered file and reports document and key counts.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{discover, read_documents, Manifest};
use crate::error::{Result, YamlError};
use crate::output::{display_path, plural, Printer};
use crate::value::Node;

/// Parse files and report what was found
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files or directories to scan (default: current directory)
    pub files: Vec<PathBuf>,
}

/// Counts for one parsed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSummary {
    pub documents: usize,
    /// Top-level keys across all documents.
    pub keys: usize,
}

impl FileSummary {
    pub fn of(documents: &[Node]) -> Self {
        Self {
            documents: documents.len(),
            keys: documents.iter().map(Node::len).sum(),
        }
    }
}

pub fn run(args: CheckArgs, manifest: &Manifest, printer: &Printer) -> Result<()> {
    let scan = discover(&args.files, manifest);
    let mut first_error = None;

    for path in &scan.missing {
        printer.error("Missing", &display_path(path));
        first_error.get_or_insert_with(|| missing_error(path));
    }

    if scan.is_empty() {
        printer.warning("Skipped", "no YAML files found");
    }

    for file in &scan.files {
        match read_documents(file, manifest) {
            Ok(documents) => {
                let summary = FileSummary::of(&documents);
                let detail = format!(
                    "({}, {})",
                    plural(summary.documents, "document", "documents"),
                    plural(summary.keys, "key", "keys")
                );
                printer.status(
                    "Parsed",
                    &format!("{} {}", display_path(file), printer.dim(&detail)),
                );
            }
            Err(e) => {
                printer.error("Failed", &format!("{}: {}", display_path(file), e));
                first_error.get_or_insert(e);
            }
        }
    }

    printer.status("Checked", &plural(scan.files.len(), "file", "files"));

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn missing_error(path: &Path) -> YamlError {
    YamlError::Io {
        path: path.to_path_buf(),
        message: "No such file or directory".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_documents;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_file_summary() {
        let docs = parse_documents("a: 1\nb: 2\n---\nc: 3");

        assert_eq!(
            FileSummary::of(&docs),
            FileSummary {
                documents: 2,
                keys: 3
            }
        );
    }

    #[test]
    fn test_run_on_directory() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.yaml"), "a: 1\n").unwrap();

        let args = CheckArgs {
            files: vec![dir.path().to_path_buf()],
        };

        assert!(run(args, &Manifest::default(), &Printer::new()).is_ok());
    }

    #[test]
    fn test_run_reports_missing_path() {
        let args = CheckArgs {
            files: vec![PathBuf::from("/nonexistent/dir")],
        };

        let result = run(args, &Manifest::default(), &Printer::new());

        assert!(matches!(result, Err(YamlError::Io { .. })));
    }
}
