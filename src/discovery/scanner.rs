//! File system scanner for YAML files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

/// Result of scanning paths for YAML files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Files to parse, in scan order.
    pub files: Vec<PathBuf>,
    /// Paths given on the command line that do not exist.
    pub missing: Vec<PathBuf>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Merge another scan result into this one.
    pub fn merge(&mut self, other: ScanResult) {
        self.files.extend(other.files);
        self.missing.extend(other.missing);
    }
}

/// Recursively scan a directory for files with a configured extension.
///
/// Entries are visited in file name order so output is stable.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.exists() {
        result.missing.push(root.to_path_buf());
        return result;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if path.is_dir() || manifest.is_excluded(path) {
            continue;
        }

        if manifest.has_extension(path) {
            result.files.push(path.to_path_buf());
        }
    }

    result
}

/// Scan a mix of files and directories.
///
/// Files named directly are always included, whatever their extension.
pub fn scan_paths(paths: &[PathBuf], manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    for path in paths {
        if path.is_file() {
            result.files.push(path.clone());
        } else {
            result.merge(scan_directory(path, manifest));
        }
    }

    result
}
