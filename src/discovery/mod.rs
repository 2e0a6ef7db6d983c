//! Configuration lookup and file loading for the command-line tool.
//!
//! # Example
//!
//! ```no_run
//! use simpleyaml::discovery::{discover, load_manifest, read_documents};
//!
//! let manifest = load_manifest(None)?;
//! let scan = discover(&[], &manifest);
//! for file in &scan.files {
//!     let documents = read_documents(file, &manifest)?;
//!     println!("{}: {} document(s)", file.display(), documents.len());
//! }
//! # Ok::<(), simpleyaml::YamlError>(())
//! ```

mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, YamlError};
use crate::parser::Parser;
use crate::value::Node;

pub use manifest::Manifest;
pub use scanner::{scan_directory, scan_paths, ScanResult};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "simpleyaml.yaml";

/// Load the manifest.
///
/// An explicit path must exist. Without one, `simpleyaml.yaml` in the
/// current directory is used if present, otherwise the defaults.
pub fn load_manifest(explicit: Option<&Path>) -> Result<Manifest> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(YamlError::Config {
                message: format!("Manifest not found: {}", path.display()),
                help: Some(format!("Create it or drop --config to use {}", MANIFEST_FILENAME)),
            });
        }
        return Manifest::load(path);
    }

    load_manifest_in(Path::new("."))
}

/// Load `simpleyaml.yaml` from `dir`, or the defaults if it is absent.
pub fn load_manifest_in(dir: &Path) -> Result<Manifest> {
    let path = dir.join(MANIFEST_FILENAME);
    if path.is_file() {
        debug!(path = %path.display(), "loading manifest");
        Manifest::load(&path)
    } else {
        Ok(Manifest::default())
    }
}

/// Find the files to process. No paths means the current directory.
pub fn discover(paths: &[PathBuf], manifest: &Manifest) -> ScanResult {
    if paths.is_empty() {
        scan_directory(Path::new("."), manifest)
    } else {
        scan_paths(paths, manifest)
    }
}

/// Read and parse every document in a file.
pub fn read_documents(path: &Path, manifest: &Manifest) -> Result<Vec<Node>> {
    let source = read_source(path)?;
    Ok(Parser::new(manifest.parse_options()).parse_documents(&source))
}

/// Read a file and parse one of its documents (0-based).
///
/// Returns `None` if the file has fewer documents.
pub fn read_document(path: &Path, manifest: &Manifest, index: usize) -> Result<Option<Node>> {
    Ok(read_documents(path, manifest)?.into_iter().nth(index))
}

fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| YamlError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
