pub mod check;
pub mod completions;
pub mod get;
pub mod paths;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::discovery::{read_document, Manifest};
use crate::error::{Result, YamlError};
use crate::output::display_path;
use crate::value::Node;

/// simpleyaml - read values out of simple YAML files
#[derive(Parser, Debug)]
#[command(name = "simpleyaml")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Manifest to use instead of ./simpleyaml.yaml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log parser decisions to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value at a path
    Get(get::GetArgs),

    /// List every leaf path with its value
    Paths(paths::PathsArgs),

    /// Parse files and report what was found
    Check(check::CheckArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Load one document (0-based) from a file.
fn load_document(file: &Path, manifest: &Manifest, index: usize) -> Result<Node> {
    read_document(file, manifest, index)?.ok_or_else(|| YamlError::NotFound {
        path: format!("document {} in {}", index, display_path(file)),
        help: Some("Documents are numbered from 0".to_string()),
    })
}
