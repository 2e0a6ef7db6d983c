//! Paths command implementation.
//!
//! Lists every addressable leaf of a document as `path = value`.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::Manifest;
use crate::error::Result;
use crate::path::leaf_paths;
use crate::value::Node;

/// List every leaf path with its value
#[derive(Args, Debug)]
pub struct PathsArgs {
    /// YAML file to read
    pub file: PathBuf,

    /// Document to read, numbered from 0
    #[arg(long, short, default_value = "0")]
    pub document: usize,
}

pub fn run(args: PathsArgs, manifest: &Manifest) -> Result<()> {
    let node = super::load_document(&args.file, manifest, args.document)?;

    for line in listing(&node) {
        println!("{}", line);
    }

    Ok(())
}

/// One `path = value` line per leaf, in document order.
pub fn listing(node: &Node) -> Vec<String> {
    leaf_paths(node)
        .into_iter()
        .map(|(path, value)| format!("{} = {}", path, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_listing() {
        let doc = parse("name: app\nreplicas: 3\ntags:\n  - web\n  - edge");

        assert_eq!(
            listing(&doc),
            vec!["name = app", "replicas = 3", "tags[0] = web", "tags[1] = edge"]
        );
    }

    #[test]
    fn test_listing_empty_document() {
        assert!(listing(&Node::new()).is_empty());
    }
}
