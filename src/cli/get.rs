//! Get command implementation.
//!
//! Resolves a path expression in one document and prints the result.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::Manifest;
use crate::error::{Result, YamlError};
use crate::path::{leaf_paths_of, PathExpr};
use crate::value::Value;

/// Print the value at a path
#[derive(Args, Debug)]
pub struct GetArgs {
    /// YAML file to read
    pub file: PathBuf,

    /// Path expression, e.g. servers[0].host
    pub path: String,

    /// Document to read, numbered from 0
    #[arg(long, short, default_value = "0")]
    pub document: usize,
}

pub fn run(args: GetArgs, manifest: &Manifest) -> Result<()> {
    let expr = PathExpr::parse(&args.path)?;
    let node = super::load_document(&args.file, manifest, args.document)?;

    let value = expr.resolve(&node).ok_or_else(|| YamlError::NotFound {
        path: args.path.clone(),
        help: Some("Missing keys and null values are both reported as not found".to_string()),
    })?;

    for line in render(value, &args.path) {
        println!("{}", line);
    }

    Ok(())
}

/// Scalars print as their text; collections print one `path = value`
/// line per leaf.
pub fn render(value: &Value, path: &str) -> Vec<String> {
    if value.is_scalar() {
        return vec![value.to_string()];
    }

    leaf_paths_of(value, path)
        .into_iter()
        .map(|(p, v)| format!("{} = {}", p, v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_render_scalar() {
        assert_eq!(render(&Value::from("localhost"), "host"), vec!["localhost"]);
        assert_eq!(render(&Value::Float(1.0), "ratio"), vec!["1.0"]);
    }

    #[test]
    fn test_render_collection() {
        let doc = parse("db:\n  host: h\n  ports: [1, 2]");
        let value = doc.path("db").unwrap();

        assert_eq!(
            render(value, "db"),
            vec!["db.host = h", "db.ports[0] = 1", "db.ports[1] = 2"]
        );
    }

    #[test]
    fn test_render_empty_collection() {
        assert_eq!(render(&Value::Sequence(vec![]), "items"), vec!["items = []"]);
    }
}
