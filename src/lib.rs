//! simpleyaml - a permissive parser for a practical subset of YAML
//!
//! Parses block mappings, block sequences, inline collections, quoted and
//! plain scalars, multiline strings and `---` document dividers into a
//! [`Node`] tree, and looks values up with dotted path expressions such as
//! `servers[0].host`.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod path;
pub mod value;

pub use error::{Result, YamlError};
pub use parser::{parse, parse_block, parse_documents, parse_value, ParseOptions, Parser};
pub use path::{leaf_paths, resolve, PathError, PathExpr, Segment};
pub use value::{Node, Value};
