use miette::Diagnostic;
use thiserror::Error;

use crate::path::PathError;

/// Error type for the fallible surfaces around the parser (files,
/// configuration, command-line lookups). Parsing itself never fails.
#[derive(Error, Diagnostic, Debug)]
pub enum YamlError {
    #[error("IO error: {0}")]
    #[diagnostic(code(simpleyaml::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(simpleyaml::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(simpleyaml::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Path(#[from] PathError),

    #[error("Path not found: {path}")]
    #[diagnostic(code(simpleyaml::not_found))]
    NotFound {
        path: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, YamlError>;
