use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::types::{Field, PathKind};

/// Broad classification of a [`ConfigError`].
///
/// Shape mismatches (a bare string where a collection is expected, a
/// non-boolean quiet flag) cannot be expressed through the typed API, so only
/// value and lookup failures remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied an empty, malformed or disallowed value.
    Value,
    /// Something the configuration depends on could not be found.
    Lookup,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("'{field}' must not be empty")]
    Empty { field: Field },

    #[error("'{field}' entries must be printable names, got {value:?}")]
    NotPrintable { field: Field, value: String },

    #[error("'{field}' choice '{value}' must be one of the following: {}", .allowed.join(", "))]
    NotAllowed {
        field: Field,
        value: String,
        allowed: Vec<String>,
    },

    #[error("'{kind}' path must not be empty")]
    EmptyPath { kind: PathKind },

    #[error("unknown path key '{0}'; expected one of: config, license, template")]
    UnknownPathKey(String),

    #[error("{key} has an invalid value: {reason}")]
    InvalidEnv { key: String, reason: String },

    #[error("failed to determine the default author: {0}")]
    AuthorLookup(String),

    #[error("could not determine the home directory")]
    NoHomeDirectory,

    #[error(
        "license files in {} must come in .txt/.md pairs; unmatched: {}",
        .dir.display(),
        .unmatched.join(", ")
    )]
    UnpairedLicense { dir: PathBuf, unmatched: Vec<String> },

    #[error("license file '{name}.{extension}' not found")]
    LicenseNotFound { name: String, extension: &'static str },

    #[error("template file '{0}' not found")]
    TemplateNotFound(String),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConfigError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::Empty { .. }
            | ConfigError::NotPrintable { .. }
            | ConfigError::NotAllowed { .. }
            | ConfigError::EmptyPath { .. }
            | ConfigError::UnknownPathKey(_)
            | ConfigError::InvalidEnv { .. } => ErrorKind::Value,
            ConfigError::AuthorLookup(_)
            | ConfigError::NoHomeDirectory
            | ConfigError::UnpairedLicense { .. }
            | ConfigError::LicenseNotFound { .. }
            | ConfigError::TemplateNotFound(_)
            | ConfigError::Io { .. } => ErrorKind::Lookup,
        }
    }

    pub(super) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
        }
    }
}
