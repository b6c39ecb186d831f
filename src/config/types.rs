use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::error::ConfigError;
use super::names::NameSet;

/// Validated configuration for one scaffolding run.
///
/// Built through [`ConfigStore::builder`]; every field afterwards changes only
/// through the setter/add/discard accessors.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    pub(super) paths: SearchPaths,
    pub(super) languages: BTreeSet<String>,
    pub(super) licenses: BTreeSet<String>,
    pub(super) subdirectories: NameSet,
    pub(super) directories: NameSet,
    pub(super) authors: NameSet,
    pub(super) language: String,
    pub(super) license: String,
    pub(super) quiet: bool,
}

/// Configuration fields in resolution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Paths,
    Languages,
    Licenses,
    Subdirectories,
    Directories,
    Authors,
    Language,
    License,
    Quiet,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Paths => "paths",
            Field::Languages => "languages",
            Field::Licenses => "licenses",
            Field::Subdirectories => "subdirectories",
            Field::Directories => "directories",
            Field::Authors => "authors",
            Field::Language => "language",
            Field::License => "license",
            Field::Quiet => "quiet",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    Config,
    License,
    Template,
}

impl PathKind {
    pub const ALL: [PathKind; 3] = [PathKind::Config, PathKind::License, PathKind::Template];
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathKind::Config => write!(f, "config"),
            PathKind::License => write!(f, "license"),
            PathKind::Template => write!(f, "template"),
        }
    }
}

impl std::str::FromStr for PathKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "config" => Ok(PathKind::Config),
            "license" => Ok(PathKind::License),
            "template" => Ok(PathKind::Template),
            other => Err(ConfigError::UnknownPathKey(other.to_string())),
        }
    }
}

/// Search roots for user configuration, license and template overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchPaths {
    pub config: PathBuf,
    pub license: PathBuf,
    pub template: PathBuf,
}

impl SearchPaths {
    pub fn get(&self, kind: PathKind) -> &Path {
        match kind {
            PathKind::Config => &self.config,
            PathKind::License => &self.license,
            PathKind::Template => &self.template,
        }
    }
}

/// Partial set of search roots; unset entries fall back to the per-user
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathOverrides {
    pub config: Option<PathBuf>,
    pub license: Option<PathBuf>,
    pub template: Option<PathBuf>,
}

impl PathOverrides {
    pub fn set(&mut self, kind: PathKind, path: impl Into<PathBuf>) {
        let slot = match kind {
            PathKind::Config => &mut self.config,
            PathKind::License => &mut self.license,
            PathKind::Template => &mut self.template,
        };
        *slot = Some(path.into());
    }

    pub fn get(&self, kind: PathKind) -> Option<&Path> {
        match kind {
            PathKind::Config => self.config.as_deref(),
            PathKind::License => self.license.as_deref(),
            PathKind::Template => self.template.as_deref(),
        }
    }

    /// Parses a `key=path` pair such as `license=/opt/licenses`.
    pub fn set_pair(&mut self, pair: &str) -> Result<(), ConfigError> {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| ConfigError::UnknownPathKey(pair.to_string()))?;
        let kind: PathKind = key.trim().parse()?;
        self.set(kind, value.trim());
        Ok(())
    }
}

/// The two renditions every license must ship in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseFormat {
    Text,
    Markdown,
}

impl LicenseFormat {
    pub const ALL: [LicenseFormat; 2] = [LicenseFormat::Text, LicenseFormat::Markdown];

    pub fn extension(self) -> &'static str {
        match self {
            LicenseFormat::Text => "txt",
            LicenseFormat::Markdown => "md",
        }
    }
}

/// Serializable view of a store, printed by `--show-config`.
#[derive(Debug, Serialize)]
pub struct ConfigSnapshot {
    pub directories: Vec<String>,
    pub subdirectories: Vec<String>,
    pub authors: Vec<String>,
    pub language: String,
    pub license: String,
    pub quiet: bool,
    pub languages: Vec<String>,
    pub licenses: Vec<String>,
    pub paths: SearchPaths,
}

impl From<&ConfigStore> for ConfigSnapshot {
    fn from(store: &ConfigStore) -> Self {
        ConfigSnapshot {
            directories: store.directories(),
            subdirectories: store.subdirectories(),
            authors: store.authors(),
            language: store.language().to_string(),
            license: store.license().to_string(),
            quiet: store.quiet(),
            languages: store.languages(),
            licenses: store.licenses(),
            paths: store.paths(),
        }
    }
}
