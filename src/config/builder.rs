use std::path::PathBuf;

use super::environment::apply_env_overrides;
use super::error::ConfigError;
use super::types::{ConfigStore, PathKind, PathOverrides};

/// Collects optional inputs for a [`ConfigStore`]. Anything left unset is
/// resolved to its default by [`ConfigBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    pub(crate) paths: PathOverrides,
    pub(crate) subdirectories: Option<Vec<String>>,
    pub(crate) directories: Vec<String>,
    pub(crate) authors: Option<Vec<String>>,
    pub(crate) language: Option<String>,
    pub(crate) license: Option<String>,
    pub(crate) quiet: Option<bool>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn directory(mut self, directory: impl Into<String>) -> Self {
        self.directories.push(directory.into());
        self
    }

    pub fn directories<I, S>(mut self, directories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.directories.extend(directories.into_iter().map(Into::into));
        self
    }

    /// Sets the full author list. An empty list is rejected at build time;
    /// leave it unset to use the current user.
    pub fn authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = Some(authors.into_iter().map(Into::into).collect());
        self
    }

    pub fn subdirectories<I, S>(mut self, subdirectories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subdirectories = Some(subdirectories.into_iter().map(Into::into).collect());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn license(mut self, license: impl Into<String>) -> Self {
        self.license = Some(license.into());
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = Some(quiet);
        self
    }

    pub fn path(mut self, kind: PathKind, path: impl Into<PathBuf>) -> Self {
        self.paths.set(kind, path);
        self
    }

    pub fn with_paths<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut PathOverrides),
    {
        update(&mut self.paths);
        self
    }

    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        apply_env_overrides(self)
    }

    pub fn build(self) -> Result<ConfigStore, ConfigError> {
        ConfigStore::resolve(self)
    }
}
