use std::collections::BTreeSet;
use std::mem;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::builder::ConfigBuilder;
use super::constants::*;
use super::defaults::{author_fetch, default_subdirectories, resolve_paths};
use super::error::ConfigError;
use super::names::{NameSet, Normalize};
use super::probe::{scan_languages, scan_licenses};
use super::types::{ConfigStore, Field, PathKind, PathOverrides, SearchPaths};

type Step = fn(&mut ConfigStore, &mut ConfigBuilder) -> Result<(), ConfigError>;

/// Construction order. Search paths decide what the allowed languages and
/// licenses are, so they and both probes come before anything validated
/// against them. The per-directory fields after `Directories` are
/// independent of one another.
const RESOLUTION_ORDER: [(Field, Step); 9] = [
    (Field::Paths, resolve_paths_step),
    (Field::Languages, probe_languages_step),
    (Field::Licenses, probe_licenses_step),
    (Field::Subdirectories, subdirectories_step),
    (Field::Directories, directories_step),
    (Field::Authors, authors_step),
    (Field::Language, language_step),
    (Field::License, license_step),
    (Field::Quiet, quiet_step),
];

fn resolve_paths_step(store: &mut ConfigStore, input: &mut ConfigBuilder) -> Result<(), ConfigError> {
    store.set_paths(mem::take(&mut input.paths))
}

fn probe_languages_step(store: &mut ConfigStore, _: &mut ConfigBuilder) -> Result<(), ConfigError> {
    store.probe_languages()
}

fn probe_licenses_step(store: &mut ConfigStore, _: &mut ConfigBuilder) -> Result<(), ConfigError> {
    store.probe_licenses()
}

fn subdirectories_step(store: &mut ConfigStore, input: &mut ConfigBuilder) -> Result<(), ConfigError> {
    store.set_subdirectories_or_default(input.subdirectories.take())
}

fn directories_step(store: &mut ConfigStore, input: &mut ConfigBuilder) -> Result<(), ConfigError> {
    store.set_directories(mem::take(&mut input.directories))
}

fn authors_step(store: &mut ConfigStore, input: &mut ConfigBuilder) -> Result<(), ConfigError> {
    store.set_authors_or_default(input.authors.take())
}

fn language_step(store: &mut ConfigStore, input: &mut ConfigBuilder) -> Result<(), ConfigError> {
    store.set_language(input.language.as_deref())
}

fn license_step(store: &mut ConfigStore, input: &mut ConfigBuilder) -> Result<(), ConfigError> {
    store.set_license(input.license.as_deref())
}

fn quiet_step(store: &mut ConfigStore, input: &mut ConfigBuilder) -> Result<(), ConfigError> {
    store.set_quiet(input.quiet);
    Ok(())
}

impl ConfigStore {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    pub(super) fn resolve(mut input: ConfigBuilder) -> Result<Self, ConfigError> {
        let mut store = Self::unresolved();
        for (field, step) in RESOLUTION_ORDER {
            step(&mut store, &mut input)?;
            debug!(%field, "resolved configuration field");
        }
        Ok(store)
    }

    fn unresolved() -> Self {
        Self {
            paths: SearchPaths {
                config: PathBuf::new(),
                license: PathBuf::new(),
                template: PathBuf::new(),
            },
            languages: stock_set(&STOCK_LANGUAGES),
            licenses: stock_set(&STOCK_LICENSES),
            subdirectories: NameSet::new(Field::Subdirectories, Normalize::Directory),
            directories: NameSet::new(Field::Directories, Normalize::Directory),
            authors: NameSet::new(Field::Authors, Normalize::Verbatim),
            language: DEFAULT_LANGUAGE.to_string(),
            license: DEFAULT_LICENSE.to_string(),
            quiet: DEFAULT_QUIET,
        }
    }

    // --- authors ---

    /// Replaces the author set. Takes a collection of names:
    ///
    /// ```no_run
    /// # fn demo(store: &mut skaff::config::ConfigStore) -> Result<(), skaff::config::ConfigError> {
    /// store.set_authors(["Grace Hopper", "Ada Lovelace"])?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// A bare string is not a collection of names:
    ///
    /// ```compile_fail
    /// # fn demo(store: &mut skaff::config::ConfigStore) -> Result<(), skaff::config::ConfigError> {
    /// store.set_authors("Grace Hopper")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn set_authors<I, S>(&mut self, authors: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors.replace(authors)
    }

    /// `None` resets the authors to the current user.
    pub fn set_authors_or_default(&mut self, authors: Option<Vec<String>>) -> Result<(), ConfigError> {
        match authors {
            Some(authors) => self.set_authors(authors),
            None => self.set_authors([author_fetch()?]),
        }
    }

    pub fn add_author(&mut self, author: &str) -> Result<(), ConfigError> {
        self.authors.add(author)
    }

    pub fn discard_author(&mut self, author: &str) -> Result<(), ConfigError> {
        self.authors.discard(author)
    }

    pub fn authors(&self) -> Vec<String> {
        self.authors.to_vec()
    }

    // --- directories ---

    pub fn set_directories<I, S>(&mut self, directories: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.directories.replace(directories)
    }

    /// Directories have no default, so `None` is rejected.
    pub fn set_directories_or_default(
        &mut self,
        directories: Option<Vec<String>>,
    ) -> Result<(), ConfigError> {
        match directories {
            Some(directories) => self.set_directories(directories),
            None => Err(ConfigError::Empty {
                field: Field::Directories,
            }),
        }
    }

    pub fn add_directory(&mut self, directory: &str) -> Result<(), ConfigError> {
        self.directories.add(directory)
    }

    pub fn discard_directory(&mut self, directory: &str) -> Result<(), ConfigError> {
        self.directories.discard(directory)
    }

    pub fn directories(&self) -> Vec<String> {
        self.directories.to_vec()
    }

    pub fn has_directory(&self, directory: &str) -> bool {
        self.directories.contains(directory)
    }

    // --- subdirectories ---

    pub fn set_subdirectories<I, S>(&mut self, subdirectories: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subdirectories.replace(subdirectories)
    }

    /// `None` resets to the built-in project layout.
    pub fn set_subdirectories_or_default(
        &mut self,
        subdirectories: Option<Vec<String>>,
    ) -> Result<(), ConfigError> {
        match subdirectories {
            Some(subdirectories) => self.set_subdirectories(subdirectories),
            None => self.set_subdirectories(default_subdirectories()),
        }
    }

    pub fn add_subdirectory(&mut self, subdirectory: &str) -> Result<(), ConfigError> {
        self.subdirectories.add(subdirectory)
    }

    pub fn discard_subdirectory(&mut self, subdirectory: &str) -> Result<(), ConfigError> {
        self.subdirectories.discard(subdirectory)
    }

    pub fn subdirectories(&self) -> Vec<String> {
        self.subdirectories.to_vec()
    }

    // --- language ---

    /// Re-probes the template path, then selects `language` (or the default
    /// for `None`) if it is allowed.
    pub fn set_language(&mut self, language: Option<&str>) -> Result<(), ConfigError> {
        self.probe_languages()?;

        let Some(language) = language else {
            self.language = DEFAULT_LANGUAGE.to_string();
            return Ok(());
        };

        if !self.languages.contains(language) {
            return Err(ConfigError::NotAllowed {
                field: Field::Language,
                value: language.to_string(),
                allowed: self.languages(),
            });
        }

        self.language = language.to_string();
        Ok(())
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn languages(&self) -> Vec<String> {
        self.languages.iter().cloned().collect()
    }

    pub fn stock_languages() -> Vec<String> {
        stock_set(&STOCK_LANGUAGES).into_iter().collect()
    }

    /// Resets the allowed languages to the stock set plus every complete
    /// language directory under the template path.
    pub fn probe_languages(&mut self) -> Result<(), ConfigError> {
        let found = scan_languages(&self.paths.template)?;
        let mut languages = stock_set(&STOCK_LANGUAGES);
        languages.extend(found);
        self.languages = languages;
        Ok(())
    }

    // --- license ---

    /// Re-probes the license path, then selects `license` (or the default
    /// for `None`) if it is allowed.
    pub fn set_license(&mut self, license: Option<&str>) -> Result<(), ConfigError> {
        self.probe_licenses()?;

        let Some(license) = license else {
            self.license = DEFAULT_LICENSE.to_string();
            return Ok(());
        };

        if !self.licenses.contains(license) {
            return Err(ConfigError::NotAllowed {
                field: Field::License,
                value: license.to_string(),
                allowed: self.licenses(),
            });
        }

        self.license = license.to_string();
        Ok(())
    }

    pub fn license(&self) -> &str {
        &self.license
    }

    pub fn licenses(&self) -> Vec<String> {
        self.licenses.iter().cloned().collect()
    }

    pub fn stock_licenses() -> Vec<String> {
        stock_set(&STOCK_LICENSES).into_iter().collect()
    }

    /// Resets the allowed licenses to the stock set plus every `.txt`/`.md`
    /// pair under the license path. On error the allowed set is unchanged.
    pub fn probe_licenses(&mut self) -> Result<(), ConfigError> {
        let found = scan_licenses(&self.paths.license)?;
        let mut licenses = stock_set(&STOCK_LICENSES);
        licenses.extend(found);
        self.licenses = licenses;
        Ok(())
    }

    // --- quiet ---

    pub fn set_quiet(&mut self, quiet: Option<bool>) {
        self.quiet = quiet.unwrap_or(DEFAULT_QUIET);
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }

    // --- paths ---

    /// Unset entries fall back to `~/.config/skaff/` and its `license/` and
    /// `template/` children. Does not re-probe.
    pub fn set_paths(&mut self, overrides: PathOverrides) -> Result<(), ConfigError> {
        for kind in PathKind::ALL {
            if overrides
                .get(kind)
                .is_some_and(|path| path.as_os_str().is_empty())
            {
                return Err(ConfigError::EmptyPath { kind });
            }
        }

        self.paths = resolve_paths(overrides)?;
        Ok(())
    }

    pub fn paths(&self) -> SearchPaths {
        self.paths.clone()
    }

    pub fn path(&self, kind: PathKind) -> &Path {
        self.paths.get(kind)
    }
}

fn stock_set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|value| value.to_string()).collect()
}
