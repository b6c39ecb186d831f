use std::collections::BTreeSet;
use std::path::MAIN_SEPARATOR;

use unicode_general_category::{GeneralCategory, get_general_category};

use super::error::ConfigError;
use super::types::Field;

/// Whether stored names get a trailing path separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Normalize {
    Verbatim,
    Directory,
}

/// Deduplicated, sorted set of validated names shared by authors,
/// directories and subdirectories.
#[derive(Debug, Clone)]
pub(super) struct NameSet {
    field: Field,
    normalize: Normalize,
    names: BTreeSet<String>,
}

impl NameSet {
    pub fn new(field: Field, normalize: Normalize) -> Self {
        Self {
            field,
            normalize,
            names: BTreeSet::new(),
        }
    }

    /// Replaces the whole set. Nothing changes unless every value is valid.
    pub fn replace<I, S>(&mut self, values: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut replacement = BTreeSet::new();
        for value in values {
            replacement.insert(self.check(value.into())?);
        }

        if replacement.is_empty() {
            return Err(ConfigError::Empty { field: self.field });
        }

        self.names = replacement;
        Ok(())
    }

    pub fn add(&mut self, value: &str) -> Result<(), ConfigError> {
        let name = self.check(value.to_string())?;
        self.names.insert(name);
        Ok(())
    }

    pub fn discard(&mut self, value: &str) -> Result<(), ConfigError> {
        let name = self.check(value.to_string())?;
        self.names.remove(&name);
        Ok(())
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.names.contains(&self.normalized(value.to_string()))
    }

    fn check(&self, value: String) -> Result<String, ConfigError> {
        if value.is_empty() {
            return Err(ConfigError::Empty { field: self.field });
        }
        if !is_printable(&value) {
            return Err(ConfigError::NotPrintable {
                field: self.field,
                value,
            });
        }
        Ok(self.normalized(value))
    }

    fn normalized(&self, mut value: String) -> String {
        if self.normalize == Normalize::Directory && !value.ends_with(MAIN_SEPARATOR) {
            value.push(MAIN_SEPARATOR);
        }
        value
    }
}

/// Rejects the Unicode "Other" and "Separator" general categories, except
/// for a plain ASCII space.
pub(super) fn is_printable(value: &str) -> bool {
    value.chars().all(|c| {
        c == ' '
            || !matches!(
                get_general_category(c),
                GeneralCategory::Control
                    | GeneralCategory::Format
                    | GeneralCategory::PrivateUse
                    | GeneralCategory::Surrogate
                    | GeneralCategory::Unassigned
                    | GeneralCategory::SpaceSeparator
                    | GeneralCategory::LineSeparator
                    | GeneralCategory::ParagraphSeparator
            )
    })
}
