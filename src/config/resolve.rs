use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::stock;

use super::error::ConfigError;
use super::types::{ConfigStore, LicenseFormat};

/// A license or template file, either a user override on disk or the copy
/// compiled into the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    User(PathBuf),
    Stock {
        name: String,
        contents: &'static str,
    },
}

impl Resource {
    pub fn read(&self) -> Result<String, ConfigError> {
        match self {
            Resource::User(path) => {
                fs::read_to_string(path).map_err(|err| ConfigError::io(path, err))
            }
            Resource::Stock { contents, .. } => Ok((*contents).to_string()),
        }
    }

    pub fn is_user(&self) -> bool {
        matches!(self, Resource::User(_))
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::User(path) => write!(f, "{}", path.display()),
            Resource::Stock { name, .. } => write!(f, "<stock>/{name}"),
        }
    }
}

impl ConfigStore {
    /// The selected license in `format`.
    pub fn license_source(&self, format: LicenseFormat) -> Result<Resource, ConfigError> {
        self.resolve_license(&self.license, format)
    }

    /// Every allowed license in every format, user overrides taking the
    /// place of the stock copy with the same name.
    pub fn license_sources(&self) -> Result<Vec<Resource>, ConfigError> {
        let mut sources = Vec::with_capacity(self.licenses.len() * LicenseFormat::ALL.len());
        for license in &self.licenses {
            for format in LicenseFormat::ALL {
                sources.push(self.resolve_license(license, format)?);
            }
        }
        Ok(sources)
    }

    /// A template addressed relative to the template root with `/`
    /// separators, e.g. `c/src/main.c`.
    pub fn template_source(&self, relative: &str) -> Result<Resource, ConfigError> {
        let user = self.paths.template.join(relative);
        if user.is_file() {
            return Ok(Resource::User(user));
        }

        stock::template(relative)
            .map(|contents| Resource::Stock {
                name: relative.to_string(),
                contents,
            })
            .ok_or_else(|| ConfigError::TemplateNotFound(relative.to_string()))
    }

    fn resolve_license(
        &self,
        license: &str,
        format: LicenseFormat,
    ) -> Result<Resource, ConfigError> {
        let extension = format.extension();
        let user = self.paths.license.join(format!("{license}.{extension}"));
        if user.is_file() {
            return Ok(Resource::User(user));
        }

        stock::license(license, format)
            .map(|contents| Resource::Stock {
                name: format!("{license}.{extension}"),
                contents,
            })
            .ok_or_else(|| ConfigError::LicenseNotFound {
                name: license.to_string(),
                extension,
            })
    }
}
