use std::path::Path;

use anyhow::Result;

use crate::config::{ConfigStore, LicenseFormat, SIGNED_LICENSES};

use super::{joined_authors, write_file};

pub(super) const LICENSE_FILE: &str = "LICENSE.txt";

/// Writes `LICENSE.txt`, prefixed with a copyright line for the licenses that
/// carry one.
pub(super) fn sign(base: &Path, config: &ConfigStore, year: i32) -> Result<()> {
    let text = config.license_source(LicenseFormat::Text)?.read()?;

    let contents = if SIGNED_LICENSES.contains(&config.license()) {
        format!("Copyright (c) {year}, {}\n{text}", joined_authors(config))
    } else {
        text
    };

    write_file(&base.join(LICENSE_FILE), &contents)
}
