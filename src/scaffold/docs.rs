use std::path::Path;

use anyhow::Result;

use crate::config::{ConfigStore, LicenseFormat};

use super::{joined_authors, write_file};

pub(super) const DOXYFILE: &str = "Doxyfile";

/// Writes `README.md`, `CHANGELOG.md` and `Doxyfile`; returns the files worth
/// opening in an editor.
pub(super) fn create(
    base: &Path,
    project: &str,
    config: &ConfigStore,
    year: i32,
) -> Result<Vec<&'static str>> {
    let license = config.license_source(LicenseFormat::Markdown)?.read()?;
    let readme = format!(
        "![{project}](img/banner.png)\n\
         \n## Overview\n\
         \n## License\n\
         Copyright &copy; {year} {authors}\n\
         {license}",
        authors = joined_authors(config),
    );
    write_file(&base.join("README.md"), &readme)?;

    write_file(&base.join("CHANGELOG.md"), &changelog(project))?;

    let doxyfile = config
        .template_source(DOXYFILE)?
        .read()?
        .replace("@PROJECT_NAME@", &title_case(project))
        .replace("@OUTPUT_DIRECTORY@", "./doc");
    write_file(&base.join(DOXYFILE), &doxyfile)?;

    Ok(vec![DOXYFILE])
}

pub(super) fn changelog(project: &str) -> String {
    format!(
        "# Change Log\n\
         This document records all notable changes to {}.  \n\
         This project adheres to [Semantic Versioning](http://semver.org/).\n\
         \n## 0.1 (Upcoming)\n\
         * New feature here\n",
        title_case(project)
    )
}

/// Uppercases the first letter of every run of letters and lowercases the
/// rest, so `my_proj-2x` becomes `My_Proj-2X`.
pub(super) fn title_case(name: &str) -> String {
    let mut titled = String::with_capacity(name.len());
    let mut word_start = true;

    for c in name.chars() {
        if c.is_alphabetic() {
            if word_start {
                titled.extend(c.to_uppercase());
            } else {
                titled.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            titled.push(c);
            word_start = true;
        }
    }

    titled
}
