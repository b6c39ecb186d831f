//! Turns a [`ConfigStore`] into project directories on disk.

mod docs;
mod editor;
mod license;
mod prompt;
mod templates;
mod tree;

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use chrono::{Datelike, Local};
use tracing::{debug, info};

use crate::config::ConfigStore;

pub use editor::{ConfigEditor, SystemEditor};
pub use prompt::{EditDecision, PromptSession};

/// Scaffolds every configured directory in sorted order and returns the
/// created project roots.
///
/// Files offered for editing are only opened when `session` answers
/// [`EditDecision::Edit`] for that directory.
pub fn scaffold<R, W>(
    config: &ConfigStore,
    session: &mut PromptSession<R, W>,
    editor: &mut dyn ConfigEditor,
) -> Result<Vec<PathBuf>>
where
    R: BufRead,
    W: Write,
{
    let year = Local::now().year();
    let mut created = Vec::new();

    for directory in config.directories() {
        let base = PathBuf::from(&directory);
        let project = project_name(&base)?;
        info!(directory = %directory, project = %project, "scaffolding project");

        tree::create(&base, &config.subdirectories(), &project)?;
        license::sign(&base, config, year)?;

        let decision = session.decide(&directory, config.quiet())?;

        let mut editable = templates::spawn(&base, config)?;
        editable.extend(docs::create(&base, &project, config, year)?);

        if decision == EditDecision::Edit {
            for file in editable {
                editor.edit(&base.join(file))?;
            }
        }

        created.push(base);
    }

    Ok(created)
}

fn project_name(base: &Path) -> Result<String> {
    base.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| anyhow!("cannot derive a project name from '{}'", base.display()))
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    debug!(file = %path.display(), "wrote file");
    Ok(())
}

fn joined_authors(config: &ConfigStore) -> String {
    config.authors().join(", ")
}

#[cfg(test)]
mod tests;
