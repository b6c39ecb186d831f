use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Creates `base`, each of `subdirectories` inside it, and
/// `include/<project>`. An existing `base` is never reused.
pub(super) fn create(base: &Path, subdirectories: &[String], project: &str) -> Result<()> {
    if base.exists() {
        bail!("'{}' already exists", base.display());
    }

    fs::create_dir_all(base)
        .with_context(|| format!("Failed to create directory {}", base.display()))?;

    for subdirectory in subdirectories {
        let path = base.join(subdirectory);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory {}", path.display()))?;
    }

    let include = base.join("include").join(project);
    fs::create_dir_all(&include)
        .with_context(|| format!("Failed to create directory {}", include.display()))?;

    Ok(())
}
