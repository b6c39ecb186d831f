use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::error::ConfigError;
use super::types::LicenseFormat;

/// Names of the license pairs found in `dir`.
///
/// Every `<name>.txt` needs a matching `<name>.md` and vice versa. A missing
/// directory contributes nothing.
pub fn scan_licenses(dir: &Path) -> Result<BTreeSet<String>, ConfigError> {
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "license override directory absent");
        return Ok(BTreeSet::new());
    }

    let mut text = BTreeSet::new();
    let mut markdown = BTreeSet::new();

    for entry in fs::read_dir(dir).map_err(|err| ConfigError::io(dir, err))? {
        let path = entry.map_err(|err| ConfigError::io(dir, err))?.path();
        if !path.is_file() {
            continue;
        }
        let (Some(stem), Some(ext)) = (
            path.file_stem().and_then(|s| s.to_str()),
            path.extension().and_then(|s| s.to_str()),
        ) else {
            continue;
        };

        if ext == LicenseFormat::Text.extension() {
            text.insert(stem.to_string());
        } else if ext == LicenseFormat::Markdown.extension() {
            markdown.insert(stem.to_string());
        }
    }

    if text != markdown {
        let unmatched = text.symmetric_difference(&markdown).cloned().collect();
        return Err(ConfigError::UnpairedLicense {
            dir: dir.to_path_buf(),
            unmatched,
        });
    }

    debug!(dir = %dir.display(), found = text.len(), "probed license overrides");
    Ok(text)
}

/// Template files a language directory must provide.
pub fn language_requirements(language: &str) -> [String; 3] {
    [
        format!("{language}/CMakeLists.txt"),
        format!("{language}/src/CMakeLists.txt"),
        format!("{language}/src/main.{language}"),
    ]
}

/// Names of the complete language template directories under `dir`.
pub fn scan_languages(dir: &Path) -> Result<BTreeSet<String>, ConfigError> {
    let mut found = BTreeSet::new();
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "template override directory absent");
        return Ok(found);
    }

    for entry in fs::read_dir(dir).map_err(|err| ConfigError::io(dir, err))? {
        let path = entry.map_err(|err| ConfigError::io(dir, err))?.path();
        if !path.is_dir() {
            continue;
        }
        let Some(language) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };

        let missing: Vec<String> = language_requirements(language)
            .into_iter()
            .filter(|relative| !dir.join(relative).is_file())
            .collect();

        if missing.is_empty() {
            found.insert(language.to_string());
        } else {
            warn!(
                language,
                missing = %missing.join(", "),
                "skipping incomplete language template directory"
            );
        }
    }

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_directory_yields_nothing() {
        let temp = TempDir::new().unwrap();
        let absent = temp.path().join("nope");
        assert!(scan_licenses(&absent).unwrap().is_empty());
        assert!(scan_languages(&absent).unwrap().is_empty());
    }

    #[test]
    fn paired_licenses_are_found() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("zlib.txt"), "text").unwrap();
        fs::write(temp.path().join("zlib.md"), "md").unwrap();
        fs::write(temp.path().join("notes.rst"), "ignored").unwrap();

        let found = scan_licenses(temp.path()).unwrap();
        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec!["zlib".to_string()]);
    }

    #[test]
    fn unpaired_license_names_the_culprit() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("zlib.txt"), "text").unwrap();

        match scan_licenses(temp.path()).unwrap_err() {
            ConfigError::UnpairedLicense { unmatched, .. } => {
                assert_eq!(unmatched, vec!["zlib".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn only_complete_language_directories_count() {
        let temp = TempDir::new().unwrap();
        let rust = temp.path().join("rs");
        fs::create_dir_all(rust.join("src")).unwrap();
        fs::write(rust.join("CMakeLists.txt"), "").unwrap();
        fs::write(rust.join("src/CMakeLists.txt"), "").unwrap();
        fs::write(rust.join("src/main.rs"), "").unwrap();

        let partial = temp.path().join("go");
        fs::create_dir_all(&partial).unwrap();
        fs::write(partial.join("CMakeLists.txt"), "").unwrap();

        let found = scan_languages(temp.path()).unwrap();
        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec!["rs".to_string()]);
    }
}
