use std::path::Path;

use anyhow::Result;

use crate::config::ConfigStore;

use super::write_file;

pub(super) const CMAKE_FILE: &str = "CMakeLists.txt";
const DOTFILES: [&str; 4] = ["editorconfig", "gdbinit", "gitattributes", "gitignore"];
const TRAVIS_FILE: &str = "travis.yml";

/// Copies the build and tooling templates into `base` and returns the files
/// worth opening in an editor.
pub(super) fn spawn(base: &Path, config: &ConfigStore) -> Result<Vec<&'static str>> {
    let language = config.language();

    copy(config, &format!("{language}/{CMAKE_FILE}"), &base.join(CMAKE_FILE))?;

    let src = base.join("src");
    if src.is_dir() {
        copy(config, &format!("{language}/src/{CMAKE_FILE}"), &src.join(CMAKE_FILE))?;
        let main = format!("main.{language}");
        copy(config, &format!("{language}/src/{main}"), &src.join(&main))?;
    }

    for dotfile in DOTFILES {
        copy(config, &format!("{dotfile}.txt"), &base.join(format!(".{dotfile}")))?;
    }

    let travis = config.template_source(TRAVIS_FILE)?.read()?;
    write_file(
        &base.join(format!(".{TRAVIS_FILE}")),
        &format!("language: {language}\n{travis}"),
    )?;

    Ok(vec![CMAKE_FILE])
}

fn copy(config: &ConfigStore, template: &str, target: &Path) -> Result<()> {
    let contents = config.template_source(template)?.read()?;
    write_file(target, &contents)
}
