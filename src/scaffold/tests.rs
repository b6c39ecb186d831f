#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Cursor;
    use std::path::{Path, PathBuf};

    use anyhow::Result;
    use chrono::{Datelike, Local};
    use tempfile::TempDir;

    use crate::config::{ConfigStore, LicenseFormat, PathKind};
    use crate::scaffold::docs::{changelog, title_case};
    use crate::scaffold::{ConfigEditor, PromptSession, scaffold};

    #[derive(Default)]
    struct RecordingEditor {
        opened: Vec<PathBuf>,
    }

    impl ConfigEditor for RecordingEditor {
        fn edit(&mut self, path: &Path) -> Result<()> {
            self.opened.push(path.to_path_buf());
            Ok(())
        }
    }

    fn session(input: &str) -> PromptSession<Cursor<Vec<u8>>, Vec<u8>> {
        PromptSession::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn store(root: &Path, directories: &[&str], license: &str, quiet: bool) -> ConfigStore {
        let out = root.join("out");
        ConfigStore::builder()
            .path(PathKind::Config, root.join("cfg"))
            .path(PathKind::License, root.join("cfg/license"))
            .path(PathKind::Template, root.join("cfg/template"))
            .authors(["Pratt", "Whitney"])
            .directories(directories.iter().map(|d| out.join(d).display().to_string()))
            .license(license)
            .quiet(quiet)
            .build()
            .unwrap()
    }

    #[test]
    fn scaffold_creates_tree_license_templates_and_docs() {
        let temp = TempDir::new().unwrap();
        let config = store(temp.path(), &["demo"], "mit", true);
        let mut editor = RecordingEditor::default();

        let created = scaffold(&config, &mut session(""), &mut editor).unwrap();
        let base = temp.path().join("out/demo");
        assert_eq!(created, vec![PathBuf::from(format!("{}/", base.display()))]);

        for sub in ["build", "coccinelle", "doc", "examples", "img", "src", "tests"] {
            assert!(base.join(sub).is_dir(), "{sub} missing");
        }
        assert!(base.join("include/demo").is_dir());

        let year = Local::now().year();
        let license = fs::read_to_string(base.join("LICENSE.txt")).unwrap();
        assert!(license.starts_with(&format!("Copyright (c) {year}, Pratt, Whitney\n")));
        assert!(license.contains("Permission is hereby granted"));

        assert!(base.join("CMakeLists.txt").is_file());
        assert!(base.join("src/CMakeLists.txt").is_file());
        assert!(base.join("src/main.c").is_file());
        for dotfile in [".editorconfig", ".gdbinit", ".gitattributes", ".gitignore"] {
            assert!(base.join(dotfile).is_file(), "{dotfile} missing");
        }
        let travis = fs::read_to_string(base.join(".travis.yml")).unwrap();
        assert!(travis.starts_with("language: c\n"));

        let readme = fs::read_to_string(base.join("README.md")).unwrap();
        assert!(readme.starts_with("![demo](img/banner.png)"));
        assert!(readme.contains(&format!("Copyright &copy; {year} Pratt, Whitney\n")));
        assert!(readme.contains("MIT License"));

        let changelog_text = fs::read_to_string(base.join("CHANGELOG.md")).unwrap();
        assert_eq!(changelog_text, changelog("demo"));

        let doxyfile = fs::read_to_string(base.join("Doxyfile")).unwrap();
        assert!(doxyfile.contains("PROJECT_NAME           = \"Demo\""));
        assert!(doxyfile.contains("OUTPUT_DIRECTORY       = ./doc"));

        assert!(editor.opened.is_empty());
    }

    #[test]
    fn unsigned_licenses_are_copied_verbatim() {
        let temp = TempDir::new().unwrap();
        let config = store(temp.path(), &["gnu"], "gpl3", true);

        scaffold(&config, &mut session(""), &mut RecordingEditor::default()).unwrap();

        let license = fs::read_to_string(temp.path().join("out/gnu/LICENSE.txt")).unwrap();
        let stock = config.license_source(LicenseFormat::Text).unwrap().read().unwrap();
        assert_eq!(license, stock);
    }

    #[test]
    fn cpp_projects_get_cpp_sources() {
        let temp = TempDir::new().unwrap();
        let mut config = store(temp.path(), &["engine"], "bsd3", true);
        config.set_language(Some("cpp")).unwrap();

        scaffold(&config, &mut session(""), &mut RecordingEditor::default()).unwrap();

        let base = temp.path().join("out/engine");
        assert!(base.join("src/main.cpp").is_file());
        assert!(!base.join("src/main.c").exists());
        let travis = fs::read_to_string(base.join(".travis.yml")).unwrap();
        assert!(travis.starts_with("language: cpp\n"));
    }

    #[test]
    fn user_templates_override_stock() {
        let temp = TempDir::new().unwrap();
        let template_dir = temp.path().join("cfg/template");
        fs::create_dir_all(&template_dir).unwrap();
        fs::write(template_dir.join("gitignore.txt"), "custom-ignore\n").unwrap();
        let config = store(temp.path(), &["demo"], "bsd2", true);

        scaffold(&config, &mut session(""), &mut RecordingEditor::default()).unwrap();

        let gitignore = fs::read_to_string(temp.path().join("out/demo/.gitignore")).unwrap();
        assert_eq!(gitignore, "custom-ignore\n");
    }

    #[test]
    fn existing_directory_is_rejected() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("out/demo")).unwrap();
        let config = store(temp.path(), &["demo"], "bsd2", true);

        let err = scaffold(&config, &mut session(""), &mut RecordingEditor::default())
            .unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn editing_follows_prompt_answers() {
        let temp = TempDir::new().unwrap();
        let config = store(temp.path(), &["alpha", "beta", "gamma"], "bsd2", false);
        let mut editor = RecordingEditor::default();

        // alpha: continue, beta: skip this one, gamma: skip everything left
        let mut prompt = session("c\nk\na\n");
        scaffold(&config, &mut prompt, &mut editor).unwrap();

        let out = temp.path().join("out");
        assert_eq!(
            editor.opened,
            vec![
                out.join("alpha/").join("CMakeLists.txt"),
                out.join("alpha/").join("Doxyfile"),
            ]
        );
        assert!(prompt.skip_rest());
        assert!(out.join("gamma/Doxyfile").is_file());
    }

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("demo"), "Demo");
        assert_eq!(title_case("my_proj-2x"), "My_Proj-2X");
        assert_eq!(title_case("LOUD name"), "Loud Name");
    }
}
