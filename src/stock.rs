//! License texts and templates compiled into the binary.
//!
//! These are the fallback for anything not overridden in the user's license
//! or template directory.

use crate::config::LicenseFormat;

pub fn license(name: &str, format: LicenseFormat) -> Option<&'static str> {
    let text = match (name, format) {
        ("bsd2", LicenseFormat::Text) => include_str!("../assets/license/bsd2.txt"),
        ("bsd2", LicenseFormat::Markdown) => include_str!("../assets/license/bsd2.md"),
        ("bsd3", LicenseFormat::Text) => include_str!("../assets/license/bsd3.txt"),
        ("bsd3", LicenseFormat::Markdown) => include_str!("../assets/license/bsd3.md"),
        ("gpl2", LicenseFormat::Text) => include_str!("../assets/license/gpl2.txt"),
        ("gpl2", LicenseFormat::Markdown) => include_str!("../assets/license/gpl2.md"),
        ("gpl3", LicenseFormat::Text) => include_str!("../assets/license/gpl3.txt"),
        ("gpl3", LicenseFormat::Markdown) => include_str!("../assets/license/gpl3.md"),
        ("mit", LicenseFormat::Text) => include_str!("../assets/license/mit.txt"),
        ("mit", LicenseFormat::Markdown) => include_str!("../assets/license/mit.md"),
        _ => return None,
    };
    Some(text)
}

/// Looks up a template by its path relative to the template root, using `/`
/// as the separator.
pub fn template(relative: &str) -> Option<&'static str> {
    let text = match relative {
        "Doxyfile" => include_str!("../assets/template/Doxyfile"),
        "editorconfig.txt" => include_str!("../assets/template/editorconfig.txt"),
        "gdbinit.txt" => include_str!("../assets/template/gdbinit.txt"),
        "gitattributes.txt" => include_str!("../assets/template/gitattributes.txt"),
        "gitignore.txt" => include_str!("../assets/template/gitignore.txt"),
        "travis.yml" => include_str!("../assets/template/travis.yml"),
        "c/CMakeLists.txt" => include_str!("../assets/template/c/CMakeLists.txt"),
        "c/src/CMakeLists.txt" => include_str!("../assets/template/c/src/CMakeLists.txt"),
        "c/src/main.c" => include_str!("../assets/template/c/src/main.c"),
        "cpp/CMakeLists.txt" => include_str!("../assets/template/cpp/CMakeLists.txt"),
        "cpp/src/CMakeLists.txt" => include_str!("../assets/template/cpp/src/CMakeLists.txt"),
        "cpp/src/main.cpp" => include_str!("../assets/template/cpp/src/main.cpp"),
        _ => return None,
    };
    Some(text)
}
