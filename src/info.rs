pub const SHORT_DESCRIPTION: &str = "An Extensible Project Scaffolding Tool";

pub const LONG_DESCRIPTION: &str = "skaff builds programming language dependent \
scaffolding of software projects, with built-in CMake-based C and C++ support.";

/// Text printed by `--version`.
pub const VERSION_INFO: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCopyright (C) ",
    env!("CARGO_PKG_AUTHORS"),
    ".\n",
    "Licensed and distributed under the BSD 2-Clause License.\n",
    "This is free software: you are free to change and redistribute it.\n",
    "There is NO WARRANTY, to the extent permitted by law.",
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_info_leads_with_version_and_names_license() {
        assert!(VERSION_INFO.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(VERSION_INFO.contains("BSD 2-Clause"));
        assert!(!SHORT_DESCRIPTION.is_empty());
    }
}
