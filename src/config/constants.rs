pub const DEFAULT_LANGUAGE: &str = "c";
pub const DEFAULT_LICENSE: &str = "bsd2";
pub const DEFAULT_QUIET: bool = false;

pub const STOCK_LANGUAGES: [&str; 2] = ["c", "cpp"];
pub const STOCK_LICENSES: [&str; 5] = ["bsd2", "bsd3", "gpl2", "gpl3", "mit"];

/// Licenses whose text gets a copyright line with the authors prepended.
pub const SIGNED_LICENSES: [&str; 3] = ["bsd2", "bsd3", "mit"];

pub const DEFAULT_SUBDIRECTORIES: [&str; 7] = [
    "build",
    "coccinelle",
    "doc",
    "examples",
    "img",
    "src",
    "tests",
];

/// Relative to the user's home directory.
pub const USER_CONFIG_DIR: &str = ".config/skaff";
pub const LICENSE_DIR_NAME: &str = "license";
pub const TEMPLATE_DIR_NAME: &str = "template";

/// Initial `getpwuid_r` buffer; doubled on `ERANGE` up to the maximum.
pub const PASSWD_BUFFER_SIZE: usize = 1024;
pub const PASSWD_BUFFER_MAX: usize = 1 << 20;
