//! Configuration for a scaffolding run.
//!
//! The [`ConfigStore`] holds every choice needed to scaffold one batch of
//! project directories:
//! - accumulating author, directory and subdirectory sets
//! - language and license choices validated against probed allowed sets
//! - search paths for user license and template overrides
//! - environment variable overrides applied through the builder

mod builder;
mod constants;
mod defaults;
mod environment;
mod error;
mod names;
mod probe;
mod resolve;
mod store;
mod types;

pub use builder::ConfigBuilder;
pub use constants::{
    DEFAULT_LANGUAGE, DEFAULT_LICENSE, DEFAULT_QUIET, DEFAULT_SUBDIRECTORIES, SIGNED_LICENSES,
    STOCK_LANGUAGES, STOCK_LICENSES,
};
pub use defaults::author_fetch;
pub use error::{ConfigError, ErrorKind};
pub use resolve::Resource;
pub use types::{
    ConfigSnapshot, ConfigStore, Field, LicenseFormat, PathKind, PathOverrides, SearchPaths,
};
