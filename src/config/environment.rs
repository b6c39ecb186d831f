use std::env;
use std::path::PathBuf;

use super::builder::ConfigBuilder;
use super::error::ConfigError;
use super::types::PathKind;

pub const ENV_CONFIG_DIR: &str = "SKAFF_CONFIG_DIR";
pub const ENV_LICENSE_DIR: &str = "SKAFF_LICENSE_DIR";
pub const ENV_TEMPLATE_DIR: &str = "SKAFF_TEMPLATE_DIR";
pub const ENV_LANGUAGE: &str = "SKAFF_LANGUAGE";
pub const ENV_LICENSE: &str = "SKAFF_LICENSE";
pub const ENV_QUIET: &str = "SKAFF_QUIET";

/// Fills builder fields that are still unset from `SKAFF_*` variables.
pub fn apply_env_overrides(mut builder: ConfigBuilder) -> Result<ConfigBuilder, ConfigError> {
    let dirs = [
        (PathKind::Config, ENV_CONFIG_DIR),
        (PathKind::License, ENV_LICENSE_DIR),
        (PathKind::Template, ENV_TEMPLATE_DIR),
    ];
    for (kind, key) in dirs {
        if builder.paths.get(kind).is_none() {
            if let Some(dir) = env_string(key)? {
                builder.paths.set(kind, PathBuf::from(dir));
            }
        }
    }

    if builder.language.is_none() {
        builder.language = env_string(ENV_LANGUAGE)?;
    }

    if builder.license.is_none() {
        builder.license = env_string(ENV_LICENSE)?;
    }

    if builder.quiet.is_none() {
        builder.quiet = env_bool(ENV_QUIET)?;
    }

    Ok(builder)
}

pub fn env_string(key: &str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(val) => Ok(Some(val)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnv {
            key: key.to_string(),
            reason: "contains invalid UTF-8".to_string(),
        }),
    }
}

pub fn env_bool(key: &str) -> Result<Option<bool>, ConfigError> {
    let Some(value) = env_string(key)? else {
        return Ok(None);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        other => Err(ConfigError::InvalidEnv {
            key: key.to_string(),
            reason: format!("'{other}' is not a boolean"),
        }),
    }
}
