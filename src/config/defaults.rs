use std::path::PathBuf;

use dirs::home_dir;

use super::constants::*;
use super::error::ConfigError;
use super::types::{PathOverrides, SearchPaths};

/// Current user's display name, taken from the passwd record of the process
/// uid: the GECOS full name, falling back to the login name.
pub fn author_fetch() -> Result<String, ConfigError> {
    let account = current_account()?;
    display_name(&account.name, &account.gecos).ok_or_else(|| {
        ConfigError::AuthorLookup(format!("passwd entry for uid {} has no name", account.uid))
    })
}

struct Account {
    uid: u32,
    name: String,
    gecos: String,
}

/// First comma-separated GECOS field, else the login name.
pub(super) fn display_name(name: &str, gecos: &str) -> Option<String> {
    let full_name = gecos.split(',').next().unwrap_or_default().trim();
    [full_name, name.trim()]
        .into_iter()
        .find(|candidate| !candidate.is_empty())
        .map(str::to_string)
}

#[cfg(unix)]
fn current_account() -> Result<Account, ConfigError> {
    use std::ffi::CStr;
    use std::{io, mem, ptr};

    fn owned(field: *const libc::c_char) -> String {
        if field.is_null() {
            return String::new();
        }
        // SAFETY: non-null fields of a record filled by getpwuid_r point at
        // NUL-terminated strings inside the caller's buffer.
        unsafe { CStr::from_ptr(field) }.to_string_lossy().into_owned()
    }

    let uid = unsafe { libc::getuid() };
    let mut buffer: Vec<libc::c_char> = vec![0; PASSWD_BUFFER_SIZE];

    loop {
        // SAFETY: `passwd` is plain data; an all-zero value is valid.
        let mut record: libc::passwd = unsafe { mem::zeroed() };
        let mut found: *mut libc::passwd = ptr::null_mut();
        // SAFETY: every pointer refers to live storage owned by this frame.
        let code = unsafe {
            libc::getpwuid_r(uid, &mut record, buffer.as_mut_ptr(), buffer.len(), &mut found)
        };

        if code == libc::ERANGE && buffer.len() < PASSWD_BUFFER_MAX {
            buffer.resize(buffer.len() * 2, 0);
            continue;
        }
        if code != 0 {
            return Err(ConfigError::AuthorLookup(format!(
                "passwd lookup for uid {uid} failed: {}",
                io::Error::from_raw_os_error(code)
            )));
        }
        if found.is_null() {
            return Err(ConfigError::AuthorLookup(format!("no passwd entry for uid {uid}")));
        }

        return Ok(Account {
            uid,
            name: owned(record.pw_name),
            gecos: owned(record.pw_gecos),
        });
    }
}

#[cfg(not(unix))]
fn current_account() -> Result<Account, ConfigError> {
    use super::environment::env_string;

    let name = env_string("USERNAME")?
        .ok_or_else(|| ConfigError::AuthorLookup("USERNAME is not set".to_string()))?;
    Ok(Account {
        uid: 0,
        name,
        gecos: String::new(),
    })
}

pub fn user_config_dir() -> Result<PathBuf, ConfigError> {
    let mut path = home_dir().ok_or(ConfigError::NoHomeDirectory)?;
    path.push(USER_CONFIG_DIR);
    Ok(path)
}

/// Fills every unset entry of `overrides` with its per-user default.
pub fn resolve_paths(overrides: PathOverrides) -> Result<SearchPaths, ConfigError> {
    let PathOverrides {
        config,
        license,
        template,
    } = overrides;

    let needs_default = config.is_none() || license.is_none() || template.is_none();
    let base = if needs_default {
        Some(user_config_dir()?)
    } else {
        None
    };
    let default_under = |name: &str| base.as_ref().map(|b| b.join(name)).unwrap_or_default();

    Ok(SearchPaths {
        config: config.unwrap_or_else(|| base.clone().unwrap_or_default()),
        license: license.unwrap_or_else(|| default_under(LICENSE_DIR_NAME)),
        template: template.unwrap_or_else(|| default_under(TEMPLATE_DIR_NAME)),
    })
}

pub fn default_subdirectories() -> impl Iterator<Item = &'static str> {
    DEFAULT_SUBDIRECTORIES.into_iter()
}
