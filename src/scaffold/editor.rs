use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, bail};
use tracing::{debug, warn};

const FALLBACK_EDITORS: [&str; 2] = ["vim", "vi"];

/// Opens a generated file for interactive editing.
pub trait ConfigEditor {
    fn edit(&mut self, path: &Path) -> Result<()>;
}

/// `$EDITOR`, or the first of `vim`/`vi` on `PATH`.
#[derive(Debug, Clone, Default)]
pub struct SystemEditor {
    program: Option<PathBuf>,
    args: Vec<String>,
}

impl SystemEditor {
    pub fn from_env() -> Self {
        let configured = std::env::var("EDITOR").ok().and_then(|value| parse_command(&value));
        if let Some((program, args)) = configured {
            return Self {
                program: Some(program),
                args,
            };
        }

        let program = FALLBACK_EDITORS
            .iter()
            .find_map(|candidate| which::which(candidate).ok());
        Self {
            program,
            args: Vec::new(),
        }
    }
}

impl ConfigEditor for SystemEditor {
    fn edit(&mut self, path: &Path) -> Result<()> {
        let Some(program) = &self.program else {
            bail!("No editor found; set $EDITOR or install vim");
        };

        debug!(editor = %program.display(), file = %path.display(), "launching editor");
        let status = Command::new(program)
            .args(&self.args)
            .arg(path)
            .status()
            .with_context(|| format!("Failed to launch editor {}", program.display()))?;

        if !status.success() {
            warn!(
                editor = %program.display(),
                file = %path.display(),
                code = ?status.code(),
                "editor exited unsuccessfully"
            );
        }
        Ok(())
    }
}

/// Splits an `$EDITOR` value such as `code --wait` into program and args.
fn parse_command(value: &str) -> Option<(PathBuf, Vec<String>)> {
    let mut parts = value.split_whitespace();
    let program = PathBuf::from(parts.next()?);
    Some((program, parts.map(str::to_string).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_command_splits_arguments() {
        let (program, args) = parse_command("code --wait -n").unwrap();
        assert_eq!(program, PathBuf::from("code"));
        assert_eq!(args, vec!["--wait".to_string(), "-n".to_string()]);
        assert!(parse_command("   ").is_none());
    }

    #[test]
    fn missing_editor_is_an_error() {
        let mut editor = SystemEditor::default();
        let err = editor.edit(Path::new("CMakeLists.txt")).unwrap_err();
        assert!(err.to_string().contains("No editor found"));
    }
}
