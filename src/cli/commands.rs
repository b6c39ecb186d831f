use anyhow::{Context, Result};
use colored::*;
use tracing::debug;

use crate::config::{ConfigSnapshot, ConfigStore};
use crate::scaffold::{self, PromptSession, SystemEditor};

use super::args::Cli;

pub(crate) fn run(cli: Cli) -> Result<()> {
    let builder = cli.builder()?.with_env_overrides()?;
    let config = builder.build().context("Invalid configuration")?;
    debug!(directories = ?config.directories(), "configuration resolved");

    if cli.is_report() {
        return report(&cli, &config);
    }

    let mut session = PromptSession::stdio();
    let mut editor = SystemEditor::from_env();
    let created = scaffold::scaffold(&config, &mut session, &mut editor)?;

    for base in &created {
        println!("{} {}", "Created".green().bold(), base.display());
    }
    println!(
        "Scaffolded {} project(s) with {} under the {} license.",
        created.len(),
        config.language().cyan(),
        config.license().cyan()
    );

    Ok(())
}

fn report(cli: &Cli, config: &ConfigStore) -> Result<()> {
    if cli.list_languages {
        println!("{}", "Languages:".bold());
        for language in config.languages() {
            println!("  {}", mark_default(&language, config.language()));
        }
    }

    if cli.list_licenses {
        println!("{}", "Licenses:".bold());
        for license in config.licenses() {
            println!("  {}", mark_default(&license, config.license()));
        }
    }

    if cli.show_config {
        let snapshot = ConfigSnapshot::from(config);
        let json = serde_json::to_string_pretty(&snapshot)
            .context("Failed to serialize configuration")?;
        println!("{json}");
    }

    Ok(())
}

fn mark_default(name: &str, selected: &str) -> String {
    if name == selected {
        format!("{} {}", name.green(), "(selected)".dimmed())
    } else {
        name.to_string()
    }
}
