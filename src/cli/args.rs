use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::{ConfigBuilder, PathKind};
use crate::info;

use super::commands;

/// Directory scaffolded by the listing commands when none is given.
const CURRENT_DIRECTORY: &str = ".";

/// Entry point for the `skaff` command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "skaff",
    about = info::SHORT_DESCRIPTION,
    long_about = info::LONG_DESCRIPTION,
    version,
    long_version = info::VERSION_INFO
)]
pub struct Cli {
    /// Project directories to create
    #[arg(
        value_name = "DIRECTORIES",
        required_unless_present_any = ["list_languages", "list_licenses", "show_config"]
    )]
    pub directories: Vec<String>,

    /// Author of the projects (repeatable; defaults to the current user)
    #[arg(short = 'a', long = "author", value_name = "AUTHOR")]
    pub authors: Vec<String>,

    /// Programming language of the projects
    #[arg(short = 'x', long = "language")]
    pub language: Option<String>,

    /// License to distribute the projects under
    #[arg(short = 'l', long = "license")]
    pub license: Option<String>,

    /// Subdirectory to create in every project (repeatable)
    #[arg(short = 's', long = "subdirectory", value_name = "SUBDIRECTORY")]
    pub subdirectories: Vec<String>,

    /// Never prompt for editing generated files
    #[arg(short = 'q', long = "quiet", overrides_with = "no_quiet")]
    pub quiet: bool,

    /// Prompt for editing even when SKAFF_QUIET is set
    #[arg(long = "no-quiet", overrides_with = "quiet")]
    pub no_quiet: bool,

    /// Base directory for user configuration
    #[arg(long = "config-dir", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Directory searched for user license files
    #[arg(long = "license-dir", value_name = "DIR")]
    pub license_dir: Option<PathBuf>,

    /// Directory searched for user templates
    #[arg(long = "template-dir", value_name = "DIR")]
    pub template_dir: Option<PathBuf>,

    /// Override a search path as KEY=PATH (config, license or template)
    #[arg(short = 'p', long = "path", value_name = "KEY=PATH")]
    pub paths: Vec<String>,

    /// Print the supported languages and exit
    #[arg(long = "list-languages")]
    pub list_languages: bool,

    /// Print the supported licenses and exit
    #[arg(long = "list-licenses")]
    pub list_licenses: bool,

    /// Print the resolved configuration as JSON and exit
    #[arg(long = "show-config")]
    pub show_config: bool,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        commands::run(self)
    }

    /// Whether this invocation only reports configuration.
    pub fn is_report(&self) -> bool {
        self.list_languages || self.list_licenses || self.show_config
    }

    /// Maps each flag onto the matching builder call. Unset flags stay unset
    /// so environment overrides and defaults can fill them.
    pub fn builder(&self) -> Result<ConfigBuilder> {
        let mut builder = ConfigBuilder::new();

        if self.directories.is_empty() && self.is_report() {
            builder = builder.directory(CURRENT_DIRECTORY);
        } else {
            builder = builder.directories(self.directories.iter().cloned());
        }

        if !self.authors.is_empty() {
            builder = builder.authors(self.authors.iter().cloned());
        }
        if !self.subdirectories.is_empty() {
            builder = builder.subdirectories(self.subdirectories.iter().cloned());
        }
        if let Some(language) = &self.language {
            builder = builder.language(language.clone());
        }
        if let Some(license) = &self.license {
            builder = builder.license(license.clone());
        }
        if self.quiet {
            builder = builder.quiet(true);
        } else if self.no_quiet {
            builder = builder.quiet(false);
        }

        let dirs = [
            (PathKind::Config, &self.config_dir),
            (PathKind::License, &self.license_dir),
            (PathKind::Template, &self.template_dir),
        ];
        for (kind, dir) in dirs {
            if let Some(dir) = dir {
                builder = builder.path(kind, dir.clone());
            }
        }

        let mut pairs = Ok(());
        builder = builder.with_paths(|paths| {
            pairs = self.paths.iter().try_for_each(|pair| paths.set_pair(pair));
        });
        pairs?;

        Ok(builder)
    }
}
