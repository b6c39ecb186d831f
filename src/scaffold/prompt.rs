use std::io::{self, BufRead, StdinLock, Stdout, Write};

use anyhow::Result;
use colored::*;

const RULE_WIDTH: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditDecision {
    Edit,
    Skip,
}

/// Asks, once per project directory, whether generated files should be
/// opened for editing.
///
/// Answering `a` skips every remaining directory of the session.
pub struct PromptSession<R, W> {
    input: R,
    output: W,
    skip_rest: bool,
}

impl PromptSession<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            skip_rest: false,
        }
    }

    pub fn skip_rest(&self) -> bool {
        self.skip_rest
    }

    pub fn decide(&mut self, directory: &str, quiet: bool) -> Result<EditDecision> {
        if quiet || self.skip_rest {
            return Ok(EditDecision::Skip);
        }

        self.banner(directory)?;

        loop {
            write!(self.output, "Your choice [c/k/a] (default: c): ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                self.skip_rest = true;
                return Ok(EditDecision::Skip);
            }

            match line.trim().to_lowercase().as_str() {
                "" | "c" => return Ok(EditDecision::Edit),
                "k" => return Ok(EditDecision::Skip),
                "a" => {
                    self.skip_rest = true;
                    return Ok(EditDecision::Skip);
                }
                other => writeln!(self.output, "Unknown choice '{other}'.")?,
            }
        }
    }

    fn banner(&mut self, directory: &str) -> io::Result<()> {
        let rule = "-".repeat(RULE_WIDTH);
        writeln!(self.output, "{rule}")?;
        writeln!(
            self.output,
            "Upcoming configuration editing for {}",
            directory.yellow().bold()
        )?;
        writeln!(self.output, "Press [{}] to continue the editing.", "c".purple())?;
        writeln!(self.output, "Press [{}] to skip this directory.", "k".purple())?;
        writeln!(self.output, "Press [{}] to skip all the rest.", "a".purple())?;
        writeln!(self.output, "{rule}")
    }
}
