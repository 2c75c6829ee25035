//! Interactive selection through `fzf`.

use log::{debug, info};

use crate::error::{Error, Result};
use crate::execution::{CommandFailure, CommandRunner, Invocation};

/// Arguments passed to the selector: keep our ANSI styling, no preview pane.
pub const SELECTOR_ARGS: [&str; 2] = ["--ansi", "--no-preview"];

/// What the user did in the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Selected(String),
    Cancelled,
}

pub struct Fzf<'a, R: CommandRunner> {
    runner: &'a R,
    program: &'a str,
}

impl<'a, R: CommandRunner> Fzf<'a, R> {
    pub fn new(runner: &'a R, program: &'a str) -> Self {
        Self { runner, program }
    }

    /// Shows `candidates` (newline separated) and returns the chosen line.
    ///
    /// A non-zero exit (aborted, no match) is a [`Selection::Cancelled`], as is
    /// a blank selection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CommandExecutionFailed`] if the selector cannot be
    /// started or its pipes fail.
    pub fn select(&self, candidates: &str) -> Result<Selection> {
        let invocation = Invocation::new(self.program, &SELECTOR_ARGS).with_input(candidates);
        debug!("Running `{invocation}`");

        match self.runner.run(&invocation) {
            Ok(output) => {
                let selected = output.trim();
                if selected.is_empty() {
                    Ok(Selection::Cancelled)
                } else {
                    Ok(Selection::Selected(selected.to_string()))
                }
            }
            Err(CommandFailure::Exit { code }) => {
                info!("Selector exited with code {code:?}, nothing selected");
                Ok(Selection::Cancelled)
            }
            Err(failure) => Err(Error::command_execution_failed(
                invocation.to_string(),
                failure,
            )),
        }
    }
}
