//! The `gcloud` calls gctx relies on.

use log::debug;

use crate::error::{Error, Result};
use crate::execution::{CommandRunner, Invocation};

/// Thin wrapper issuing `gcloud` subcommands through a [`CommandRunner`].
pub struct Gcloud<'a, R: CommandRunner> {
    runner: &'a R,
    program: &'a str,
}

impl<'a, R: CommandRunner> Gcloud<'a, R> {
    pub fn new(runner: &'a R, program: &'a str) -> Self {
        Self { runner, program }
    }

    /// The account gcloud is logged in with, `None` when there is none.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CommandExecutionFailed`] if the query itself fails.
    pub fn active_account(&self) -> Result<Option<String>> {
        let output = self.run(&["config", "list", "--format", "value(core.account)"])?;
        let account = output.trim();

        if account.is_empty() {
            Ok(None)
        } else {
            Ok(Some(account.to_string()))
        }
    }

    /// Raw newline separated project ids, as printed by gcloud.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CommandExecutionFailed`] if gcloud fails.
    pub fn project_ids(&self) -> Result<String> {
        self.run(&["projects", "list", "--format", "value(projectId)"])
    }

    /// Raw `core/project` value, including its trailing newline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CommandExecutionFailed`] if gcloud fails.
    pub fn current_project(&self) -> Result<String> {
        self.run(&["config", "get-value", "core/project"])
    }

    /// Makes `project_id` the active project.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CommandExecutionFailed`] if gcloud fails.
    pub fn set_project(&self, project_id: &str) -> Result<()> {
        self.run(&["config", "set", "project", project_id])?;
        Ok(())
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let invocation = Invocation::new(self.program, args);
        debug!("Running `{invocation}`");

        self.runner
            .run(&invocation)
            .map_err(|failure| Error::command_execution_failed(invocation.to_string(), failure))
    }
}
