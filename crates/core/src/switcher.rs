//! The project switching pipeline.
//!
//! [`Switcher::run`] performs, strictly in order:
//!
//! 1. dependency checks (`fzf` first, then `gcloud`),
//! 2. the authentication check,
//! 3. fetching the project list and the current project,
//! 4. interactive selection,
//! 5. setting the selected project.
//!
//! The first failing step ends the run; nothing after it is executed.

use log::{debug, info};

use crate::cloud::Gcloud;
use crate::config::{Tools, FZF_INSTALL_HINT, GCLOUD_INSTALL_HINT};
use crate::error::{Error, Result};
use crate::execution::CommandRunner;
use crate::highlight::render_project_list;
use crate::selector::{Fzf, Selection};

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Switched(String),
    Cancelled,
}

pub struct Switcher<'a, R: CommandRunner> {
    runner: &'a R,
    tools: &'a Tools,
}

impl<'a, R: CommandRunner> Switcher<'a, R> {
    pub fn new(runner: &'a R, tools: &'a Tools) -> Self {
        Self { runner, tools }
    }

    /// Runs the whole pipeline once.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingDependency`] if `fzf` or `gcloud` cannot be found
    /// - [`Error::NotAuthenticated`] if gcloud has no active account
    /// - [`Error::CommandExecutionFailed`] if any external call fails
    pub fn run(&self) -> Result<Outcome> {
        self.check_dependencies()?;
        self.check_authenticated()?;

        let projects = self.list_projects()?;

        match self.fzf().select(&projects)? {
            Selection::Cancelled => {
                info!("No project selected");
                Ok(Outcome::Cancelled)
            }
            Selection::Selected(project_id) => {
                self.gcloud().set_project(&project_id)?;
                info!("Switched active project to `{project_id}`");
                Ok(Outcome::Switched(project_id))
            }
        }
    }

    /// Fails with the first of `fzf`, `gcloud` that is not on the path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingDependency`] naming the missing program.
    pub fn check_dependencies(&self) -> Result<()> {
        for (program, install_hint) in [
            (&self.tools.fzf, FZF_INSTALL_HINT),
            (&self.tools.gcloud, GCLOUD_INSTALL_HINT),
        ] {
            match self.runner.locate(program) {
                Some(path) => debug!("Found `{program}` at {}", path.display()),
                None => return Err(Error::missing_dependency(program, install_hint)),
            }
        }

        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`Error::NotAuthenticated`] if the active account is blank, or
    /// the underlying [`Error::CommandExecutionFailed`] if the query fails.
    pub fn check_authenticated(&self) -> Result<()> {
        match self.gcloud().active_account()? {
            Some(account) => {
                debug!("Authenticated as `{account}`");
                Ok(())
            }
            None => Err(Error::NotAuthenticated),
        }
    }

    /// The project list rendered for the selector, active project emphasized.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CommandExecutionFailed`] if either gcloud query fails.
    pub fn list_projects(&self) -> Result<String> {
        let gcloud = self.gcloud();
        let projects = gcloud.project_ids()?;
        let current = gcloud.current_project()?;
        debug!("Current project is `{}`", current.trim());

        Ok(render_project_list(&projects, &current))
    }

    fn gcloud(&self) -> Gcloud<'a, R> {
        Gcloud::new(self.runner, &self.tools.gcloud)
    }

    fn fzf(&self) -> Fzf<'a, R> {
        Fzf::new(self.runner, &self.tools.fzf)
    }
}
