use thiserror::Error;

use crate::execution::CommandFailure;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("gctx requires {}, please install {}", .program, .install_hint)]
    MissingDependency {
        program: String,
        install_hint: String,
    },

    #[error("You haven't logged in yet, please run `gcloud auth login ACCOUNT`")]
    NotAuthenticated,

    #[error("Command `{}` failed: {}", .command, .failure)]
    CommandExecutionFailed {
        command: String,
        failure: CommandFailure,
    },
}

impl Error {
    pub fn missing_dependency(program: &str, install_hint: &str) -> Self {
        Self::MissingDependency {
            program: program.to_string(),
            install_hint: install_hint.to_string(),
        }
    }

    pub fn command_execution_failed(command: String, failure: CommandFailure) -> Self {
        Self::CommandExecutionFailed { command, failure }
    }
}
