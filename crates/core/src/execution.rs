//! Running external programs.
//!
//! Everything gctx does goes through [`CommandRunner`], so the orchestration
//! in [`crate::switcher`] never touches `std::process` directly.

use std::fmt::{Display, Formatter};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use thiserror::Error;

/// Why an external program did not produce a usable result.
#[derive(Error, Debug)]
pub enum CommandFailure {
    #[error("could not start sub process: {}", _0)]
    Spawn(#[source] std::io::Error),

    #[error("error talking to sub process: {}", _0)]
    Io(#[source] std::io::Error),

    #[error("sub process exited with non-success code {}", describe_exit_code(.code))]
    Exit { code: Option<i32> },
}

fn describe_exit_code(code: &Option<i32>) -> String {
    match *code {
        Some(code) => code.to_string(),
        None => "(terminated by signal)".to_string(),
    }
}

/// Where a sub process reads its standard input from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    /// Forward our own stdin, so credential prompts can reach the user.
    Inherit,
    /// Write the given text to the process and close its stdin.
    Piped(&'a str),
}

/// A single external program call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<'a> {
    pub program: &'a str,
    pub args: Vec<&'a str>,
    pub input: Input<'a>,
}

impl<'a> Invocation<'a> {
    pub fn new(program: &'a str, args: &[&'a str]) -> Self {
        Self {
            program,
            args: args.to_vec(),
            input: Input::Inherit,
        }
    }

    #[must_use]
    pub fn with_input(mut self, input: &'a str) -> Self {
        self.input = Input::Piped(input);
        self
    }
}

impl Display for Invocation<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Locates and runs external programs.
pub trait CommandRunner {
    /// Resolves `program` against the execution path.
    fn locate(&self, program: &str) -> Option<PathBuf>;

    /// Runs the invocation to completion and returns its standard output.
    ///
    /// # Errors
    ///
    /// Returns a [`CommandFailure`] if the process cannot be started, its pipes
    /// fail, or it exits with a non-zero status.
    fn run(&self, invocation: &Invocation<'_>) -> Result<String, CommandFailure>;
}

/// Runs programs with `std::process`, stderr going straight to the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }

    fn run(&self, invocation: &Invocation<'_>) -> Result<String, CommandFailure> {
        let mut command = Command::new(invocation.program);
        command
            .args(&invocation.args)
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());

        let child = match invocation.input {
            Input::Inherit => command.stdin(Stdio::inherit()).spawn(),
            Input::Piped(_) => command.stdin(Stdio::piped()).spawn(),
        };
        let mut child = child.map_err(CommandFailure::Spawn)?;

        if let Input::Piped(text) = invocation.input {
            // Dropping the handle closes the pipe so the reader sees EOF.
            if let Some(mut stdin) = child.stdin.take() {
                match stdin.write_all(text.as_bytes()) {
                    // The process quit before reading everything; its exit status decides.
                    Err(e) if e.kind() == ErrorKind::BrokenPipe => {}
                    result => result.map_err(CommandFailure::Io)?,
                }
            }
        }

        let output = child.wait_with_output().map_err(CommandFailure::Io)?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(CommandFailure::Exit {
                code: output.status.code(),
            })
        }
    }
}
