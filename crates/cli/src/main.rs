use clap::Parser;
use gctx_core::error::Result;
use gctx_core::execution::SystemRunner;
use gctx_core::switcher::{Outcome, Switcher};
use log::debug;
use std::process::ExitCode;

use crate::cli_args::Args;

mod cli_args;

fn execute() -> Result<()> {
    let args = Args::parse();
    let tools = args.tools();
    debug!("Using tools: {tools:?}");

    match Switcher::new(&SystemRunner, &tools).run()? {
        Outcome::Switched(project_id) => debug!("Active project is now `{project_id}`"),
        // Nothing picked, nothing to do
        Outcome::Cancelled => {}
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
