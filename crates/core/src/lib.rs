//! gctx Core Library
//!
//! This crate provides the core functionality for gctx, a tool that switches
//! the active `gcloud` project by picking it from a list with `fzf`.
//!
//! # Key Features
//!
//! - **Preflight Checks**: Both tools must be on `PATH` and gcloud must be logged in
//! - **Project Listing**: The active project is emphasized in the list shown to the user
//! - **Typed Selection**: Cancelling the selector is a normal outcome, not an error
//! - **Process Seam**: All external calls go through [`execution::CommandRunner`]
//!
//! # Examples
//!
//! Running the full pipeline against the real tools:
//!
//! ```no_run
//! use gctx_core::config::Tools;
//! use gctx_core::execution::SystemRunner;
//! use gctx_core::switcher::{Outcome, Switcher};
//!
//! let tools = Tools::default();
//! match Switcher::new(&SystemRunner, &tools).run()? {
//!     Outcome::Switched(project) => println!("Now using {project}"),
//!     Outcome::Cancelled => {}
//! }
//! # Ok::<(), gctx_core::error::Error>(())
//! ```

pub mod cloud;
pub mod config;
pub mod error;
pub mod execution;
pub mod highlight;
pub mod selector;
pub mod switcher;
