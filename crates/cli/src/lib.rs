//! gctx CLI Library
//!
//! This crate provides the command-line entry point for gctx. It parses the
//! arguments and hands the resolved tools to [`gctx_core::switcher::Switcher`].
//!
//! # Examples
//!
//! ```bash
//! # Pick a project interactively
//! gctx
//!
//! # Use a gcloud outside of PATH
//! gctx --gcloud-path ~/google-cloud-sdk/bin/gcloud
//!
//! # Show what is going on
//! RUST_LOG=debug gctx
//! ```

pub mod cli_args;
