//! Command-line argument parsing.
//!
//! gctx takes no positional arguments. The options only override where the
//! two external tools are found.

use clap::Parser;
use gctx_core::config::Tools;

/// Switch the active gcloud project by picking it with fzf.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use gctx_cli::cli_args::Args;
///
/// let args = Args::parse_from(["gctx", "--fzf-path", "sk"]);
/// assert_eq!(args.tools().fzf, "sk");
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(name = "gctx", version, term_width = 0)]
pub struct Args {
    /// Fuzzy-selector to run instead of `fzf` found on `PATH`.
    #[arg(long, value_name = "PATH")]
    pub fzf_path: Option<String>,

    /// Cloud CLI to run instead of `gcloud` found on `PATH`.
    #[arg(long, value_name = "PATH")]
    pub gcloud_path: Option<String>,
}

impl Args {
    /// The tools to drive, with `~` expanded in any override.
    pub fn tools(&self) -> Tools {
        Tools::from_overrides(&self.fzf_path, &self.gcloud_path)
    }
}
