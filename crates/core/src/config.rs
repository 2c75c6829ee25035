//! Resolution of the external tools gctx drives.
//!
//! gctx keeps no configuration file of its own. The only knobs are the
//! program names (or paths) used for the fuzzy-selector and the cloud CLI,
//! which default to whatever `fzf` and `gcloud` resolve to on `PATH`.

/// Default program name of the fuzzy-selector
pub const DEFAULT_FZF: &str = "fzf";
/// Default program name of the cloud CLI
pub const DEFAULT_GCLOUD: &str = "gcloud";

/// What to install when the fuzzy-selector is missing
pub const FZF_INSTALL_HINT: &str = "fzf";
/// What to install when the cloud CLI is missing
pub const GCLOUD_INSTALL_HINT: &str = "gcloud";

/// Program names or paths for the two external tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tools {
    pub fzf: String,
    pub gcloud: String,
}

impl Default for Tools {
    fn default() -> Self {
        Self {
            fzf: DEFAULT_FZF.to_string(),
            gcloud: DEFAULT_GCLOUD.to_string(),
        }
    }
}

impl Tools {
    /// Builds the tool set from optional overrides, falling back to the defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use gctx_core::config::Tools;
    ///
    /// let tools = Tools::from_overrides(&None, &Some("/opt/gcloud/bin/gcloud".to_string()));
    /// assert_eq!(tools.fzf, "fzf");
    /// assert_eq!(tools.gcloud, "/opt/gcloud/bin/gcloud");
    /// ```
    pub fn from_overrides(fzf_path: &Option<String>, gcloud_path: &Option<String>) -> Self {
        Self {
            fzf: resolve_tool_path(fzf_path, DEFAULT_FZF),
            gcloud: resolve_tool_path(gcloud_path, DEFAULT_GCLOUD),
        }
    }
}

/// Picks the override when given, otherwise the default. `~` is expanded.
pub fn resolve_tool_path(path_arg: &Option<String>, default: &str) -> String {
    let path = match path_arg {
        Some(path) => path,
        None => default,
    };

    shellexpand::tilde(path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tools() {
        let tools = Tools::default();
        assert_eq!(tools.fzf, "fzf");
        assert_eq!(tools.gcloud, "gcloud");
    }

    #[test]
    fn test_from_overrides_without_overrides() {
        assert_eq!(Tools::from_overrides(&None, &None), Tools::default());
    }

    #[test]
    fn test_resolve_tool_path_with_custom_path() {
        let custom = Some("/usr/local/bin/sk".to_string());
        assert_eq!(resolve_tool_path(&custom, DEFAULT_FZF), "/usr/local/bin/sk");
    }

    #[test]
    fn test_resolve_tool_path_with_tilde() {
        let tilde_path = Some("~/google-cloud-sdk/bin/gcloud".to_string());
        let result = resolve_tool_path(&tilde_path, DEFAULT_GCLOUD);
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("google-cloud-sdk/bin/gcloud"));
    }
}
