//! Path resolution for the config file.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::default_config_path;

/// Resolve the config path: `--config`/`FINANCE_CONFIG`, then the XDG default.
///
/// `None` means there is nowhere to look, so built-in defaults apply.
pub fn resolve_config_path(cli: &Cli) -> Option<PathBuf> {
    if let Some(path) = cli.config.as_deref() {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    default_config_path()
}
