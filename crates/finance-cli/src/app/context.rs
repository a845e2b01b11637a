//! Application context for the Finance CLI.
//!
//! Combines CLI arguments with the lazily-loaded config file.

use once_cell::unsync::OnceCell;

use finance_core::{FinanceManager, InMemoryCategories};

use crate::cli::{Cli, FormatArg};
use crate::config::{load_config, FinanceConfig};
use crate::ui::{OutputMode, UiContext};

use super::resolver::resolve_config_path;

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<FinanceConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it on first use.
    pub fn config(&self) -> anyhow::Result<&FinanceConfig> {
        self.config.get_or_try_init(|| match resolve_config_path(self.cli) {
            Some(path) => load_config(&path),
            None => {
                tracing::debug!("no config location, using defaults");
                Ok(FinanceConfig::default())
            }
        })
    }

    /// Currency for new accounts: `--currency`, then config.
    pub fn currency(&self) -> anyhow::Result<String> {
        if let Some(code) = self.cli.currency.as_deref() {
            let code = code.trim();
            if code.is_empty() {
                return Err(anyhow::anyhow!("--currency cannot be empty"));
            }
            return Ok(code.to_uppercase());
        }
        Ok(self.config()?.ledger.currency.clone())
    }

    /// Resolve the UI context from flags, config, and the terminal.
    pub fn ui(&self) -> anyhow::Result<UiContext> {
        let config = self.config()?;
        Ok(UiContext::from_env(
            self.cli.format.map(|f| match f {
                FormatArg::Plain => OutputMode::Plain,
                FormatArg::Pretty => OutputMode::Pretty,
            }),
            self.cli.no_color || !config.ui.color,
            self.cli.ascii || config.ui.ascii,
        ))
    }

    /// Build the session's manager with the configured currency and categories.
    pub fn build_manager(&self) -> anyhow::Result<FinanceManager> {
        let categories = InMemoryCategories::with_defaults(self.config()?.categories.clone());
        let mut manager = FinanceManager::new()
            .with_currency(self.currency()?)
            .with_categories(categories);
        manager.load_categories()?;
        Ok(manager)
    }
}
