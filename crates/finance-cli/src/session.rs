//! The interactive menu loop.
//!
//! One choice is read, one operation runs to completion, and the loop returns
//! to the menu. Domain errors are printed as diagnostics and never end the
//! session; only `Exit`, end of input, or an I/O failure do.

use finance_core::{FinanceError, FinanceManager};

use crate::commands;
use crate::output::{render_menu, MENU_ITEMS};
use crate::ui::{error_message, is_input_closed, notice, Badge, Prompter, UiContext};

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateAccount,
    ListAccounts,
    PerformTransaction,
    DisplayTransactions,
    SearchTransactions,
    AccountSummary,
    ManageCategories,
    Exit,
}

impl MenuChoice {
    /// Parse a 1-based menu number.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u32>().ok()? {
            1 => Some(Self::CreateAccount),
            2 => Some(Self::ListAccounts),
            3 => Some(Self::PerformTransaction),
            4 => Some(Self::DisplayTransactions),
            5 => Some(Self::SearchTransactions),
            6 => Some(Self::AccountSummary),
            7 => Some(Self::ManageCategories),
            8 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// State for one interactive run.
pub struct Session {
    pub ui: UiContext,
    pub manager: FinanceManager,
    pub prompter: Box<dyn Prompter>,
    quiet: bool,
}

impl Session {
    pub fn new(
        ui: UiContext,
        manager: FinanceManager,
        prompter: Box<dyn Prompter>,
        quiet: bool,
    ) -> Self {
        Self {
            ui,
            manager,
            prompter,
            quiet,
        }
    }

    /// Print a line to the console.
    pub fn say(&self, message: &str) {
        println!("{}", message);
    }

    /// Run until Exit or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        tracing::info!(currency = %self.manager.currency(), "session started");

        loop {
            if !self.quiet {
                self.say(&render_menu(&self.ui));
            }

            let input = match self.prompter.token("Enter your choice") {
                Ok(input) => input,
                Err(err) if is_input_closed(&err) => break,
                Err(err) => return Err(err),
            };

            let Some(choice) = MenuChoice::parse(&input) else {
                let hint = format!("Enter a number from 1 to {}.", MENU_ITEMS.len());
                self.say(&error_message(
                    &self.ui,
                    "Invalid choice. Please try again.",
                    Some(&hint),
                ));
                continue;
            };

            if choice == MenuChoice::Exit {
                break;
            }

            match self.dispatch(choice) {
                Ok(()) => {}
                Err(err) if is_input_closed(&err) => break,
                Err(err) => match err.downcast_ref::<FinanceError>() {
                    Some(refused @ FinanceError::InsufficientFunds { .. }) => {
                        self.say(&notice(&self.ui, Badge::Warn, &refused.to_string()));
                    }
                    Some(domain) => {
                        tracing::debug!(?choice, error = %domain, "operation aborted");
                        self.say(&error_message(&self.ui, &domain.to_string(), None));
                    }
                    None => return Err(err),
                },
            }
        }

        self.say(&notice(&self.ui, Badge::Info, "Exiting program..."));
        tracing::info!(
            accounts = self.manager.account_count(),
            transactions = self.manager.transaction_count(),
            "session ended"
        );
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> anyhow::Result<()> {
        match choice {
            MenuChoice::CreateAccount => commands::accounts::handle_create(self),
            MenuChoice::ListAccounts => commands::accounts::handle_list(self),
            MenuChoice::PerformTransaction => commands::transactions::handle_perform(self),
            MenuChoice::DisplayTransactions => commands::transactions::handle_display(self),
            MenuChoice::SearchTransactions => commands::transactions::handle_search(self),
            MenuChoice::AccountSummary => commands::summary::handle_summary(self),
            MenuChoice::ManageCategories => commands::categories::handle_manage(self),
            MenuChoice::Exit => Ok(()),
        }
    }
}
