//! # Finance Core
//!
//! Core library for Finance - a terminal-driven personal finance ledger.
//!
//! This crate provides the domain model and the in-memory manager,
//! independent of the CLI interface. Nothing here reads from or writes to
//! the console.
//!
//! ## Architecture
//!
//! - **model**: accounts, transactions, and their identifiers
//! - **manager**: the account arena, the global transaction log, and queries
//! - **search**: field-based transaction search
//! - **category**: the category catalog capability
//! - **money**: amount parsing and two-decimal display

pub mod category;
pub mod error;
pub mod manager;
pub mod model;
pub mod money;
pub mod search;

pub use category::{CategoryCatalog, CategoryMap, InMemoryCategories};
pub use error::{FinanceError, Result};
pub use manager::{AccountSummary, FinanceManager, TransactionView};
pub use model::{Account, AccountId, Transaction, TransactionType};
pub use money::{format_amount, parse_amount, DEFAULT_CURRENCY};
pub use search::{SearchField, SearchQuery};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
