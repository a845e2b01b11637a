//! Error types for finance core operations.
//!
//! Every variant is a recoverable validation failure: the CLI layer renders
//! it as a diagnostic and returns to the menu.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::money::format_amount;

/// Result type alias for finance operations.
pub type Result<T> = std::result::Result<T, FinanceError>;

/// Core error type for finance operations.
#[derive(Debug, Error, PartialEq)]
pub enum FinanceError {
    /// An operation needs at least one account
    #[error("No accounts found. Please create an account first.")]
    NoAccounts,

    /// Account id does not belong to this manager
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// 1-based account pick outside the current range
    #[error("Invalid choice: {choice} (expected 1-{count})")]
    InvalidSelection { choice: usize, count: usize },

    /// Withdrawal larger than the available balance
    #[error(
        "Insufficient funds: requested {}, available {}",
        rounded(.requested),
        rounded(.available)
    )]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    /// Balance change that does not fit in a `Decimal`
    #[error(
        "Amount out of range: {} cannot be applied to balance {}",
        rounded(.amount),
        rounded(.balance)
    )]
    BalanceOverflow { amount: Decimal, balance: Decimal },

    /// Transaction type other than deposit/withdrawal
    #[error("Invalid transaction type: {0}")]
    InvalidTransactionType(String),

    /// Search field other than account/type/amount/category/notes
    #[error("Invalid search type: {0}")]
    InvalidSearchField(String),

    /// Text that does not parse as a decimal amount
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

fn rounded(value: &Decimal) -> String {
    format_amount(*value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_insufficient_funds_message_uses_two_decimals() {
        let err = FinanceError::InsufficientFunds {
            requested: dec!(1000),
            available: dec!(100.5),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: requested 1000.00, available 100.50"
        );
    }

    #[test]
    fn test_insufficient_funds_message_rounds_like_balances() {
        let err = FinanceError::InsufficientFunds {
            requested: dec!(100.005),
            available: dec!(100.009),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: requested 100.01, available 100.01"
        );
    }

    #[test]
    fn test_invalid_selection_message() {
        let err = FinanceError::InvalidSelection { choice: 4, count: 2 };
        assert_eq!(err.to_string(), "Invalid choice: 4 (expected 1-2)");
    }
}
