//! Accounts and their identifiers.

use std::fmt;

use rust_decimal::Decimal;
use uuid::Uuid;

use super::transaction::{Transaction, TransactionType};
use crate::error::{FinanceError, Result};
use crate::money::DEFAULT_CURRENCY;

/// Stable identifier assigned to an account when it is created.
///
/// Transactions and the account picker refer to accounts through this id,
/// never through a copy of the account itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(Uuid);

impl AccountId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named balance with a classification and a currency.
#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,

    /// Display and search key; not unique
    pub name: String,

    /// Free-text classification (Checking, Savings, ...)
    pub account_type: String,

    pub currency: String,

    balance: Decimal,

    transactions: Vec<Transaction>,
}

impl Account {
    /// Create an account in the default currency.
    ///
    /// Neither an empty name nor a negative opening balance is rejected.
    pub fn new(name: impl Into<String>, balance: Decimal, account_type: impl Into<String>) -> Self {
        Self {
            id: AccountId::new(),
            name: name.into(),
            account_type: account_type.into(),
            currency: DEFAULT_CURRENCY.to_string(),
            balance,
            transactions: Vec::new(),
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Credit the account. Zero and negative amounts are applied as given.
    pub fn deposit(&mut self, amount: Decimal) -> Result<()> {
        self.balance = self.checked_apply(self.balance.checked_add(amount), amount)?;
        Ok(())
    }

    /// Debit the account, refusing when `amount` exceeds the balance.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<()> {
        if amount > self.balance {
            tracing::warn!(
                account = %self.id,
                requested = %amount,
                available = %self.balance,
                "withdrawal refused"
            );
            return Err(FinanceError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance = self.checked_apply(self.balance.checked_sub(amount), amount)?;
        Ok(())
    }

    fn checked_apply(&self, result: Option<Decimal>, amount: Decimal) -> Result<Decimal> {
        result.ok_or(FinanceError::BalanceOverflow {
            amount,
            balance: self.balance,
        })
    }

    /// Append to this account's own history.
    pub fn record_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// This account's recorded history, oldest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Type/amount pairs for this account's history, oldest first.
    pub fn list_transactions(&self) -> impl Iterator<Item = (TransactionType, Decimal)> + '_ {
        self.transactions.iter().map(|tx| (tx.kind(), tx.amount()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_account_defaults() {
        let account = Account::new("Alice", dec!(100), "Checking");
        assert_eq!(account.name, "Alice");
        assert_eq!(account.account_type, "Checking");
        assert_eq!(account.currency, "USD");
        assert_eq!(account.balance(), dec!(100));
        assert!(account.transactions().is_empty());
    }

    #[test]
    fn test_new_account_allows_empty_name_and_negative_balance() {
        let account = Account::new("", dec!(-25), "Credit Card");
        assert!(account.name.is_empty());
        assert_eq!(account.balance(), dec!(-25));
    }

    #[test]
    fn test_ids_are_distinct() {
        let a = Account::new("Same", dec!(0), "Checking");
        let b = Account::new("Same", dec!(0), "Checking");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_deposit_is_unconditional() {
        let mut account = Account::new("Alice", dec!(10), "Checking");
        account.deposit(dec!(5)).unwrap();
        account.deposit(dec!(0)).unwrap();
        account.deposit(dec!(-2)).unwrap();
        assert_eq!(account.balance(), dec!(13));
    }

    #[test]
    fn test_deposit_overflow_leaves_balance() {
        let mut account = Account::new("Alice", Decimal::MAX, "Checking");
        let err = account.deposit(dec!(1)).unwrap_err();
        assert!(matches!(err, FinanceError::BalanceOverflow { .. }));
        assert_eq!(account.balance(), Decimal::MAX);
    }

    #[test]
    fn test_withdraw_within_balance() {
        let mut account = Account::new("Alice", dec!(100), "Checking");
        account.withdraw(dec!(100)).unwrap();
        assert_eq!(account.balance(), dec!(0));
    }

    #[test]
    fn test_withdraw_over_balance_is_refused() {
        let mut account = Account::new("Alice", dec!(100), "Checking");
        let err = account.withdraw(dec!(100.01)).unwrap_err();
        assert_eq!(
            err,
            FinanceError::InsufficientFunds {
                requested: dec!(100.01),
                available: dec!(100),
            }
        );
        assert_eq!(account.balance(), dec!(100));
    }

    #[test]
    fn test_list_transactions_in_insertion_order() {
        let mut account = Account::new("Alice", dec!(0), "Checking");
        let id = account.id();
        account.record_transaction(Transaction::new(
            TransactionType::Deposit,
            dec!(50),
            id,
            "Salary",
            "",
        ));
        account.record_transaction(Transaction::new(
            TransactionType::Withdrawal,
            dec!(20),
            id,
            "Food",
            "",
        ));

        let listed: Vec<_> = account.list_transactions().collect();
        assert_eq!(
            listed,
            vec![
                (TransactionType::Deposit, dec!(50)),
                (TransactionType::Withdrawal, dec!(20)),
            ]
        );
    }
}
