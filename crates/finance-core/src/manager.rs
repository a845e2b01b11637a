//! The finance manager: account arena, global transaction log, and queries.
//!
//! Accounts live in an arena keyed by `AccountId`. Every mutation goes
//! through the arena, so a posted transaction always changes the stored
//! account the caller selected, and every transaction in the global log
//! refers back to that account by id.

use std::collections::HashMap;

use chrono::Utc;
use rust_decimal::Decimal;

use crate::category::{CategoryCatalog, InMemoryCategories};
use crate::error::{FinanceError, Result};
use crate::model::{Account, AccountId, Transaction, TransactionType};
use crate::money::DEFAULT_CURRENCY;
use crate::search::SearchQuery;

/// A transaction paired with the account it references.
#[derive(Debug, Clone, Copy)]
pub struct TransactionView<'a> {
    pub transaction: &'a Transaction,
    pub account: &'a Account,
}

/// One account with its transactions, largest amount first.
#[derive(Debug, Clone)]
pub struct AccountSummary<'a> {
    pub account: &'a Account,
    pub transactions: Vec<&'a Transaction>,
}

/// Holds every account and every posted transaction for a session.
pub struct FinanceManager {
    currency: String,
    accounts: Vec<Account>,
    index: HashMap<AccountId, usize>,
    transactions: Vec<Transaction>,
    categories: Box<dyn CategoryCatalog>,
}

impl Default for FinanceManager {
    fn default() -> Self {
        Self::new()
    }
}

impl FinanceManager {
    /// Empty manager using the default currency and an empty category catalog.
    pub fn new() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            accounts: Vec::new(),
            index: HashMap::new(),
            transactions: Vec::new(),
            categories: Box::new(InMemoryCategories::new()),
        }
    }

    /// Currency assigned to accounts created from now on.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_categories(mut self, categories: impl CategoryCatalog + 'static) -> Self {
        self.categories = Box::new(categories);
        self
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    // --- Categories ---

    pub fn load_categories(&mut self) -> Result<()> {
        self.categories.load()
    }

    pub fn categories(&self) -> Vec<(&str, &[String])> {
        self.categories.categories()
    }

    pub fn add_category(&mut self, category: &str, item: Option<&str>) -> Result<()> {
        self.categories.add(category, item)
    }

    // --- Accounts ---

    /// Create an account and return its id. Duplicate names are allowed.
    pub fn create_account(
        &mut self,
        name: impl Into<String>,
        initial_balance: Decimal,
        account_type: impl Into<String>,
    ) -> AccountId {
        let account =
            Account::new(name, initial_balance, account_type).with_currency(self.currency.clone());
        let id = account.id();
        tracing::debug!(account = %id, name = %account.name, "account created");
        self.index.insert(id, self.accounts.len());
        self.accounts.push(account);
        id
    }

    /// Accounts in creation order. Each call starts a fresh pass.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> + '_ {
        self.accounts.iter()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    pub fn has_accounts(&self) -> bool {
        !self.accounts.is_empty()
    }

    pub fn account(&self, id: AccountId) -> Result<&Account> {
        self.index
            .get(&id)
            .map(|&pos| &self.accounts[pos])
            .ok_or_else(|| FinanceError::AccountNotFound(id.to_string()))
    }

    fn account_mut(&mut self, id: AccountId) -> Result<&mut Account> {
        match self.index.get(&id) {
            Some(&pos) => Ok(&mut self.accounts[pos]),
            None => Err(FinanceError::AccountNotFound(id.to_string())),
        }
    }

    /// Resolve a 1-based position from the account picker.
    ///
    /// # Errors
    ///
    /// - `FinanceError::NoAccounts` when nothing has been created yet
    /// - `FinanceError::InvalidSelection` when `choice` is out of range
    pub fn select_account(&self, choice: usize) -> Result<AccountId> {
        if self.accounts.is_empty() {
            return Err(FinanceError::NoAccounts);
        }
        if choice < 1 || choice > self.accounts.len() {
            return Err(FinanceError::InvalidSelection {
                choice,
                count: self.accounts.len(),
            });
        }
        Ok(self.accounts[choice - 1].id())
    }

    // --- Transactions ---

    /// Apply a deposit or withdrawal to the stored account and log it.
    ///
    /// A refused withdrawal or an overflowing balance leaves the account and
    /// both logs untouched.
    pub fn perform_transaction(
        &mut self,
        account_id: AccountId,
        kind: TransactionType,
        amount: Decimal,
        category: &str,
        notes: &str,
    ) -> Result<&Transaction> {
        let created_at = match self.transactions.last() {
            Some(last) => Utc::now().max(last.created_at()),
            None => Utc::now(),
        };

        let account = self.account_mut(account_id)?;
        match kind {
            TransactionType::Deposit => account.deposit(amount)?,
            TransactionType::Withdrawal => account.withdraw(amount)?,
        }

        let transaction =
            Transaction::with_timestamp(kind, amount, account_id, category, notes, created_at);
        account.record_transaction(transaction.clone());
        tracing::debug!(
            account = %account_id,
            kind = %kind,
            amount = %amount,
            balance = %account.balance(),
            "transaction posted"
        );

        self.transactions.push(transaction);
        Ok(&self.transactions[self.transactions.len() - 1])
    }

    pub fn deposit(
        &mut self,
        account_id: AccountId,
        amount: Decimal,
        category: &str,
        notes: &str,
    ) -> Result<&Transaction> {
        self.perform_transaction(account_id, TransactionType::Deposit, amount, category, notes)
    }

    pub fn withdraw(
        &mut self,
        account_id: AccountId,
        amount: Decimal,
        category: &str,
        notes: &str,
    ) -> Result<&Transaction> {
        self.perform_transaction(
            account_id,
            TransactionType::Withdrawal,
            amount,
            category,
            notes,
        )
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// The global log in posting order.
    pub fn transactions(&self) -> impl Iterator<Item = TransactionView<'_>> + '_ {
        self.transactions.iter().filter_map(|tx| self.view(tx))
    }

    /// Global-log entries matching `query`, in posting order.
    pub fn search<'a>(
        &'a self,
        query: &'a SearchQuery,
    ) -> impl Iterator<Item = TransactionView<'a>> + 'a {
        self.transactions()
            .filter(move |view| query.matches(view.transaction, &view.account.name))
    }

    /// Per-account summaries in creation order.
    ///
    /// Each account's transactions are sorted by amount, largest first; equal
    /// amounts keep posting order.
    pub fn account_summary(&self) -> Result<Vec<AccountSummary<'_>>> {
        if self.accounts.is_empty() {
            return Err(FinanceError::NoAccounts);
        }

        let summaries = self
            .accounts
            .iter()
            .map(|account| {
                let mut transactions: Vec<&Transaction> = self
                    .transactions
                    .iter()
                    .filter(|tx| tx.account_id() == account.id())
                    .collect();
                transactions.sort_by(|a, b| b.amount().cmp(&a.amount()));
                AccountSummary {
                    account,
                    transactions,
                }
            })
            .collect();
        Ok(summaries)
    }

    fn view<'a>(&'a self, transaction: &'a Transaction) -> Option<TransactionView<'a>> {
        self.account(transaction.account_id())
            .ok()
            .map(|account| TransactionView {
                transaction,
                account,
            })
    }
}
