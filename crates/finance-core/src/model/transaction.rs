//! Transaction records.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::account::AccountId;
use crate::error::FinanceError;

/// Kind of balance change a transaction records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    Deposit,
    Withdrawal,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit => "Deposit",
            Self::Withdrawal => "Withdrawal",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = FinanceError;

    /// Case-insensitive match against "Deposit" / "Withdrawal".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("deposit") {
            Ok(Self::Deposit)
        } else if value.eq_ignore_ascii_case("withdrawal") {
            Ok(Self::Withdrawal)
        } else {
            Err(FinanceError::InvalidTransactionType(value.to_string()))
        }
    }
}

/// An immutable record of one deposit or withdrawal.
///
/// Fields are private; once posted a transaction never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    kind: TransactionType,
    amount: Decimal,
    account_id: AccountId,
    created_at: DateTime<Utc>,
    category: String,
    notes: String,
}

impl Transaction {
    /// Build a transaction stamped with the current wall-clock time.
    pub fn new(
        kind: TransactionType,
        amount: Decimal,
        account_id: AccountId,
        category: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self::with_timestamp(kind, amount, account_id, category, notes, Utc::now())
    }

    pub(crate) fn with_timestamp(
        kind: TransactionType,
        amount: Decimal,
        account_id: AccountId,
        category: impl Into<String>,
        notes: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            kind,
            amount,
            account_id,
            created_at,
            category: category.into(),
            notes: notes.into(),
        }
    }

    pub fn kind(&self) -> TransactionType {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }
}
