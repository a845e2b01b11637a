//! Transaction search queries.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{FinanceError, Result};
use crate::money::parse_amount;
use crate::model::Transaction;

/// Transaction attribute a search runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Account,
    Type,
    Amount,
    Category,
    Notes,
}

impl SearchField {
    const ALL: [SearchField; 5] = [
        Self::Account,
        Self::Type,
        Self::Amount,
        Self::Category,
        Self::Notes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Account => "Account",
            Self::Type => "Type",
            Self::Amount => "Amount",
            Self::Category => "Category",
            Self::Notes => "Notes",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = FinanceError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let value = s.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| FinanceError::InvalidSearchField(value.to_string()))
    }
}

/// How a query compares against a transaction.
#[derive(Debug, Clone, PartialEq)]
enum Matcher {
    /// Lowercased needle for substring containment
    Text(String),
    /// Exact decimal equality
    Amount(Decimal),
}

/// A parsed search over the global transaction log.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    field: SearchField,
    matcher: Matcher,
}

impl SearchQuery {
    /// Build a query from a field and raw search text.
    ///
    /// Amount queries parse `text` as a decimal up front, so an unparsable
    /// amount fails here rather than silently matching nothing.
    pub fn new(field: SearchField, text: &str) -> Result<Self> {
        let matcher = match field {
            SearchField::Amount => Matcher::Amount(parse_amount(text)?),
            _ => Matcher::Text(text.to_lowercase()),
        };
        Ok(Self { field, matcher })
    }

    /// Parse both the field name and the search text.
    pub fn parse(field: &str, text: &str) -> Result<Self> {
        Self::new(field.parse()?, text)
    }

    /// Check a transaction against the query.
    ///
    /// `account_name` is the name of the account the transaction references;
    /// it is only consulted for `SearchField::Account`.
    pub fn matches(&self, transaction: &Transaction, account_name: &str) -> bool {
        match &self.matcher {
            Matcher::Amount(amount) => transaction.amount() == *amount,
            Matcher::Text(needle) => {
                let haystack = match self.field {
                    SearchField::Account => account_name,
                    SearchField::Type => transaction.kind().as_str(),
                    SearchField::Category => transaction.category(),
                    SearchField::Notes => transaction.notes(),
                    SearchField::Amount => return false,
                };
                haystack.to_lowercase().contains(needle.as_str())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AccountId, TransactionType};
    use rust_decimal_macros::dec;

    fn sample() -> Transaction {
        Transaction::new(
            TransactionType::Deposit,
            dec!(50.00),
            AccountId::new(),
            "Salary",
            "October paycheck",
        )
    }

    #[test]
    fn test_field_parse_is_case_insensitive() {
        assert_eq!("account".parse::<SearchField>().unwrap(), SearchField::Account);
        assert_eq!("AMOUNT".parse::<SearchField>().unwrap(), SearchField::Amount);
        assert_eq!("Notes".parse::<SearchField>().unwrap(), SearchField::Notes);
    }

    #[test]
    fn test_field_parse_rejects_unknown() {
        assert_eq!(
            "date".parse::<SearchField>(),
            Err(FinanceError::InvalidSearchField("date".to_string()))
        );
    }

    #[test]
    fn test_text_fields_match_substrings_case_insensitively() {
        let tx = sample();
        assert!(SearchQuery::parse("account", "LIC").unwrap().matches(&tx, "Alice"));
        assert!(SearchQuery::parse("type", "dep").unwrap().matches(&tx, "Alice"));
        assert!(SearchQuery::parse("category", "sal").unwrap().matches(&tx, "Alice"));
        assert!(SearchQuery::parse("notes", "PAYCHECK").unwrap().matches(&tx, "Alice"));
        assert!(!SearchQuery::parse("category", "rent").unwrap().matches(&tx, "Alice"));
        assert!(!SearchQuery::parse("account", "bob").unwrap().matches(&tx, "Alice"));
    }

    #[test]
    fn test_amount_requires_exact_decimal_equality() {
        let tx = sample();
        assert!(SearchQuery::parse("amount", "50").unwrap().matches(&tx, "Alice"));
        assert!(SearchQuery::parse("amount", "50.000").unwrap().matches(&tx, "Alice"));
        assert!(!SearchQuery::parse("amount", "5").unwrap().matches(&tx, "Alice"));
        assert!(!SearchQuery::parse("amount", "50.01").unwrap().matches(&tx, "Alice"));
    }

    #[test]
    fn test_amount_query_rejects_non_numbers() {
        assert_eq!(
            SearchQuery::parse("amount", "fifty"),
            Err(FinanceError::InvalidAmount("fifty".to_string()))
        );
    }

    #[test]
    fn test_empty_text_matches_everything() {
        let tx = sample();
        assert!(SearchQuery::parse("notes", "").unwrap().matches(&tx, "Alice"));
    }
}
