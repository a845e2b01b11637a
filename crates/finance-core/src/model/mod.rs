//! Domain data model.
//!
//! - **account**: `Account` and its stable `AccountId`
//! - **transaction**: immutable `Transaction` records and `TransactionType`

mod account;
mod transaction;

pub use account::{Account, AccountId};
pub use transaction::{Transaction, TransactionType};
