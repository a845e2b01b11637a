//! Handlers for each menu operation.
//!
//! Every handler reads its own input through the session's prompter, calls
//! into the manager, and prints the result. Domain failures are returned as
//! `FinanceError` and rendered by the session loop.

pub mod accounts;
pub mod categories;
pub mod misc;
pub mod summary;
pub mod transactions;
