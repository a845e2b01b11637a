//! Application-level utilities for the Finance CLI.
//!
//! This module provides:
//! - Path resolution for the config file
//! - The lazily-configured application context

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
