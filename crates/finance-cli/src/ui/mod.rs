//! UI primitives for the Finance CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (plain, pretty)
//! - **Theme**: Badge tokens and color styles
//! - **Render**: Tables, headers, notices, hints
//! - **Format**: String utilities (truncate, dates)
//! - **Prompt**: Line input from a TTY (dialoguer) or a plain reader

mod context;
pub mod format;
mod mode;
pub mod prompt;
pub mod render;
pub mod theme;

// Re-export core types at module level
pub use context::UiContext;
pub use mode::OutputMode;
pub use prompt::{is_input_closed, LinePrompter, Prompter, TerminalPrompter};
pub use theme::Badge;

// Re-export commonly used render functions
pub use render::{divider, error_message, header, kv, notice, table, Column};
