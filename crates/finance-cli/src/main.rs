//! Finance CLI - a terminal-driven personal finance ledger
//!
//! This is the command-line interface for Finance. It runs the interactive
//! menu session over the in-memory ledger in `finance_core`.

mod app;
mod cli;
mod commands;
mod config;
mod logging;
mod output;
mod session;
mod ui;

use std::io::IsTerminal;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::misc;
use crate::session::Session;
use crate::ui::{error_message, LinePrompter, Prompter, TerminalPrompter, UiContext};

fn main() {
    let cli = Cli::parse();
    logging::init();
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx) {
        let ui_ctx = ctx.ui().unwrap_or_else(|_| UiContext::plain());
        let message = format!("{:#}", e);
        let hint = error_hint(&message);
        eprintln!("{}", error_message(&ui_ctx, &message, hint));
        std::process::exit(1);
    }
}

/// Contextual hints for errors that end the process.
fn error_hint(error: &str) -> Option<&'static str> {
    let error_lower = error.to_lowercase();
    if error_lower.contains("config") {
        return Some("Check the file named above, or pass --config to use another one.");
    }
    if error_lower.contains("currency") {
        return Some("Use a code such as USD or EUR.");
    }
    None
}

fn run(ctx: &AppContext) -> anyhow::Result<()> {
    match &ctx.cli().command {
        Some(Commands::Completions { shell }) => misc::handle_completions(*shell),
        Some(Commands::Run) | None => run_session(ctx),
    }
}

fn run_session(ctx: &AppContext) -> anyhow::Result<()> {
    let ui = ctx.ui()?;
    let manager = ctx.build_manager()?;

    let prompter: Box<dyn Prompter> = if std::io::stdin().is_terminal() {
        Box::new(TerminalPrompter::new(ui.color))
    } else {
        Box::new(LinePrompter::new(
            std::io::stdin().lock(),
            std::io::stdout(),
        ))
    };

    Session::new(ui, manager, prompter, ctx.quiet()).run()
}
