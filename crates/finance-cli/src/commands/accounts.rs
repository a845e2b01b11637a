use finance_core::{format_amount, parse_amount};

use crate::output::render_accounts;
use crate::session::Session;
use crate::ui::{kv, notice, Badge};

pub fn handle_create(session: &mut Session) -> anyhow::Result<()> {
    let name = session.prompter.text("Enter account name")?;
    let account_type = session
        .prompter
        .text("Enter account type (Checking, Savings, Credit Card, etc.)")?;
    let balance = session.prompter.token("Enter initial balance")?;
    let balance = parse_amount(&balance)?;

    let id = session.manager.create_account(name, balance, account_type);
    session.say(&notice(
        &session.ui,
        Badge::Ok,
        "Account created successfully.",
    ));

    if session.ui.mode.is_pretty() {
        let account = session.manager.account(id)?;
        session.say(&format!(
            "  {}",
            kv(
                &session.ui,
                "Balance",
                &format!("{} {}", format_amount(account.balance()), account.currency)
            )
        ));
    }
    Ok(())
}

pub fn handle_list(session: &mut Session) -> anyhow::Result<()> {
    session.say(&render_accounts(&session.ui, session.manager.accounts()));
    Ok(())
}
