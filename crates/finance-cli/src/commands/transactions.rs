use finance_core::{format_amount, parse_amount, FinanceError, SearchQuery, TransactionType};

use crate::output::{render_account_picker, render_transactions};
use crate::session::Session;
use crate::ui::{kv, notice, Badge};

pub fn handle_perform(session: &mut Session) -> anyhow::Result<()> {
    if !session.manager.has_accounts() {
        return Err(FinanceError::NoAccounts.into());
    }

    session.say(&render_account_picker(
        &session.ui,
        session.manager.accounts(),
    ));
    let choice = session.prompter.token("Enter your choice")?;
    let choice: usize = choice
        .parse()
        .map_err(|_| FinanceError::InvalidInput(format!("not an account number: {:?}", choice)))?;
    let account_id = session.manager.select_account(choice)?;

    // All fields are read before validation so scripted input stays aligned.
    let kind = session
        .prompter
        .token("Enter transaction type (Deposit or Withdrawal)")?;
    let amount = session.prompter.token("Enter amount")?;
    let category = session.prompter.text("Enter transaction category")?;
    let notes = session
        .prompter
        .read_line("Enter transaction notes (optional)")?;

    let kind: TransactionType = kind.parse()?;
    let amount = parse_amount(&amount)?;

    session
        .manager
        .perform_transaction(account_id, kind, amount, &category, &notes)?;

    let message = match kind {
        TransactionType::Deposit => "Deposit successful.",
        TransactionType::Withdrawal => "Withdrawal successful.",
    };
    session.say(&notice(&session.ui, Badge::Ok, message));

    if session.ui.mode.is_pretty() {
        let account = session.manager.account(account_id)?;
        session.say(&format!(
            "  {}",
            kv(&session.ui, "Balance", &format_amount(account.balance()))
        ));
    }
    Ok(())
}

pub fn handle_display(session: &mut Session) -> anyhow::Result<()> {
    let views: Vec<_> = session.manager.transactions().collect();
    session.say(&render_transactions(&session.ui, "All Transactions", &views));
    Ok(())
}

pub fn handle_search(session: &mut Session) -> anyhow::Result<()> {
    let field = session
        .prompter
        .token("Enter search type (Account, Type, Amount, Category, or Notes)")?;
    let text = session.prompter.text("Enter search text")?;

    let query = SearchQuery::parse(&field, &text)?;
    let views: Vec<_> = session.manager.search(&query).collect();
    session.say(&render_transactions(&session.ui, "Search Results", &views));
    Ok(())
}
