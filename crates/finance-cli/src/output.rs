//! Output formatting for accounts, transactions, and summaries.
//!
//! Every renderer returns a `String`; commands decide when to print.

use finance_core::{format_amount, Account, AccountSummary, Transaction, TransactionView};

use crate::ui::format::{format_datetime, single_line, truncate};
use crate::ui::{divider, header, kv, table, Column, UiContext};

const NOTES_MAX: usize = 40;

/// Menu choices in display order.
pub const MENU_ITEMS: [&str; 8] = [
    "Create Account",
    "List Accounts",
    "Perform Transaction",
    "Display All Transactions",
    "Search Transactions",
    "Display Account Summary",
    "Manage Categories",
    "Exit",
];

pub fn render_menu(ctx: &UiContext) -> String {
    let mut lines = vec![String::new(), header(ctx, "Personal Finance Manager")];
    for (i, item) in MENU_ITEMS.iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, item));
    }
    lines.join("\n")
}

pub fn render_accounts<'a>(
    ctx: &UiContext,
    accounts: impl Iterator<Item = &'a Account>,
) -> String {
    let mut lines = vec![String::new(), header(ctx, "List of Accounts")];
    if ctx.mode.is_pretty() {
        let columns = [
            Column::new("Name"),
            Column::new("Type"),
            Column::numeric("Balance"),
            Column::new("Currency"),
        ];
        let rows: Vec<Vec<String>> = accounts
            .map(|account| {
                vec![
                    account.name.clone(),
                    account.account_type.clone(),
                    format_amount(account.balance()),
                    account.currency.clone(),
                ]
            })
            .collect();
        lines.push(table(ctx, &columns, &rows));
    } else {
        lines.extend(accounts.map(|account| {
            format!(
                "Name: {}, Type: {}, Balance: {}",
                account.name,
                account.account_type,
                format_amount(account.balance())
            )
        }));
    }
    lines.join("\n")
}

/// Numbered list for the account picker (1-based).
pub fn render_account_picker<'a>(
    ctx: &UiContext,
    accounts: impl Iterator<Item = &'a Account>,
) -> String {
    let mut lines = vec![String::new(), header(ctx, "Select an account")];
    lines.extend(accounts.enumerate().map(|(i, account)| {
        if ctx.mode.is_pretty() {
            format!(
                "{}. {} ({}, {})",
                i + 1,
                account.name,
                account.account_type,
                format_amount(account.balance())
            )
        } else {
            format!("{}. {}", i + 1, account.name)
        }
    }));
    lines.join("\n")
}

/// Transactions with their account names, under `title`.
pub fn render_transactions(ctx: &UiContext, title: &str, views: &[TransactionView<'_>]) -> String {
    let mut lines = vec![String::new(), header(ctx, title)];
    if ctx.mode.is_pretty() {
        if views.is_empty() {
            lines.push("No transactions.".to_string());
        } else {
            let columns = [
                Column::new("Date"),
                Column::new("Account"),
                Column::new("Type"),
                Column::numeric("Amount"),
                Column::new("Category"),
                Column::new("Notes"),
            ];
            let rows: Vec<Vec<String>> = views
                .iter()
                .map(|view| {
                    let tx = view.transaction;
                    vec![
                        format_datetime(&tx.created_at()),
                        view.account.name.clone(),
                        tx.kind().to_string(),
                        format_amount(tx.amount()),
                        tx.category().to_string(),
                        truncate(&single_line(tx.notes()), NOTES_MAX),
                    ]
                })
                .collect();
            lines.push(table(ctx, &columns, &rows));
        }
    } else {
        lines.extend(views.iter().map(|view| {
            let tx = view.transaction;
            format!(
                "Account: {}, Type: {}, Amount: {}, Category: {}, Notes: {}",
                view.account.name,
                tx.kind(),
                format_amount(tx.amount()),
                tx.category(),
                single_line(tx.notes())
            )
        }));
    }
    lines.join("\n")
}

pub fn render_summary(ctx: &UiContext, summaries: &[AccountSummary<'_>]) -> String {
    let mut lines = vec![String::new(), header(ctx, "Account Summary")];
    for summary in summaries {
        let account = summary.account;
        lines.push(kv(ctx, "Account", &account.name));
        lines.push(kv(ctx, "Balance", &format_amount(account.balance())));
        if ctx.mode.is_pretty() {
            lines.push(kv(ctx, "Type", &account.account_type));
            if summary.transactions.is_empty() {
                lines.push("No transactions.".to_string());
            } else {
                lines.push(summary_table(ctx, &summary.transactions));
            }
            lines.push(divider(ctx));
        } else {
            lines.push("Transactions:".to_string());
            lines.extend(summary.transactions.iter().map(|tx| {
                format!(
                    "Type: {}, Amount: {}, Category: {}, Notes: {}",
                    tx.kind(),
                    format_amount(tx.amount()),
                    tx.category(),
                    single_line(tx.notes())
                )
            }));
        }
        lines.push(String::new());
    }
    lines.join("\n")
}

fn summary_table(ctx: &UiContext, transactions: &[&Transaction]) -> String {
    let columns = [
        Column::new("Date"),
        Column::new("Type"),
        Column::numeric("Amount"),
        Column::new("Category"),
        Column::new("Notes"),
    ];
    let rows: Vec<Vec<String>> = transactions
        .iter()
        .map(|tx| {
            vec![
                format_datetime(&tx.created_at()),
                tx.kind().to_string(),
                format_amount(tx.amount()),
                tx.category().to_string(),
                truncate(&single_line(tx.notes()), NOTES_MAX),
            ]
        })
        .collect();
    table(ctx, &columns, &rows)
}

pub fn render_categories(ctx: &UiContext, categories: &[(&str, &[String])]) -> String {
    let mut lines = vec![String::new(), header(ctx, "Categories")];
    if categories.is_empty() {
        lines.push("No categories configured.".to_string());
    }
    for (name, items) in categories {
        if items.is_empty() {
            lines.push(name.to_string());
        } else {
            lines.push(format!("{}: {}", name, items.join(", ")));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use finance_core::FinanceManager;
    use rust_decimal::Decimal;

    fn alice_manager() -> FinanceManager {
        let mut manager = FinanceManager::new();
        let alice = manager.create_account("Alice", Decimal::new(10000, 2), "Checking");
        manager
            .deposit(alice, Decimal::new(5000, 2), "Salary", "")
            .unwrap();
        manager
            .deposit(alice, Decimal::new(12000, 2), "Bonus", "year end")
            .unwrap();
        manager
    }

    #[test]
    fn test_menu_lists_eight_choices() {
        let menu = render_menu(&UiContext::plain());
        assert!(menu.contains("Personal Finance Manager:"));
        assert!(menu.contains("1. Create Account"));
        assert!(menu.contains("8. Exit"));
    }

    #[test]
    fn test_plain_accounts() {
        let manager = alice_manager();
        let out = render_accounts(&UiContext::plain(), manager.accounts());
        assert!(out.contains("List of Accounts:"));
        assert!(out.contains("Name: Alice, Type: Checking, Balance: 270.00"));
    }

    #[test]
    fn test_plain_picker_is_one_based() {
        let mut manager = alice_manager();
        manager.create_account("Bob", Decimal::ZERO, "Savings");
        let out = render_account_picker(&UiContext::plain(), manager.accounts());
        assert!(out.contains("1. Alice"));
        assert!(out.contains("2. Bob"));
    }

    #[test]
    fn test_plain_transactions() {
        let manager = alice_manager();
        let views: Vec<_> = manager.transactions().collect();
        let out = render_transactions(&UiContext::plain(), "All Transactions", &views);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "All Transactions:");
        assert_eq!(
            lines[2],
            "Account: Alice, Type: Deposit, Amount: 50.00, Category: Salary, Notes: "
        );
        assert_eq!(
            lines[3],
            "Account: Alice, Type: Deposit, Amount: 120.00, Category: Bonus, Notes: year end"
        );
    }

    #[test]
    fn test_plain_summary_is_largest_first() {
        let manager = alice_manager();
        let summary = manager.account_summary().unwrap();
        let out = render_summary(&UiContext::plain(), &summary);
        let big = out.find("Amount: 120.00").unwrap();
        let small = out.find("Amount: 50.00").unwrap();
        assert!(big < small);
        assert!(out.contains("Account: Alice"));
        assert!(out.contains("Balance: 270.00"));
    }

    #[test]
    fn test_categories_empty_notice() {
        let out = render_categories(&UiContext::plain(), &[]);
        assert!(out.contains("No categories configured."));
    }

    #[test]
    fn test_categories_listing() {
        let items = vec!["Rent".to_string(), "Utilities".to_string()];
        let out = render_categories(&UiContext::plain(), &[("Housing", items.as_slice())]);
        assert!(out.contains("Housing: Rent, Utilities"));
    }
}
