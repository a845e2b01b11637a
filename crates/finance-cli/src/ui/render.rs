//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, ContentArrangement, Table as ComfyTable};

use super::context::UiContext;
use super::theme::{styled, styles, Badge};

/// Render a section title.
///
/// Pretty mode: "Finance · title"
/// Plain mode: "title:"
pub fn header(ctx: &UiContext, title: &str) -> String {
    if ctx.mode.is_pretty() {
        let brand = styled("Finance", styles::bold(), ctx.color);
        format!("{} \u{00B7} {}", brand, title)
    } else {
        format!("{}:", title)
    }
}

/// Render a divider line.
pub fn divider(ctx: &UiContext) -> String {
    if ctx.unicode {
        "\u{2500}".repeat(ctx.width.min(60))
    } else {
        "-".repeat(ctx.width.min(60))
    }
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let badge_text = kind.display(ctx.unicode);
    let colored_badge = styled(badge_text, kind.style(), ctx.color);

    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a status message.
///
/// Pretty mode: badge + message
/// Plain mode: the bare message
pub fn notice(ctx: &UiContext, kind: Badge, message: &str) -> String {
    if ctx.mode.is_pretty() {
        badge(ctx, kind, message)
    } else {
        message.to_string()
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "Key: value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    let label = format!("{}:", key);
    if ctx.mode.is_pretty() {
        format!("{} {}", styled(&label, styles::dim(), ctx.color), value)
    } else {
        format!("{} {}", label, value)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    let label = styled("Hint:", styles::dim(), ctx.color);
    format!("{} {}", label, text)
}

/// Column definition for table rendering.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
    pub align_right: bool,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self {
            header,
            align_right: false,
        }
    }

    /// Right-aligned column, for amounts.
    pub const fn numeric(header: &'static str) -> Self {
        Self {
            header,
            align_right: true,
        }
    }
}

/// Render a bordered table with comfy-table.
pub fn table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    let mut table = ComfyTable::new();

    if ctx.unicode {
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS);
    } else {
        table.load_preset(comfy_table::presets::ASCII_MARKDOWN);
    }

    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_width(u16::try_from(ctx.width).unwrap_or(u16::MAX));

    let headers: Vec<&str> = columns.iter().map(|c| c.header).collect();
    table.set_header(headers);

    for row in rows {
        table.add_row(row);
    }

    for (i, col) in columns.iter().enumerate() {
        if col.align_right {
            if let Some(column) = table.column_mut(i) {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }
    }

    table.to_string()
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on next line
/// Plain mode: the bare message, hint on the next line
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = vec![notice(ctx, Badge::Err, message)];
    if let Some(h) = error_hint {
        lines.push(hint(ctx, h));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;

    fn plain_ctx() -> UiContext {
        UiContext::plain()
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: true,
            width: 80,
            mode: OutputMode::Pretty,
        }
    }

    #[test]
    fn test_header_modes() {
        assert_eq!(header(&plain_ctx(), "List of Accounts"), "List of Accounts:");
        let pretty = header(&pretty_ctx(), "List of Accounts");
        assert!(pretty.contains("Finance"));
        assert!(pretty.contains("List of Accounts"));
    }

    #[test]
    fn test_notice_plain_is_bare() {
        assert_eq!(
            notice(&plain_ctx(), Badge::Ok, "Deposit successful."),
            "Deposit successful."
        );
    }

    #[test]
    fn test_notice_pretty_has_badge() {
        let n = notice(&pretty_ctx(), Badge::Ok, "Deposit successful.");
        assert!(n.contains("[\u{2713}]"));
        assert!(n.contains("Deposit successful."));
    }

    #[test]
    fn test_badge_ascii() {
        let mut ctx = pretty_ctx();
        ctx.unicode = false;
        assert_eq!(badge(&ctx, Badge::Err, "Failed"), "[ERR] Failed");
    }

    #[test]
    fn test_kv() {
        assert_eq!(kv(&plain_ctx(), "Balance", "10.00"), "Balance: 10.00");
        assert_eq!(kv(&pretty_ctx(), "Balance", "10.00"), "Balance: 10.00");
    }

    #[test]
    fn test_divider_ascii() {
        let d = divider(&plain_ctx());
        assert_eq!(d.len(), 60);
        assert!(d.chars().all(|c| c == '-'));
    }

    #[test]
    fn test_table_contains_headers_and_rows() {
        let ctx = pretty_ctx();
        let columns = [Column::new("Name"), Column::numeric("Balance")];
        let rows = vec![vec!["Alice".to_string(), "120.00".to_string()]];
        let t = table(&ctx, &columns, &rows);
        assert!(t.contains("Name"));
        assert!(t.contains("Balance"));
        assert!(t.contains("Alice"));
        assert!(t.contains("120.00"));
    }

    #[test]
    fn test_table_width_saturates_for_huge_terminals() {
        let mut ctx = pretty_ctx();
        ctx.width = usize::from(u16::MAX) + 1;
        let columns = [Column::new("Name"), Column::numeric("Balance")];
        let rows = vec![vec!["Alice".to_string(), "120.00".to_string()]];
        let t = table(&ctx, &columns, &rows);
        assert!(t.contains("Alice"));
        assert!(t.contains("120.00"));
    }

    #[test]
    fn test_table_empty_rows_keeps_headers() {
        let ctx = pretty_ctx();
        let columns = [Column::new("ID"), Column::new("Name")];
        let rows: Vec<Vec<String>> = vec![];
        let t = table(&ctx, &columns, &rows);
        assert!(t.contains("ID"));
        assert!(t.contains("Name"));
    }

    #[test]
    fn test_error_message_with_hint() {
        let e = error_message(&plain_ctx(), "Invalid choice.", Some("Pick 1-8"));
        assert_eq!(e, "Invalid choice.\nHint: Pick 1-8");

        let e = error_message(&pretty_ctx(), "Invalid choice.", None);
        assert!(e.contains("[\u{2717}]"));
    }
}
