//! UI context for environment detection and configuration.

use std::io::IsTerminal;

use super::mode::OutputMode;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode symbols are enabled
    pub unicode: bool,
    /// Terminal width (columns)
    pub width: usize,
    /// Resolved output mode
    pub mode: OutputMode,
}

impl UiContext {
    /// Create context from environment and CLI flags.
    ///
    /// # Arguments
    /// * `forced_mode` - Mode from `--format`, if given
    /// * `no_color` - Whether color was disabled by flag or config
    /// * `ascii` - Whether unicode was disabled by flag or config
    pub fn from_env(forced_mode: Option<OutputMode>, no_color: bool, ascii: bool) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        // Color is disabled by NO_COLOR, --no-color, TERM=dumb, or a non-TTY stdout
        let color = is_tty && !no_color && !no_color_env && !term_is_dumb;

        let width = terminal_width().unwrap_or(80);
        let mode = OutputMode::resolve(forced_mode, is_tty, term_is_dumb);

        Self {
            color,
            unicode: !ascii,
            width,
            mode,
        }
    }

    /// Plain, uncolored, ASCII context.
    pub fn plain() -> Self {
        Self {
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Plain,
        }
    }
}

/// Terminal width from `COLUMNS`, if set.
fn terminal_width() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|cols| cols.parse::<usize>().ok())
        .filter(|&width| width > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forced_plain_mode() {
        let ctx = UiContext::from_env(Some(OutputMode::Plain), false, false);
        assert_eq!(ctx.mode, OutputMode::Plain);
    }

    #[test]
    fn test_ascii_disables_unicode() {
        let ctx = UiContext::from_env(None, false, true);
        assert!(!ctx.unicode);
    }

    #[test]
    fn test_no_color_disables_color() {
        let ctx = UiContext::from_env(None, true, false);
        assert!(!ctx.color);
    }

    #[test]
    fn test_width_has_default() {
        let ctx = UiContext::from_env(None, false, false);
        assert!(ctx.width > 0);
    }
}
