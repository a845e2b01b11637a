//! Amount parsing and display helpers.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{FinanceError, Result};

/// Currency assigned to new accounts when none is configured.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Render an amount with exactly two fractional digits.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// Parse a user-supplied amount (e.g. "50", "120.00", "-3.5").
pub fn parse_amount(value: &str) -> Result<Decimal> {
    let trimmed = value.trim();
    Decimal::from_str(trimmed).map_err(|_| FinanceError::InvalidAmount(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_amount_pads_and_rounds() {
        assert_eq!(format_amount(dec!(100)), "100.00");
        assert_eq!(format_amount(dec!(0.5)), "0.50");
        assert_eq!(format_amount(dec!(-12.345)), "-12.35");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("50").unwrap(), dec!(50));
        assert_eq!(parse_amount(" 120.00 ").unwrap(), dec!(120));
        assert_eq!(parse_amount("-3.5").unwrap(), dec!(-3.5));
    }

    #[test]
    fn test_parse_amount_rejects_text() {
        assert_eq!(
            parse_amount("lots"),
            Err(FinanceError::InvalidAmount("lots".to_string()))
        );
        assert!(parse_amount("").is_err());
    }
}
