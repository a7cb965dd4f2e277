//! Shared currency formatting for displayed amounts.
//!
//! Presentation only: the calculators never call this. Output follows the
//! browser formatting the marketplace screens used (`en-IN`, `INR`, no
//! forced fraction digits).

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LOCALE: &str = "en-IN";
pub const DEFAULT_CURRENCY_CODE: &str = "INR";

/// Locale and currency used to render amounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub locale: String,
    pub currency_code: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE, DEFAULT_CURRENCY_CODE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grouping {
    /// 1,234,567
    Thousands,
    /// 12,34,567
    Indian,
}

struct LocaleRules {
    group_separator: &'static str,
    decimal_separator: &'static str,
    grouping: Grouping,
    symbol_first: bool,
}

impl CurrencyFormat {
    pub fn new(locale: impl Into<String>, currency_code: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            currency_code: currency_code.into().to_uppercase(),
        }
    }

    /// Render `amount` with symbol, grouping and at most the currency's
    /// fraction digits. Trailing zero fractions are dropped.
    ///
    /// # Examples
    /// ```
    /// use rust_decimal_macros::dec;
    /// use rental_pricing::pricing::CurrencyFormat;
    ///
    /// let inr = CurrencyFormat::default();
    /// assert_eq!(inr.format(dec!(123456)), "₹1,23,456");
    /// assert_eq!(inr.format(dec!(1500.50)), "₹1,500.5");
    /// ```
    pub fn format(&self, amount: Decimal) -> String {
        let rules = self.rules();
        let rounded = amount
            .round_dp_with_strategy(self.fraction_digits(), RoundingStrategy::MidpointAwayFromZero)
            .normalize();
        let negative = rounded.is_sign_negative() && !rounded.is_zero();

        let digits = rounded.abs().to_string();
        let (integer, fraction) = match digits.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (digits.as_str(), None),
        };

        let mut number = group_digits(integer, rules.grouping, rules.group_separator);
        if let Some(fraction) = fraction {
            number.push_str(rules.decimal_separator);
            number.push_str(fraction);
        }

        let sign = if negative { "-" } else { "" };
        match (self.symbol(), rules.symbol_first) {
            (Some(symbol), true) => format!("{sign}{symbol}{number}"),
            (Some(symbol), false) => format!("{sign}{number}\u{a0}{symbol}"),
            (None, true) => format!("{sign}{}\u{a0}{number}", self.currency_code),
            (None, false) => format!("{sign}{number}\u{a0}{}", self.currency_code),
        }
    }

    fn symbol(&self) -> Option<&'static str> {
        match self.currency_code.as_str() {
            "INR" => Some("₹"),
            "USD" => Some("$"),
            "EUR" => Some("€"),
            "GBP" => Some("£"),
            "JPY" => Some("¥"),
            _ => None,
        }
    }

    fn fraction_digits(&self) -> u32 {
        match self.currency_code.as_str() {
            "JPY" => 0,
            _ => 2,
        }
    }

    fn rules(&self) -> LocaleRules {
        let mut parts = self.locale.split(['-', '_']);
        let language = parts.next().unwrap_or_default().to_lowercase();
        let region = parts.next().unwrap_or_default().to_uppercase();

        let grouping = if region == "IN" {
            Grouping::Indian
        } else {
            Grouping::Thousands
        };

        match language.as_str() {
            "de" | "es" | "it" | "pt" | "nl" => LocaleRules {
                group_separator: ".",
                decimal_separator: ",",
                grouping,
                symbol_first: false,
            },
            "fr" => LocaleRules {
                group_separator: "\u{202f}",
                decimal_separator: ",",
                grouping,
                symbol_first: false,
            },
            _ => LocaleRules {
                group_separator: ",",
                decimal_separator: ".",
                grouping,
                symbol_first: true,
            },
        }
    }
}

fn group_digits(integer: &str, grouping: Grouping, separator: &str) -> String {
    if integer.len() <= 3 {
        return integer.to_string();
    }

    let (head, last_three) = integer.split_at(integer.len() - 3);
    let group_size = match grouping {
        Grouping::Thousands => 3,
        Grouping::Indian => 2,
    };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(group_size);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(last_three);
    groups.join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    // ==================== en-IN / INR tests ====================

    #[test]
    fn test_format_inr_small_amounts() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.format(dec!(0)), "₹0");
        assert_eq!(fmt.format(dec!(500)), "₹500");
        assert_eq!(fmt.format(dec!(3000)), "₹3,000");
    }

    #[test]
    fn test_format_inr_indian_grouping() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.format(dec!(12500)), "₹12,500");
        assert_eq!(fmt.format(dec!(123456)), "₹1,23,456");
        assert_eq!(fmt.format(dec!(12345678)), "₹1,23,45,678");
    }

    #[test]
    fn test_format_inr_fraction_handling() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.format(dec!(1500.00)), "₹1,500");
        assert_eq!(fmt.format(dec!(1500.50)), "₹1,500.5");
        assert_eq!(fmt.format(dec!(2666.665)), "₹2,666.67");
        assert_eq!(fmt.format(dec!(0.004)), "₹0");
    }

    #[test]
    fn test_format_negative() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.format(dec!(-1234)), "-₹1,234");
        assert_eq!(fmt.format(dec!(-0.001)), "₹0");
    }

    // ==================== other locale tests ====================

    #[test]
    fn test_format_en_us_thousands_grouping() {
        let fmt = CurrencyFormat::new("en-US", "usd");
        assert_eq!(fmt.format(dec!(1234567.891)), "$1,234,567.89");
    }

    #[test]
    fn test_format_inr_outside_india_groups_by_thousands() {
        let fmt = CurrencyFormat::new("en-GB", "INR");
        assert_eq!(fmt.format(dec!(123456)), "₹123,456");
    }

    #[test]
    fn test_format_german_euro() {
        let fmt = CurrencyFormat::new("de-DE", "EUR");
        assert_eq!(fmt.format(dec!(1234.5)), "1.234,5\u{a0}€");
    }

    #[test]
    fn test_format_french_uses_narrow_space() {
        let fmt = CurrencyFormat::new("fr-FR", "EUR");
        assert_eq!(fmt.format(dec!(1234567)), "1\u{202f}234\u{202f}567\u{a0}€");
    }

    #[test]
    fn test_format_yen_has_no_fraction() {
        let fmt = CurrencyFormat::new("en-US", "JPY");
        assert_eq!(fmt.format(dec!(1234.5)), "¥1,235");
    }

    #[test]
    fn test_format_unknown_currency_and_locale() {
        let fmt = CurrencyFormat::new("xx", "CHF");
        assert_eq!(fmt.format(dec!(1000)), "CHF\u{a0}1,000");
    }
}
