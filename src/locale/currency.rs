//! Number and currency formatting in the fa-IR style.
//!
//! Integer part grouped by three with `٬`, fraction (at most three digits,
//! trailing zeros dropped) after `٫`, all digits Persian.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::locale::digits::to_persian_digits;

const GROUP_SEPARATOR: char = '\u{066C}';
const DECIMAL_SEPARATOR: char = '\u{066B}';
// Left-to-right mark followed by the Unicode minus sign.
const NEGATIVE_PREFIX: &str = "\u{200E}\u{2212}";

/// Currencies the client knows how to label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Irr,
    Afn,
    Usd,
    Eur,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Irr, Currency::Afn, Currency::Usd, Currency::Eur];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Irr => "IRR",
            Currency::Afn => "AFN",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Irr => "ریال",
            Currency::Afn => "افغانی",
            Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }

    /// Display name for pickers.
    pub fn name(&self) -> &'static str {
        match self {
            Currency::Irr => "ریال ایران",
            Currency::Afn => "افغانی",
            Currency::Usd => "دلار آمریکا",
            Currency::Eur => "یورو",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned for an unrecognized currency code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown currency code: {0}")]
pub struct UnknownCurrency(pub String);

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .iter()
            .copied()
            .find(|c| c.code() == s)
            .ok_or_else(|| UnknownCurrency(s.to_string()))
    }
}

/// Format a number with fa-IR grouping and Persian digits.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(c);
    }
    if !frac_part.is_empty() {
        grouped.push(DECIMAL_SEPARATOR);
        grouped.push_str(frac_part);
    }

    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    let sign = if value < 0.0 && !is_zero { NEGATIVE_PREFIX } else { "" };
    format!("{sign}{}", to_persian_digits(&grouped))
}

/// Format an amount followed by its currency label.
///
/// Unknown codes are printed as given.
pub fn format_currency(amount: f64, currency: &str) -> String {
    let label = currency
        .parse::<Currency>()
        .map(|c| c.symbol())
        .unwrap_or(currency);
    format!("{} {}", format_number(amount), label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        assert_eq!(format_number(0.0), "۰");
        assert_eq!(format_number(999.0), "۹۹۹");
        assert_eq!(format_number(1000.0), "۱٬۰۰۰");
        assert_eq!(format_number(8_050_000.0), "۸٬۰۵۰٬۰۰۰");
        assert_eq!(format_number(123_456_789.0), "۱۲۳٬۴۵۶٬۷۸۹");
    }

    #[test]
    fn test_fraction_and_sign() {
        assert_eq!(format_number(1234.5), "۱٬۲۳۴٫۵");
        assert_eq!(format_number(0.12345), "۰٫۱۲۳");
        assert_eq!(format_number(-1500.0), "\u{200E}\u{2212}۱٬۵۰۰");
    }

    #[test]
    fn test_currency_labels() {
        assert_eq!(format_currency(8_050_000.0, "IRR"), "۸٬۰۵۰٬۰۰۰ ریال");
        assert_eq!(format_currency(25.0, "USD"), "۲۵ $");
        assert_eq!(format_currency(10.0, "GBP"), "۱۰ GBP");
    }

    #[test]
    fn test_currency_codes() {
        for currency in Currency::ALL {
            assert_eq!(currency.code().parse::<Currency>(), Ok(currency));
        }
        assert!("irr".parse::<Currency>().is_err());
        assert_eq!(serde_json::to_string(&Currency::Afn).unwrap(), "\"AFN\"");
    }
}
