//! Contact field validation.

use regex::Regex;
use std::sync::LazyLock;

use crate::locale::digits::to_english_digits;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// Iranian mobile numbers: optional +98 or 0 prefix, then 9 and nine digits.
static PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\+98|0)?9[0-9]{9}$").unwrap());

pub fn validate_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Persian digits are accepted.
pub fn validate_phone(phone: &str) -> bool {
    PHONE.is_match(&to_english_digits(phone))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(validate_email("info@example.com"));
        assert!(!validate_email("info@example"));
        assert!(!validate_email("in fo@example.com"));
        assert!(!validate_email("@example.com"));
    }

    #[test]
    fn test_phone() {
        assert!(validate_phone("09123456789"));
        assert!(validate_phone("+989123456789"));
        assert!(validate_phone("9123456789"));
        assert!(validate_phone("۰۹۱۲۳۴۵۶۷۸۹"));
        assert!(!validate_phone("08123456789"));
        assert!(!validate_phone("0912345678"));
    }
}
