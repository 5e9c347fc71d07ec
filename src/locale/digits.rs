//! Persian / Latin digit conversion.

const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Replace ASCII digits with Persian digits. Other characters pass through.
pub fn to_persian_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => PERSIAN_DIGITS[d as usize],
            _ => c,
        })
        .collect()
}

/// Replace Persian digits with ASCII digits. Other characters pass through.
pub fn to_english_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match PERSIAN_DIGITS.iter().position(|&p| p == c) {
            Some(d) => char::from(b'0' + d as u8),
            None => c,
        })
        .collect()
}
