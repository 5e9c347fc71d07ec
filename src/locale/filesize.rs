//! Human-readable byte sizes in Persian.

use crate::locale::digits::to_persian_digits;

const UNITS: [&str; 4] = ["بایت", "کیلوبایت", "مگابایت", "گیگابایت"];

/// Format `bytes` with the largest fitting binary unit, two decimals at most.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return format!("0 {}", UNITS[0]);
    }

    let k = 1024f64;
    let exponent = ((bytes as f64).ln() / k.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = (bytes as f64 / k.powi(exponent as i32) * 100.0).round() / 100.0;

    format!("{} {}", to_persian_digits(&value.to_string()), UNITS[exponent])
}
