//! Locale helpers for the Persian UI.
//!
//! # Responsibilities
//! - Digit conversion between Persian and ASCII
//! - fa-IR number and currency formatting
//! - File size labels
//! - Email and mobile number validation

pub mod currency;
pub mod digits;
pub mod filesize;
pub mod validate;

pub use currency::{format_currency, format_number, Currency};
pub use digits::{to_english_digits, to_persian_digits};
pub use filesize::format_file_size;
pub use validate::{validate_email, validate_phone};
