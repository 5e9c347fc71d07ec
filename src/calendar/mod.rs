//! Calendar conversion.
//!
//! # Data Flow
//! ```text
//! stored ISO date ("2024-01-15")
//!     → format.rs (parse with chrono)
//!     → jalali.rs (pure Gregorian → Jalali arithmetic)
//!     → format.rs ("۱۴۰۲/۱۰/۲۵")
//! ```

pub mod format;
pub mod jalali;

pub use format::{format_jalali, format_jalali_str, jalali_of, parse_iso_date, today_jalali};
pub use jalali::{gregorian_to_jalali, JalaliDate};
